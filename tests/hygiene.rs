//! Source rules for the production tree under `src/`.
//!
//! Two tables drive the checks. `BUDGETS` caps how often a pattern may
//! appear anywhere; `CONFINED` names the only files allowed to mention a
//! pattern at all. Comment lines and `*_test.rs` files are not scanned.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, hint)`. Budgets only go down.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "propagate with `?` or fall back explicitly"),
    (".expect(", 0, "propagate with `?` or fall back explicitly"),
    ("panic!(", 0, "a panic takes down the whole WASM module"),
    ("todo!(", 0, "finish the stub"),
    ("unimplemented!(", 0, "finish the stub"),
    (".ok()", 0, "log or return the error instead of dropping it"),
    ("let _ =", 5, "only native stubs may discard their parameters"),
    ("println!(", 0, "use the `log` macros"),
    ("dbg!(", 0, "use the `log` macros"),
    ("#[allow(dead_code)]", 0, "delete the unused item"),
    ("block_on(", 0, "the browser has no blocking executor"),
    ("Local::now()", 0, "formatting must not depend on the current clock"),
];

/// `(pattern, files allowed to use it)`.
const CONFINED: &[(&str, &[&str])] = &[
    ("gloo_net", &["src/net/transport.rs"]),
    ("web_sys::", &["src/net/transport.rs", "src/util/browser.rs"]),
    ("js_sys::", &["src/net/transport.rs", "src/util/browser.rs"]),
    ("wasm_bindgen_futures", &["src/util/browser.rs"]),
    ("wasm_bindgen(start)", &["src/lib.rs"]),
    ("ScriptedTransport", &["src/net/scripted.rs"]),
];

struct Source {
    path: String,
    lines: Vec<String>,
}

fn sources() -> Vec<Source> {
    let mut paths = Vec::new();
    walk(Path::new("src"), &mut paths);
    paths.sort();
    paths
        .into_iter()
        .filter_map(|path| {
            let text = fs::read_to_string(&path).ok()?;
            let lines = text
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .map(str::to_owned)
                .collect();
            Some(Source {
                path: path.to_string_lossy().replace('\\', "/"),
                lines,
            })
        })
        .collect()
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

/// `(path, matching lines)` for every file that mentions `pattern`.
fn hits<'a>(files: &'a [Source], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .map(|file| {
            let count = file.lines.iter().filter(|line| line.contains(pattern)).count();
            (file.path.as_str(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn report(hits: &[(&str, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_scanned() {
    let files = sources();
    assert!(files.iter().any(|f| f.path == "src/lib.rs"), "no sources found under src/");
    assert!(
        files.iter().all(|f| !f.path.ends_with("_test.rs")),
        "test files must not be scanned"
    );
}

#[test]
fn patterns_stay_within_budget() {
    let files = sources();
    let failures: Vec<String> = BUDGETS
        .iter()
        .filter_map(|(pattern, budget, hint)| {
            let found = hits(&files, pattern);
            let count: usize = found.iter().map(|(_, n)| n).sum();
            (count > *budget).then(|| format!("`{pattern}`: {count} > {budget} ({hint})\n{}", report(&found)))
        })
        .collect();
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn platform_code_stays_in_its_modules() {
    let files = sources();
    let failures: Vec<String> = CONFINED
        .iter()
        .filter_map(|(pattern, allowed)| {
            let stray: Vec<_> = hits(&files, pattern)
                .into_iter()
                .filter(|(path, _)| !allowed.contains(path))
                .collect();
            (!stray.is_empty()).then(|| format!("`{pattern}` outside {allowed:?}:\n{}", report(&stray)))
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn confined_patterns_are_still_in_use() {
    let files = sources();
    for (pattern, _) in CONFINED {
        assert!(
            !hits(&files, pattern).is_empty(),
            "`{pattern}` no longer appears in src/; drop its rule"
        );
    }
}
