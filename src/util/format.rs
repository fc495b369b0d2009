//! Display formatting for posts.
//!
//! Timestamps arrive as RFC 3339 and are shown in the reader's local time.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

use crate::net::types::Post;

/// Cover shown when a post has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/post-thumb.png";

/// Characters kept in card excerpts.
pub const EXCERPT_CHARS: usize = 100;

/// First `max_chars` characters followed by `...` when the text is longer.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_owned(),
    }
}

pub fn read_time_label(minutes: u32) -> String {
    format!("{minutes} min read")
}

pub fn cover_image(post: &Post) -> String {
    post.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned())
}

const SHORT_DATE: &str = "%b %-d, %Y";
const LONG_DATETIME: &str = "%B %-d, %Y at %-I:%M %p";

fn format_in<Tz: TimeZone>(raw: &str, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.with_timezone(tz).format(pattern).to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// `"Mar 14, 2025"` in the reader's local time; unparsable input is returned unchanged.
pub fn format_short_date(raw: &str) -> String {
    format_in(raw, &Local, SHORT_DATE)
}

/// `"March 14, 2025 at 9:26 AM"` in the reader's local time; unparsable input
/// is returned unchanged.
pub fn format_long_datetime(raw: &str) -> String {
    format_in(raw, &Local, LONG_DATETIME)
}
