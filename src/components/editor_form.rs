//! Post editor shared by the create and edit screens.
//!
//! DESIGN
//! ======
//! The form only edits `EditorState`; the owning page decides what submit
//! means and reports failures through `errors`.

use leptos::prelude::*;

use crate::components::form_feedback::FieldError;
use crate::net::error::ApiError;
use crate::net::types::Category;
use crate::routes;
use crate::state::editor::{EditorState, READ_TIME_MAX, READ_TIME_MIN};
use crate::state::form::FormErrors;
use crate::util::browser;

/// Show server field errors inline; anything else gets `alert_message`.
pub fn report_publish_error(err: &ApiError, errors: RwSignal<FormErrors>, alert_message: &str) {
    log::warn!("publishing post failed: {err}");
    match FormErrors::fields_from(err) {
        Some(fields) => errors.set(fields),
        None => browser::alert(alert_message),
    }
}

#[component]
pub fn EditorForm(
    editor: RwSignal<EditorState>,
    errors: RwSignal<FormErrors>,
    #[prop(into)] submitting: Signal<bool>,
    heading: &'static str,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_pick = move |ev: leptos::ev::Event| {
        leptos::task::spawn_local(async move {
            match browser::read_picked_file(ev).await {
                Ok(Some((upload, preview))) => {
                    errors.update(|e| e.clear_for_input("image"));
                    editor.update(|s| s.choose_image(upload, preview));
                }
                Ok(None) => {}
                Err(err) => {
                    leptos::logging::warn!("reading picked file failed: {err}");
                    browser::alert("Could not read that file.");
                }
            }
        });
    };

    view! {
        <div class="editor">
            <header class="editor__header">
                <h1>{heading}</h1>
                <div class="editor__actions">
                    <a class="btn" href=routes::MY_BLOGS>
                        "Cancel"
                    </a>
                    <button
                        class="btn btn--primary"
                        disabled=move || submitting.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if submitting.get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </header>

            <section class="editor__cover">
                <Show
                    when=move || editor.with(|s| s.preview.is_some())
                    fallback=move || {
                        view! {
                            <label class="editor__dropzone">
                                <span>"Add a cover image"</span>
                                <input type="file" accept="image/*" on:change=on_pick />
                            </label>
                        }
                    }
                >
                    <img class="editor__preview" src=move || editor.with(|s| s.preview.clone().unwrap_or_default()) />
                    <div class="editor__cover-actions">
                        <button class="btn btn--danger" on:click=move |_| editor.update(EditorState::remove_image)>
                            "Remove image"
                        </button>
                        <label class="btn">
                            "Change image"
                            <input type="file" accept="image/*" class="visually-hidden" on:change=on_pick />
                        </label>
                    </div>
                </Show>
                <FieldError errors=errors name="image" />
            </section>

            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    placeholder="Give your story a title"
                    prop:value=move || editor.with(|s| s.title.clone())
                    on:input=move |ev| {
                        errors.update(|e| e.clear_for_input("title"));
                        editor.update(|s| s.title = event_target_value(&ev));
                    }
                />
                <FieldError errors=errors name="title" />
            </label>

            <div class="form-field">
                <span>"Category"</span>
                <div class="editor__categories">
                    {Category::SELECTABLE
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    type="button"
                                    class="chip"
                                    class:chip--active=move || editor.with(|s| s.category == category)
                                    on:click=move |_| {
                                        errors.update(|e| e.clear_for_input("category"));
                                        editor.update(|s| s.category = category);
                                    }
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <FieldError errors=errors name="category" />
            </div>

            <label class="form-field">
                <span>"Read time: " {move || editor.with(|s| s.read_time)} " min"</span>
                <input
                    type="range"
                    min=READ_TIME_MIN.to_string()
                    max=READ_TIME_MAX.to_string()
                    prop:value=move || editor.with(|s| s.read_time.to_string())
                    on:input=move |ev| {
                        errors.update(|e| e.clear_for_input("readTime"));
                        editor.update(|s| s.set_read_time(&event_target_value(&ev)));
                    }
                />
                <FieldError errors=errors name="readTime" />
            </label>

            <label class="form-field">
                <span>"Content"</span>
                <textarea
                    rows="16"
                    placeholder="Tell your story..."
                    prop:value=move || editor.with(|s| s.content.clone())
                    on:input=move |ev| {
                        errors.update(|e| e.clear_for_input("content"));
                        editor.update(|s| s.content = event_target_value(&ev));
                    }
                ></textarea>
                <FieldError errors=errors name="content" />
            </label>
        </div>
    }
}
