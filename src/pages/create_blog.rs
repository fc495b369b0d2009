//! New post screen.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::editor_form::{EditorForm, report_publish_error};
use crate::components::guards::redirect_options;
use crate::net::use_api;
use crate::routes;
use crate::state::editor::{EditorState, PublishTarget, publish};
use crate::state::form::FormErrors;

#[component]
pub fn CreateBlogPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let editor = RwSignal::new(EditorState::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        errors.set(FormErrors::default());
        let state = editor.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match publish(&client, &state, &PublishTarget::Create).await {
                Ok(post) => {
                    log::debug!("created post {}", post.id);
                    navigate(routes::MY_BLOGS, redirect_options());
                }
                Err(err) => report_publish_error(&err, errors, "Failed to create post. Please try again."),
            }
            submitting.set(false);
        });
    });

    view! {
        <div class="editor-page">
            <EditorForm
                editor=editor
                errors=errors
                submitting=submitting
                heading="Write a new story"
                submit_label="Publish"
                on_submit=on_submit
            />
        </div>
    }
}
