//! Edit screen for an existing post.
//!
//! The form is pre-filled from the stored post. When the post cannot be
//! loaded the user is sent back to their list instead of editing a blank form.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::editor_form::{EditorForm, report_publish_error};
use crate::components::guards::redirect_options;
use crate::net::use_api;
use crate::pages::single_blog::load_post;
use crate::routes;
use crate::state::editor::{EditorState, PublishTarget, publish};
use crate::state::form::FormErrors;
use crate::util::browser;

#[component]
pub fn EditBlogPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let params = use_params_map();
    let editor = RwSignal::new(EditorState::default());
    let errors = RwSignal::new(FormErrors::default());
    let submitting = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let post_id = Memo::new(move |_| params.read().get("id"));

    let navigate_back = navigate.clone();
    Effect::new(move || {
        let id = post_id.get();
        loading.set(true);
        let navigate = navigate_back.clone();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match load_post(&client, id).await {
                Ok(post) => {
                    editor.set(EditorState::from_post(&post));
                    loading.set(false);
                }
                Err(message) => {
                    browser::alert(&message);
                    navigate(routes::MY_BLOGS, redirect_options());
                }
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        errors.set(FormErrors::default());
        let state = editor.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match publish(&client, &state, &PublishTarget::Update(id)).await {
                Ok(_) => navigate(routes::MY_BLOGS, redirect_options()),
                Err(err) => report_publish_error(&err, errors, "Failed to update post. Please try again."),
            }
            submitting.set(false);
        });
    });

    view! {
        <div class="editor-page">
            <Show when=move || !loading.get() fallback=|| view! { <p class="feed__status">"Loading post data..."</p> }>
                <EditorForm
                    editor=editor
                    errors=errors
                    submitting=submitting
                    heading="Edit your story"
                    submit_label="Save changes"
                    on_submit=on_submit
                />
            </Show>
        </div>
    }
}
