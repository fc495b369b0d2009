//! Card summarizing one post in a list.
//!
//! DESIGN
//! ======
//! Shared by the home feed, the all-posts grid, and the author's own list.
//! Owner actions (edit/delete) only render when `on_delete` is supplied.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::routes;
use crate::util::browser::use_placeholder_image;
use crate::util::format::{EXCERPT_CHARS, cover_image, excerpt, format_short_date, read_time_label};

#[component]
pub fn PostCard(post: Post, #[prop(optional)] on_delete: Option<Callback<String>>) -> impl IntoView {
    let href = routes::blog(&post.id);
    let edit_href = routes::edit_blog(&post.id);
    let cover = cover_image(&post);
    let summary = excerpt(&post.content, EXCERPT_CHARS);
    let date = format_short_date(&post.created_at);
    let id = post.id.clone();

    view! {
        <article class="post-card">
            <a class="post-card__cover" href=href.clone()>
                <img
                    src=cover
                    alt=post.title.clone()
                    on:error=move |ev| use_placeholder_image(&ev)
                />
            </a>
            <div class="post-card__body">
                <span class="post-card__category">{post.category.label()}</span>
                <a class="post-card__title" href=href>
                    {post.title.clone()}
                </a>
                <p class="post-card__excerpt">{summary}</p>
                <div class="post-card__meta">
                    <span>{date}</span>
                    <span aria-hidden="true">"·"</span>
                    <span>{read_time_label(post.read_time)}</span>
                </div>
                {on_delete
                    .map(|on_delete| {
                        view! {
                            <div class="post-card__actions">
                                <a class="btn btn--small" href=edit_href>
                                    "Edit"
                                </a>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| on_delete.run(id.clone())
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    })}
            </div>
        </article>
    }
}
