//! Reading view for one post.

#[cfg(test)]
#[path = "single_blog_test.rs"]
mod single_blog_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::nav_bar::NavBar;
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::Post;
use crate::net::use_api;
use crate::routes;
use crate::util::browser;
use crate::util::format::{cover_image, format_long_datetime, read_time_label};

pub const MISSING_ID: &str = "No post ID provided";
pub const LOAD_FAILED: &str = "Failed to load post";

/// Load the post named by the route parameter.
///
/// # Errors
///
/// Returns a display message when the id is missing or the call fails.
pub async fn load_post<T: Transport + 'static>(client: &ApiClient<T>, id: Option<String>) -> Result<Post, String> {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        return Err(MISSING_ID.to_owned());
    };
    client.get_post(&id).await.map_err(|err| {
        log::warn!("loading post {id} failed: {err}");
        LOAD_FAILED.to_owned()
    })
}

#[component]
pub fn SingleBlogPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let post = RwSignal::new(None::<Result<Post, String>>);

    browser::scroll_to_top(false);

    Effect::new(move || {
        let id = params.read().get("id");
        post.set(None);
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            post.set(Some(load_post(&client, id).await));
        });
    });

    view! {
        <div class="single-blog-page">
            <NavBar />
            {move || match post.get() {
                None => view! { <p class="feed__status">"Loading article..."</p> }.into_any(),
                Some(Err(message)) => {
                    view! {
                        <div class="not-found">
                            <h2>"Post Not Found"</h2>
                            <p>{message}</p>
                            <a class="btn" href=routes::VIEW_BLOGS>
                                "Back to all posts"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(post)) => view! { <Article post=post /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Article(post: Post) -> impl IntoView {
    let cover = cover_image(&post);
    let published = format_long_datetime(&post.created_at);
    let edited = (post.updated_at != post.created_at).then(|| format_long_datetime(&post.updated_at));

    view! {
        <article class="article">
            <header class="article__header">
                <span class="chip">{post.category.label()}</span>
                <h1>{post.title.clone()}</h1>
                <div class="article__meta">
                    <span>{published}</span>
                    <span aria-hidden="true">"·"</span>
                    <span>{read_time_label(post.read_time)}</span>
                </div>
                {edited.map(|at| view! { <p class="article__edited">"Updated " {at}</p> })}
            </header>
            <img
                class="article__cover"
                src=cover
                alt=post.title.clone()
                on:error=move |ev| browser::use_placeholder_image(&ev)
            />
            <div class="article__body">{post.content}</div>
        </article>
    }
}
