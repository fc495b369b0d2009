//! Landing page with the newest posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated entry route. Loads one short page of posts on mount and
//! links out to the full list, the author's own posts, and the editor.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Category, Post};
use crate::net::use_api;
use crate::routes;

/// Posts shown in the home feed.
pub const HOME_FEED_SIZE: u32 = 6;

/// Fetch the newest posts for the home feed.
///
/// # Errors
///
/// Returns the list call's failure.
pub async fn latest_posts<T: Transport + 'static>(client: &ApiClient<T>) -> Result<Vec<Post>, ApiError> {
    Ok(client.list_posts(HOME_FEED_SIZE, 0).await?.posts)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        match latest_posts(&client).await {
            Ok(list) => posts.set(list),
            Err(err) => {
                leptos::logging::warn!("loading home feed failed: {err}");
                error.set(Some("Failed to load posts".to_owned()));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="home-page">
            <NavBar />
            <section class="hero">
                <h1>"Stories worth reading"</h1>
                <p>"Ideas from writers on technology, design, and the craft of building things."</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href=routes::CREATE_BLOG>
                        "Start writing"
                    </a>
                    <a class="btn" href=routes::VIEW_BLOGS>
                        "Explore posts"
                    </a>
                    <a class="btn" href=routes::MY_BLOGS>
                        "My posts"
                    </a>
                </div>
                <ul class="hero__topics">
                    {Category::SELECTABLE
                        .into_iter()
                        .map(|category| view! { <li class="chip">{category.label()}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="feed">
                <header class="feed__header">
                    <h2>"Latest posts"</h2>
                    <a href=routes::VIEW_BLOGS>"View all"</a>
                </header>
                <Show when=move || !loading.get() fallback=|| view! { <p class="feed__status">"Loading posts..."</p> }>
                    <Show
                        when=move || error.get().is_none()
                        fallback=move || view! { <p class="feed__error">{move || error.get().unwrap_or_default()}</p> }
                    >
                        <Show
                            when=move || posts.with(|p| !p.is_empty())
                            fallback=|| view! { <p class="feed__status">"No posts yet. Be the first to write one."</p> }
                        >
                            <div class="post-grid">
                                <For
                                    each=move || posts.get()
                                    key=|post| post.id.clone()
                                    children=|post| view! { <PostCard post=post /> }
                                />
                            </div>
                        </Show>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
