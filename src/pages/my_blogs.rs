//! The signed-in author's own posts.
//!
//! DESIGN
//! ======
//! The API has no per-author listing, so the page fetches a large batch,
//! keeps the current user's posts, and pages through them locally.

#[cfg(test)]
#[path = "my_blogs_test.rs"]
mod my_blogs_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::pager::PagerControls;
use crate::components::post_card::PostCard;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Post;
use crate::net::use_api;
use crate::routes;
use crate::state::pagination::{Pager, page_slice};
use crate::state::session::use_session;
use crate::util::browser;

/// Posts requested in one batch before filtering by author.
pub const MY_BLOGS_FETCH_LIMIT: u32 = 100;
pub const MY_BLOGS_PAGE_SIZE: u32 = 6;

const DELETE_FAILED: &str = "Failed to delete the post";

pub fn own_posts(posts: Vec<Post>, author_id: &str) -> Vec<Post> {
    posts.into_iter().filter(|post| post.author_id == author_id).collect()
}

/// Summary figures shown above the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostStats {
    pub total: u32,
    /// Mean read time in whole minutes, rounded half up.
    pub average_read_time: u32,
}

impl PostStats {
    pub fn from_posts(posts: &[Post]) -> Self {
        let total = u32::try_from(posts.len()).unwrap_or(u32::MAX);
        if total == 0 {
            return Self::default();
        }
        let minutes: u64 = posts.iter().map(|post| u64::from(post.read_time)).sum();
        let count = u64::from(total);
        let average = (minutes * 2 + count) / (count * 2);
        Self {
            total,
            average_read_time: u32::try_from(average).unwrap_or(u32::MAX),
        }
    }
}

/// Load every post by `author_id` within the fetch window.
///
/// # Errors
///
/// Returns the list call's failure.
pub async fn load_own_posts<T: Transport + 'static>(
    client: &ApiClient<T>,
    author_id: &str,
) -> Result<Vec<Post>, ApiError> {
    let page = client.list_posts(MY_BLOGS_FETCH_LIMIT, 0).await?;
    Ok(own_posts(page.posts, author_id))
}

/// Delete a post, returning the message to show on failure.
///
/// # Errors
///
/// Returns the server message, or a fixed fallback.
pub async fn remove_post<T: Transport + 'static>(client: &ApiClient<T>, id: &str) -> Result<(), String> {
    client.delete_post(id).await.map_err(|err| {
        log::warn!("deleting post {id} failed: {err}");
        err.message().unwrap_or(DELETE_FAILED).to_owned()
    })
}

#[component]
pub fn MyBlogsPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let posts = RwSignal::new(Vec::<Post>::new());
    let pager = RwSignal::new(Pager::new(MY_BLOGS_PAGE_SIZE));
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(user) = session.user() else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match load_own_posts(&client, &user.id).await {
                Ok(mine) => {
                    pager.update(|p| p.set_total(u32::try_from(mine.len()).unwrap_or(u32::MAX)));
                    posts.set(mine);
                    error.set(None);
                }
                Err(err) => {
                    leptos::logging::warn!("loading own posts failed: {err}");
                    error.set(Some("Failed to load your posts".to_owned()));
                }
            }
            loading.set(false);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match remove_post(&client, &id).await {
                Ok(()) => {
                    posts.update(|list| list.retain(|post| post.id != id));
                    let remaining = posts.with_untracked(Vec::len);
                    pager.update(|p| p.set_total(u32::try_from(remaining).unwrap_or(u32::MAX)));
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let on_page = Callback::new(move |target: u32| {
        pager.update(|p| p.go_to(target));
        browser::scroll_to_top(true);
    });

    let stats = move || posts.with(|list| PostStats::from_posts(list));
    let current_page = move || {
        let Pager { page, page_size, .. } = pager.get();
        posts.with(|list| page_slice(list, page, page_size).to_vec())
    };

    view! {
        <div class="my-blogs-page">
            <NavBar />
            <section class="list-header">
                <h1>"My posts"</h1>
                <div class="stats">
                    <div class="stats__item">
                        <span class="stats__label">"Total Posts"</span>
                        <span class="stats__value">{move || stats().total}</span>
                    </div>
                    <div class="stats__item">
                        <span class="stats__label">"Avg. Read Time"</span>
                        <span class="stats__value">{move || format!("{} min", stats().average_read_time)}</span>
                    </div>
                </div>
            </section>

            <Show when=move || error.get().is_some()>
                <p class="feed__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !loading.get() fallback=|| view! { <p class="feed__status">"Loading your posts..."</p> }>
                <Show
                    when=move || posts.with(|list| !list.is_empty())
                    fallback=|| {
                        view! {
                            <div class="feed__empty">
                                <p>"You haven't published anything yet."</p>
                                <a class="btn btn--primary" href=routes::CREATE_BLOG>
                                    "Write your first post"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="post-grid">
                        <For
                            each=current_page
                            key=|post| post.id.clone()
                            children=move |post| view! { <PostCard post=post on_delete=on_delete /> }
                        />
                    </div>
                </Show>
            </Show>

            <PagerControls pager=pager on_page=on_page />
        </div>
    }
}
