//! Paged list of every post.
//!
//! Paging is server-side: each page change fetches `limit`/`offset` and
//! records the reported total. The category chips only narrow the page that
//! is already loaded.

#[cfg(test)]
#[path = "view_all_test.rs"]
mod view_all_test;

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::pager::PagerControls;
use crate::components::post_card::PostCard;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Category, Post, PostPage};
use crate::net::use_api;
use crate::state::pagination::Pager;
use crate::util::browser;

pub const VIEW_ALL_PAGE_SIZE: u32 = 9;

/// Category chip selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Chips in display order.
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::SELECTABLE.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Posts",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == category,
        }
    }

    pub fn apply(self, posts: &[Post]) -> Vec<Post> {
        posts.iter().filter(|post| self.matches(post)).cloned().collect()
    }
}

/// Fetch the page the pager points at.
///
/// # Errors
///
/// Returns the list call's failure.
pub async fn load_page<T: Transport + 'static>(client: &ApiClient<T>, pager: &Pager) -> Result<PostPage, ApiError> {
    client.list_posts(pager.page_size, pager.offset()).await
}

#[component]
pub fn ViewAllPage() -> impl IntoView {
    let api = use_api();
    let pager = RwSignal::new(Pager::new(VIEW_ALL_PAGE_SIZE));
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let filter = RwSignal::new(CategoryFilter::All);

    browser::scroll_to_top(false);

    let page = Memo::new(move |_| pager.with(|p| p.page));
    Effect::new(move || {
        page.track();
        let request = pager.get_untracked();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match load_page(&client, &request).await {
                Ok(loaded) => {
                    posts.set(loaded.posts);
                    error.set(None);
                    pager.update(|p| p.set_total(loaded.total_count));
                }
                Err(err) => {
                    leptos::logging::warn!("loading posts failed: {err}");
                    error.set(Some("Failed to load posts".to_owned()));
                }
            }
            loading.set(false);
        });
    });

    let on_page = Callback::new(move |target: u32| {
        pager.update(|p| p.go_to(target));
        browser::scroll_to_top(true);
    });

    let visible = move || posts.with(|list| filter.get().apply(list));

    view! {
        <div class="view-all-page">
            <NavBar />
            <section class="list-header">
                <h1>"All posts"</h1>
                <p>{move || format!("{} posts published", pager.get().total_items)}</p>
                <div class="chip-row">
                    {CategoryFilter::chips()
                        .map(|chip| {
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=move || filter.get() == chip
                                    on:click=move |_| filter.set(chip)
                                >
                                    {chip.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <Show when=move || !loading.get() fallback=|| view! { <p class="feed__status">"Loading posts..."</p> }>
                <Show
                    when=move || error.get().is_none()
                    fallback=move || view! { <p class="feed__error">{move || error.get().unwrap_or_default()}</p> }
                >
                    <Show
                        when=move || !visible().is_empty()
                        fallback=|| view! { <p class="feed__status">"No posts to show."</p> }
                    >
                        <div class="post-grid">
                            <For
                                each=visible
                                key=|post| post.id.clone()
                                children=|post| view! { <PostCard post=post /> }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>

            <PagerControls pager=pager on_page=on_page />
        </div>
    }
}
