//! Previous/next pager with numbered pages.
//!
//! Renders nothing when everything fits on one page.

use leptos::prelude::*;

use crate::state::pagination::{Pager, has_pager};

#[component]
pub fn PagerControls(#[prop(into)] pager: Signal<Pager>, on_page: Callback<u32>) -> impl IntoView {
    view! {
        <Show when=move || has_pager(pager.get().total_pages())>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="btn pager__step"
                    disabled=move || !pager.get().has_previous()
                    on:click=move |_| on_page.run(pager.get().page.saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    let current = pager.get();
                    (1..=current.total_pages())
                        .map(|page| {
                            view! {
                                <button
                                    class="btn pager__page"
                                    class:pager__page--active=page == current.page
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="btn pager__step"
                    disabled=move || !pager.get().has_next()
                    on:click=move |_| on_page.run(pager.get().page + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
