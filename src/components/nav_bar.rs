//! Top navigation for signed-in screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::use_api;
use crate::routes;
use crate::state::session::{sign_out, use_session};
use crate::util::browser;

#[component]
pub fn NavBar() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            if sign_out(&client, &session).await.is_err() {
                browser::alert("Logout failed");
            }
            signing_out.set(false);
            navigate(routes::SIGN_IN, NavigateOptions::default());
        });
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=routes::HOME>
                "Inkwell"
            </a>
            <nav class="nav-bar__links">
                <a href=routes::VIEW_BLOGS>"All posts"</a>
                <a href=routes::MY_BLOGS>"My posts"</a>
                <a class="btn btn--primary" href=routes::CREATE_BLOG>
                    "Write"
                </a>
                <button class="btn nav-bar__sign-out" disabled=move || signing_out.get() on:click=on_sign_out>
                    "Sign out"
                </button>
            </nav>
        </header>
    }
}
