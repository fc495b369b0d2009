//! Owner of the tab-wide session.
//!
//! Creates the session signal, provides a `SessionHandle` to descendants, and
//! runs the identity probe once. Children are withheld until the probe
//! settles so guards never decide against an unknown session.

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;

use leptos::prelude::*;

use crate::net::use_api;
use crate::state::session::{Session, SessionHandle, probe};

/// Whether guarded content may render for this session state.
pub fn should_render_children(session: &Session) -> bool {
    !session.is_loading()
}

#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionHandle::new();
    provide_context(session);

    let api = use_api();
    leptos::task::spawn_local(async move {
        let client = api.get_value();
        let outcome = probe(&client).await;
        session.finish_probe(outcome);
    });

    view! {
        <Show
            when=move || should_render_children(&session.get())
            fallback=|| view! { <div class="session-loading" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
