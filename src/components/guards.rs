//! Route guards that redirect based on the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards render inside `SessionProvider`, which withholds its children until
//! the startup probe has resolved, so the identity they read is always final.
//! Both guards replace the history entry when redirecting, so "back" never
//! lands on a page the user was bounced from.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::session::{Identity, use_session};

/// Which side of the session boundary a route lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardKind {
    /// Requires an identity; anonymous visitors go to sign-in.
    Protected,
    /// Only for anonymous visitors; signed-in users go home.
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

impl GuardKind {
    pub fn decide(self, user: Option<&Identity>) -> GuardDecision {
        match (self, user) {
            (GuardKind::Protected, None) => GuardDecision::Redirect(routes::SIGN_IN),
            (GuardKind::Public, Some(_)) => GuardDecision::Redirect(routes::HOME),
            _ => GuardDecision::Render,
        }
    }
}

/// Navigation options used for guard redirects.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

fn guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| kind.decide(session.user().as_ref()));

    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(to, redirect_options());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            {children()}
        </Show>
    }
}

/// Render children only for signed-in users.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Protected, children)
}

/// Render children only for anonymous visitors.
#[component]
pub fn Public(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Public, children)
}
