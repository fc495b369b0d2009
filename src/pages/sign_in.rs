//! Sign-in page for email + password accounts.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_feedback::{ErrorBanner, FieldError};
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::SignInRequest;
use crate::net::use_api;
use crate::routes;
use crate::state::form::{FormErrors, GENERIC_ERROR};
use crate::state::session::{Identity, use_session};

/// Build the request from raw inputs, requiring both fields.
///
/// # Errors
///
/// Returns per-field messages for missing values.
pub fn sign_in_request(email: &str, password: &str) -> Result<SignInRequest, FormErrors> {
    let email = email.trim();
    let mut errors = FormErrors::default();
    if email.is_empty() {
        errors = errors.with_field("email", "Email is required");
    }
    if password.is_empty() {
        errors = errors.with_field("password", "Password is required");
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignInRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Sign in and return the identity to store in the session.
///
/// # Errors
///
/// Returns form errors built from the API failure.
pub async fn submit_sign_in<T: Transport + 'static>(
    client: &ApiClient<T>,
    request: &SignInRequest,
) -> Result<Identity, FormErrors> {
    match client.sign_in(request).await {
        Ok(response) => Ok(Identity::from(&response.user)),
        Err(err) => {
            log::debug!("sign-in failed: {err}");
            Err(FormErrors::from_api_error(&err, GENERIC_ERROR))
        }
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match sign_in_request(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        busy.set(true);
        errors.set(FormErrors::default());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match submit_sign_in(&client, &request).await {
                Ok(identity) => {
                    session.set_identity(Some(identity));
                    navigate(routes::HOME, NavigateOptions::default());
                }
                Err(failed) => errors.set(failed),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue your journey"</p>
                <ErrorBanner errors=errors />
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                errors.update(|e| e.clear_for_input("email"));
                                email.set(event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors name="email" />
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            name="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                errors.update(|e| e.clear_for_input("password"));
                                password.set(event_target_value(&ev));
                            }
                        />
                        <FieldError errors=errors name="password" />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? " <a href=routes::SIGN_UP>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
