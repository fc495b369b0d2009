//! Account registration page.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_feedback::{ErrorBanner, FieldError};
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::SignUpRequest;
use crate::net::use_api;
use crate::routes;
use crate::state::form::{FormErrors, GENERIC_ERROR};

/// Build the request from raw inputs, requiring every field.
///
/// # Errors
///
/// Returns per-field messages for missing values.
pub fn sign_up_request(display_name: &str, email: &str, password: &str) -> Result<SignUpRequest, FormErrors> {
    let display_name = display_name.trim();
    let email = email.trim();
    let mut errors = FormErrors::default();
    if display_name.is_empty() {
        errors = errors.with_field("displayName", "Display name is required");
    }
    if email.is_empty() {
        errors = errors.with_field("email", "Email is required");
    }
    if password.is_empty() {
        errors = errors.with_field("password", "Password is required");
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SignUpRequest {
        display_name: display_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Register the account. The new user still has to sign in afterwards.
///
/// # Errors
///
/// Returns form errors built from the API failure.
pub async fn submit_sign_up<T: Transport + 'static>(
    client: &ApiClient<T>,
    request: &SignUpRequest,
) -> Result<(), FormErrors> {
    match client.sign_up(request).await {
        Ok(_) => Ok(()),
        Err(err) => {
            log::debug!("sign-up failed: {err}");
            Err(FormErrors::from_api_error(&err, GENERIC_ERROR))
        }
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match sign_up_request(
            &display_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
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
            match submit_sign_up(&client, &request).await {
                Ok(()) => navigate(routes::SIGN_IN, NavigateOptions::default()),
                Err(failed) => errors.set(failed),
            }
            busy.set(false);
        });
    };

    let input = move |name: &'static str, value: RwSignal<String>| {
        move |ev: leptos::ev::Event| {
            errors.update(|e| e.clear_for_input(name));
            value.set(event_target_value(&ev));
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <p class="auth-card__subtitle">"Start writing in minutes"</p>
                <ErrorBanner errors=errors />
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span>"Display name"</span>
                        <input
                            type="text"
                            name="displayName"
                            prop:value=move || display_name.get()
                            on:input=input("displayName", display_name)
                        />
                        <FieldError errors=errors name="displayName" />
                    </label>
                    <label class="form-field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=input("email", email)
                        />
                        <FieldError errors=errors name="email" />
                    </label>
                    <label class="form-field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            name="password"
                            prop:value=move || password.get()
                            on:input=input("password", password)
                        />
                        <FieldError errors=errors name="password" />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already registered? " <a href=routes::SIGN_IN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
