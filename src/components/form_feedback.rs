//! Inline error display for forms.

use leptos::prelude::*;

use crate::state::form::FormErrors;

/// Message under one input, hidden while the field has no error.
#[component]
pub fn FieldError(errors: RwSignal<FormErrors>, name: &'static str) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.has_field(name))>
            <p class="form-field__error" role="alert">
                {move || errors.with(|e| e.field(name).unwrap_or_default())}
            </p>
        </Show>
    }
}

/// General failure message shown above a form.
#[component]
pub fn ErrorBanner(errors: RwSignal<FormErrors>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.banner.is_some())>
            <div class="form-banner" role="alert">
                {move || errors.with(|e| e.banner.clone().unwrap_or_default())}
            </div>
        </Show>
    }
}
