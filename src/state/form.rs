//! Field-level and general error state for forms.
//!
//! Screens show `fields[name]` under the matching input and `banner` above
//! the form. Typing into a field clears that field's message and the banner.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::net::error::ApiError;

/// Shown when a failure carries no server message.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: BTreeMap<String, String>,
    pub banner: Option<String>,
}

impl FormErrors {
    /// Errors for one field.
    #[must_use]
    pub fn with_field(mut self, name: &str, message: impl Into<String>) -> Self {
        self.fields.insert(name.to_owned(), message.into());
        self
    }

    /// Translate an API failure: field map from validation errors, the server
    /// message as banner, `fallback` when neither is available.
    pub fn from_api_error(err: &ApiError, fallback: &str) -> Self {
        let fields = err.field_errors().cloned().unwrap_or_default();
        let banner = match err.message() {
            Some(message) => Some(message.to_owned()),
            None if fields.is_empty() => Some(fallback.to_owned()),
            None => None,
        };
        Self { fields, banner }
    }

    /// Field errors only, for screens that report everything else by alert.
    pub fn fields_from(err: &ApiError) -> Option<Self> {
        let fields = err.field_errors().filter(|f| !f.is_empty())?;
        Some(Self {
            fields: fields.clone(),
            banner: None,
        })
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The user started editing `name`.
    pub fn clear_for_input(&mut self, name: &str) {
        self.fields.remove(name);
        self.banner = None;
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.banner.is_none()
    }
}
