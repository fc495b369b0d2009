//! Networking modules for the blogging REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` performs raw HTTP, `client` owns base address and the
//! refresh-and-retry policy, `api` exposes typed endpoints, and `types`
//! defines the wire schema.

pub mod api;
pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod scripted;
pub mod transport;
pub mod types;

use leptos::prelude::*;

use self::client::ApiClient;
use self::transport::BrowserTransport;

/// The client type used by the running application.
pub type BlogClient = ApiClient<BrowserTransport>;

/// Context handle for the application's client.
///
/// The client holds `Rc` state, so it is kept in local arena storage and the
/// `Copy` handle is what travels through context and event closures.
pub type ApiHandle = StoredValue<BlogClient, LocalStorage>;

/// Fetch the application's client handle from context.
pub fn use_api() -> ApiHandle {
    expect_context::<ApiHandle>()
}
