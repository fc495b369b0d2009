//! Credentialed API client with one-shot silent re-authentication.
//!
//! Every call goes to `base_url + path` through the `Transport`. A 401 on any
//! request other than the refresh endpoint triggers `POST /auth/refresh`
//! followed by exactly one replay of the original request. If the refresh
//! itself fails, that failure is what the caller sees.
//!
//! CONCURRENCY
//! ===========
//! Requests that hit a 401 while a refresh is already in flight join it
//! instead of issuing their own. The pending refresh lives in a
//! `Shared` future behind `Rc<RefCell<..>>`; the client is `!Send` and only
//! ever driven from the browser's single event loop.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Path of the silent re-authentication endpoint.
pub const REFRESH_PATH: &str = "/auth/refresh";

type PendingRefresh = Shared<LocalBoxFuture<'static, Result<(), ApiError>>>;

/// A request plus its "already retried once" marker.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestEnvelope {
    request: ApiRequest,
    retried: bool,
}

impl RequestEnvelope {
    pub fn new(request: ApiRequest) -> Self {
        Self { request, retried: false }
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn is_retried(&self) -> bool {
        self.retried
    }

    /// Whether the wrapped request targets the refresh endpoint.
    pub fn is_refresh(&self) -> bool {
        self.request.path.contains(REFRESH_PATH)
    }

    #[must_use]
    pub fn mark_retried(self) -> Self {
        Self { retried: true, ..self }
    }
}

/// Refresh only for a 401 on a not-yet-retried, non-refresh request.
pub fn should_attempt_refresh(envelope: &RequestEnvelope, error: &ApiError) -> bool {
    error.is_unauthorized() && !envelope.is_retried() && !envelope.is_refresh()
}

struct ClientInner<T> {
    base_url: String,
    transport: T,
    pending_refresh: RefCell<Option<PendingRefresh>>,
}

impl<T: Transport> ClientInner<T> {
    fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(request);
        let resp = self.transport.send(&url, request).await?;
        if resp.is_success() {
            Ok(resp)
        } else {
            Err(ApiError::from_response(resp.status, &resp.body))
        }
    }
}

/// Cheaply cloneable handle to the configured API client.
pub struct ApiClient<T> {
    inner: Rc<ClientInner<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport + 'static> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                base_url: base_url.into(),
                transport,
                pending_refresh: RefCell::new(None),
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL a request will be sent to.
    pub fn url_for(&self, request: &ApiRequest) -> String {
        self.inner.url_for(request)
    }

    /// Send a request, refreshing the session and replaying once on a 401.
    ///
    /// # Errors
    ///
    /// Returns the request's own failure, or the refresh failure when the
    /// silent re-authentication was attempted and did not succeed.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut envelope = RequestEnvelope::new(request);
        loop {
            match self.inner.dispatch(envelope.request()).await {
                Ok(resp) => return Ok(resp),
                Err(err) if should_attempt_refresh(&envelope, &err) => {
                    log::debug!("401 on {}; refreshing session", envelope.request().path);
                    envelope = envelope.mark_retried();
                    self.refresh_session().await?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Send a request and decode a JSON response body.
    ///
    /// # Errors
    ///
    /// As `execute`, plus `ApiError::Decode` for an unexpected body.
    pub async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        self.execute(request).await?.json()
    }

    /// Issue (or join) the silent re-authentication call.
    ///
    /// # Errors
    ///
    /// Returns the refresh endpoint's failure.
    pub async fn refresh_session(&self) -> Result<(), ApiError> {
        let pending = self.pending_refresh();
        let outcome = pending.clone().await;
        self.settle_refresh(&pending);
        if let Err(err) = &outcome {
            log::warn!("session refresh failed: {err}");
        }
        outcome
    }

    /// `PUT` raw bytes to a pre-signed URL outside the API base address.
    ///
    /// # Errors
    ///
    /// Returns a transport failure or `ApiError::Server` for a non-success status.
    pub async fn upload(&self, url: &str, content_type: &str, bytes: Vec<u8>) -> Result<(), ApiError> {
        let resp = self.inner.transport.upload(url, content_type, bytes).await?;
        if resp.is_success() {
            Ok(())
        } else {
            Err(ApiError::Server {
                status: resp.status,
                message: None,
            })
        }
    }

    fn pending_refresh(&self) -> PendingRefresh {
        let mut slot = self.inner.pending_refresh.borrow_mut();
        if let Some(pending) = slot.as_ref() {
            return pending.clone();
        }
        let inner = Rc::clone(&self.inner);
        let pending = async move {
            let request = ApiRequest::post(REFRESH_PATH);
            inner.dispatch(&request).await.map(|_| ())
        }
        .boxed_local()
        .shared();
        *slot = Some(pending.clone());
        pending
    }

    fn settle_refresh(&self, settled: &PendingRefresh) {
        let mut slot = self.inner.pending_refresh.borrow_mut();
        if slot.as_ref().is_some_and(|pending| pending.ptr_eq(settled)) {
            *slot = None;
        }
    }
}
