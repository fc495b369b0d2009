//! Raw HTTP transport beneath the API client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with browser-managed
//! credentials, so session cookies travel with every API request.
//! Native builds: a stub that fails every call, which keeps the crate
//! buildable and testable off the browser.

use std::future::Future;

use serde::Serialize;

use super::error::ApiError;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// An API call relative to the configured base address.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/posts/blog/all`.
    pub path: String,
    /// Query pairs appended in order. Values are sent verbatim.
    pub query: Vec<(&'static str, String)>,
    /// JSON body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the payload cannot be represented as JSON.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Path plus encoded query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends requests and returns whatever status the server produced.
///
/// Implementations only report `Err` when no response arrived at all; status
/// classification and retry policy belong to `ApiClient`.
pub trait Transport {
    /// Send an API request to an absolute `url` with credentials attached.
    fn send(&self, url: &str, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;

    /// `PUT` raw bytes to a pre-signed storage URL, without credentials.
    fn upload(&self, url: &str, content_type: &str, bytes: Vec<u8>) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl Transport for BrowserTransport {
    fn send(&self, url: &str, request: &ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let url = url.to_owned();
        let request = request.clone();
        async move {
            #[cfg(feature = "csr")]
            {
                use gloo_net::http::Request;
                use web_sys::RequestCredentials;

                let builder = match request.method {
                    Method::Get => Request::get(&url),
                    Method::Post => Request::post(&url),
                    Method::Put => Request::put(&url),
                    Method::Delete => Request::delete(&url),
                }
                .credentials(RequestCredentials::Include);
                let outgoing = match &request.body {
                    Some(body) => builder.json(body).map_err(network_error)?,
                    None => builder.build().map_err(network_error)?,
                };
                let resp = outgoing.send().await.map_err(network_error)?;
                let status = resp.status();
                let body = resp.text().await.map_err(network_error)?;
                Ok(ApiResponse { status, body })
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (url, request);
                Err(ApiError::Network("not available outside the browser".to_owned()))
            }
        }
    }

    fn upload(&self, url: &str, content_type: &str, bytes: Vec<u8>) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let url = url.to_owned();
        let content_type = content_type.to_owned();
        async move {
            #[cfg(feature = "csr")]
            {
                let body = js_sys::Uint8Array::from(bytes.as_slice());
                let resp = gloo_net::http::Request::put(&url)
                    .header("Content-Type", &content_type)
                    .body(body)
                    .map_err(network_error)?
                    .send()
                    .await
                    .map_err(network_error)?;
                let status = resp.status();
                let body = resp.text().await.map_err(network_error)?;
                Ok(ApiResponse { status, body })
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (url, content_type, bytes);
                Err(ApiError::Network("not available outside the browser".to_owned()))
            }
        }
    }
}
