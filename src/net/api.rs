//! Typed endpoints of the blogging API.
//!
//! Thin wrappers over `ApiClient::fetch_json`/`execute`; every call gets the
//! client's refresh-and-retry policy.
//!
//! ERROR HANDLING
//! ==============
//! Endpoints return `Result<_, ApiError>` and never panic, so a failed fetch
//! degrades the calling screen instead of aborting the WASM module.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{ApiRequest, Transport};
use super::types::{
    AuthResponse, MeResponse, Post, PostDraft, PostPage, SignInRequest, SignUpRequest, UploadTarget,
    UploadUrlRequest,
};

pub(crate) const SIGN_UP_PATH: &str = "/auth/signup";
pub(crate) const SIGN_IN_PATH: &str = "/auth/signin";
pub(crate) const ME_PATH: &str = "/auth/me";
pub(crate) const LOGOUT_PATH: &str = "/auth/logout";
pub(crate) const POSTS_PATH: &str = "/posts/blog/all";
pub(crate) const CREATE_POST_PATH: &str = "/posts/create/blog";
pub(crate) const UPLOAD_URL_PATH: &str = "/posts/blog/upload-url";

pub(crate) fn post_path(id: &str) -> String {
    format!("/posts/blog/{id}")
}

pub(crate) fn edit_post_path(id: &str) -> String {
    format!("/posts/blog/edit/{id}")
}

pub(crate) fn delete_post_path(id: &str) -> String {
    format!("/posts/blog/delete/{id}")
}

impl<T: Transport + 'static> ApiClient<T> {
    /// Register a new account via `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for rejected fields, or any other call failure.
    pub async fn sign_up(&self, body: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        self.fetch_json(ApiRequest::post(SIGN_UP_PATH).with_json(body)?).await
    }

    /// Start a session via `POST /auth/signin`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for rejected fields, or any other call failure.
    pub async fn sign_in(&self, body: &SignInRequest) -> Result<AuthResponse, ApiError> {
        self.fetch_json(ApiRequest::post(SIGN_IN_PATH).with_json(body)?).await
    }

    /// Probe the current session via `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns any call failure; callers treat failure as "no session".
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.fetch_json(ApiRequest::get(ME_PATH)).await
    }

    /// End the session via `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// Returns any call failure.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(ApiRequest::post(LOGOUT_PATH)).await.map(|_| ())
    }

    /// Fetch one page of posts via `GET /posts/blog/all?limit&offset`.
    ///
    /// # Errors
    ///
    /// Returns any call failure.
    pub async fn list_posts(&self, limit: u32, offset: u32) -> Result<PostPage, ApiError> {
        let request = ApiRequest::get(POSTS_PATH)
            .with_query("limit", limit)
            .with_query("offset", offset);
        self.fetch_json(request).await
    }

    /// Fetch a single post via `GET /posts/blog/:id`.
    ///
    /// # Errors
    ///
    /// Returns any call failure.
    pub async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        self.fetch_json(ApiRequest::get(post_path(id))).await
    }

    /// Publish a new post via `POST /posts/create/blog`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for rejected fields, or any other call failure.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.fetch_json(ApiRequest::post(CREATE_POST_PATH).with_json(draft)?).await
    }

    /// Replace a post's fields via `PUT /posts/blog/edit/:id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` for rejected fields, or any other call failure.
    pub async fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        self.fetch_json(ApiRequest::put(edit_post_path(id)).with_json(draft)?).await
    }

    /// Delete a post via `DELETE /posts/blog/delete/:id`.
    ///
    /// # Errors
    ///
    /// Returns any call failure.
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(delete_post_path(id))).await.map(|_| ())
    }

    /// Ask for a pre-signed image upload URL via `POST /posts/blog/upload-url`.
    ///
    /// # Errors
    ///
    /// Returns any call failure.
    pub async fn request_upload_url(&self, filename: &str, content_type: &str) -> Result<UploadTarget, ApiError> {
        let body = UploadUrlRequest {
            filename: filename.to_owned(),
            content_type: content_type.to_owned(),
        };
        self.fetch_json(ApiRequest::post(UPLOAD_URL_PATH).with_json(&body)?).await
    }
}
