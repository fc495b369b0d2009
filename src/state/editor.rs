//! Create/edit form state and the publish workflow.
//!
//! DESIGN
//! ======
//! The same state backs both the create and edit screens; only the final
//! API call differs (`PublishTarget`). A chosen image is read into memory
//! up front so the state stays plain data and the publish flow can run
//! against any transport.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Category, Post, PostDraft};

pub const READ_TIME_MIN: u32 = 1;
pub const READ_TIME_MAX: u32 = 60;
pub const READ_TIME_DEFAULT: u32 = 5;

/// An image picked in the editor but not yet uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Editable fields of a post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub read_time: u32,
    /// Image URL already attached to the post being edited.
    pub existing_image: Option<String>,
    /// URL shown in the preview (existing image or a local object URL).
    pub preview: Option<String>,
    pub pending_upload: Option<PendingUpload>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: Category::Unspecified,
            read_time: READ_TIME_DEFAULT,
            existing_image: None,
            preview: None,
            pending_upload: None,
        }
    }
}

impl EditorState {
    /// Pre-fill from a stored post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category,
            read_time: clamp_read_time(post.read_time),
            existing_image: post.image.clone(),
            preview: post.image.clone(),
            pending_upload: None,
        }
    }

    /// Apply a slider value; unparsable input leaves the value unchanged.
    pub fn set_read_time(&mut self, raw: &str) {
        if let Ok(minutes) = raw.trim().parse::<u32>() {
            self.read_time = clamp_read_time(minutes);
        }
    }

    /// Replace the image with a freshly picked file.
    pub fn choose_image(&mut self, upload: PendingUpload, preview_url: String) {
        self.pending_upload = Some(upload);
        self.preview = Some(preview_url);
    }

    /// Drop both the picked file and any image already on the post.
    pub fn remove_image(&mut self) {
        self.pending_upload = None;
        self.existing_image = None;
        self.preview = None;
    }

    /// Build the API payload; `uploaded_url` wins over the existing image.
    pub fn draft(&self, uploaded_url: Option<String>) -> PostDraft {
        PostDraft {
            title: self.title.trim().to_owned(),
            content: self.content.clone(),
            image: uploaded_url
                .or_else(|| self.existing_image.clone())
                .unwrap_or_default(),
            category: self.category,
            read_time: self.read_time,
        }
    }
}

pub fn clamp_read_time(minutes: u32) -> u32 {
    minutes.clamp(READ_TIME_MIN, READ_TIME_MAX)
}

/// Which API call finishes the publish flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishTarget {
    Create,
    Update(String),
}

/// Upload a pending image (if any) and then create or update the post.
///
/// # Errors
///
/// Returns the first failing call: upload URL request, the direct upload,
/// or the create/update itself.
pub async fn publish<T: Transport + 'static>(
    client: &ApiClient<T>,
    editor: &EditorState,
    target: &PublishTarget,
) -> Result<Post, ApiError> {
    let uploaded_url = match &editor.pending_upload {
        Some(upload) => {
            let slot = client
                .request_upload_url(&upload.filename, &upload.content_type)
                .await?;
            client
                .upload(&slot.upload_url, &upload.content_type, upload.bytes.clone())
                .await?;
            Some(slot.public_url)
        }
        None => None,
    };
    let draft = editor.draft(uploaded_url);
    match target {
        PublishTarget::Create => client.create_post(&draft).await,
        PublishTarget::Update(id) => client.update_post(id, &draft).await,
    }
}
