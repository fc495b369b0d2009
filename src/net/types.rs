//! Wire DTOs for the blogging API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. `Category` is tolerant on the
//! way in because the API forwards a gRPC enum that can arrive either as its
//! numeric code or as its upper-case name.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Post category as understood by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Unspecified,
    Technology,
    Development,
    Design,
    Lifestyle,
    Career,
}

impl Category {
    /// Categories an author can pick in the editor, in display order.
    pub const SELECTABLE: [Category; 5] = [
        Category::Technology,
        Category::Development,
        Category::Design,
        Category::Lifestyle,
        Category::Career,
    ];

    /// Numeric code used on the wire.
    pub fn code(self) -> u8 {
        match self {
            Category::Unspecified => 0,
            Category::Technology => 1,
            Category::Development => 2,
            Category::Design => 3,
            Category::Lifestyle => 4,
            Category::Career => 5,
        }
    }

    /// Decode a numeric code; unknown codes map to `Unspecified`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Category::Technology,
            2 => Category::Development,
            3 => Category::Design,
            4 => Category::Lifestyle,
            5 => Category::Career,
            _ => Category::Unspecified,
        }
    }

    /// Decode an enum name such as `"TECHNOLOGY"` or `"CATEGORY_DESIGN"`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_ascii_uppercase();
        let name = name.strip_prefix("CATEGORY_").unwrap_or(&name);
        match name {
            "TECHNOLOGY" => Category::Technology,
            "DEVELOPMENT" => Category::Development,
            "DESIGN" => Category::Design,
            "LIFESTYLE" => Category::Lifestyle,
            "CAREER" => Category::Career,
            _ => Category::Unspecified,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Unspecified => "Uncategorized",
            Category::Technology => "Technology",
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Lifestyle => "Lifestyle",
            Category::Career => "Career",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCategory {
            Code(i64),
            Name(String),
        }

        Ok(match RawCategory::deserialize(deserializer)? {
            RawCategory::Code(code) => Category::from_code(code),
            RawCategory::Name(name) => Category::from_name(&name),
        })
    }
}

/// A published blog post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    /// Public URL of the cover image, if any.
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Category,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub read_time: u32,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
}

/// One page of posts from `GET /posts/blog/all`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub total_count: u32,
}

/// Payload for creating or updating a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Cover image URL; empty when the post has no image.
    pub image: String,
    pub category: Category,
    pub read_time: u32,
}

/// Account fields echoed back by sign-in and sign-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
}

/// Response body of `POST /auth/signin` and `POST /auth/signup`.
///
/// Tokens are also set as cookies by the server; the client never reads them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: AuthUser,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

/// Response body of `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub valid: bool,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    pub filename: String,
    pub content_type: String,
}

/// Pre-signed upload destination returned by `POST /posts/blog/upload-url`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    /// Pre-signed URL the file bytes are `PUT` to.
    pub upload_url: String,
    /// URL the image is served from once uploaded.
    pub public_url: String,
}

/// Error body shape shared by all API failures.
///
/// `fields` maps form field names to messages for validation failures.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

fn deserialize_blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}
