use super::*;

// =============================================================
// Helpers
// =============================================================

fn post_json(category: serde_json::Value, image: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "p-1",
        "authorId": "u-1",
        "title": "Borrowing without tears",
        "content": "Lifetimes are just scopes.",
        "image": image,
        "category": category,
        "readTime": 7,
        "createdAt": "2025-03-14T09:26:53Z",
        "updatedAt": "2025-03-15T10:00:00Z",
    })
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_deserializes_from_numeric_code() {
    let category: Category = serde_json::from_value(serde_json::json!(3)).unwrap();
    assert_eq!(category, Category::Design);
}

#[test]
fn category_deserializes_from_enum_name() {
    let category: Category = serde_json::from_value(serde_json::json!("TECHNOLOGY")).unwrap();
    assert_eq!(category, Category::Technology);
}

#[test]
fn category_accepts_prefixed_and_mixed_case_names() {
    assert_eq!(Category::from_name("CATEGORY_CAREER"), Category::Career);
    assert_eq!(Category::from_name("lifestyle"), Category::Lifestyle);
}

#[test]
fn category_unknown_values_map_to_unspecified() {
    assert_eq!(Category::from_code(42), Category::Unspecified);
    assert_eq!(Category::from_code(-1), Category::Unspecified);
    assert_eq!(Category::from_name("GARDENING"), Category::Unspecified);
}

#[test]
fn category_serializes_as_code() {
    assert_eq!(serde_json::to_string(&Category::Development).unwrap(), "2");
    assert_eq!(serde_json::to_string(&Category::Unspecified).unwrap(), "0");
}

#[test]
fn category_codes_are_stable() {
    let codes: Vec<u8> = Category::SELECTABLE.iter().map(|c| c.code()).collect();
    assert_eq!(codes, vec![1, 2, 3, 4, 5]);
}

#[test]
fn category_label_matches_display() {
    assert_eq!(Category::Career.to_string(), "Career");
    assert_eq!(Category::Unspecified.label(), "Uncategorized");
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_deserializes_camel_case_fields() {
    let post: Post = serde_json::from_value(post_json(serde_json::json!(1), serde_json::json!("https://cdn/x.png"))).unwrap();
    assert_eq!(post.author_id, "u-1");
    assert_eq!(post.read_time, 7);
    assert_eq!(post.category, Category::Technology);
    assert_eq!(post.image.as_deref(), Some("https://cdn/x.png"));
    assert_eq!(post.created_at, "2025-03-14T09:26:53Z");
}

#[test]
fn post_blank_image_becomes_none() {
    let post: Post = serde_json::from_value(post_json(serde_json::json!("DESIGN"), serde_json::json!(""))).unwrap();
    assert_eq!(post.image, None);
    assert_eq!(post.category, Category::Design);
}

#[test]
fn post_missing_image_becomes_none() {
    let mut value = post_json(serde_json::json!(0), serde_json::Value::Null);
    value.as_object_mut().unwrap().remove("image");
    let post: Post = serde_json::from_value(value).unwrap();
    assert_eq!(post.image, None);
}

#[test]
fn post_page_reads_total_count() {
    let page: PostPage = serde_json::from_value(serde_json::json!({
        "posts": [post_json(serde_json::json!(2), serde_json::Value::Null)],
        "totalCount": 31,
    }))
    .unwrap();
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.total_count, 31);
}

#[test]
fn post_draft_serializes_camel_case_with_numeric_category() {
    let draft = PostDraft {
        title: "T".to_owned(),
        content: "C".to_owned(),
        image: String::new(),
        category: Category::Lifestyle,
        read_time: 12,
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({ "title": "T", "content": "C", "image": "", "category": 4, "readTime": 12 })
    );
}

// =============================================================
// Auth DTOs
// =============================================================

#[test]
fn me_response_reads_user_id() {
    let me: MeResponse = serde_json::from_str(r#"{"valid":true,"userId":"u1"}"#).unwrap();
    assert!(me.valid);
    assert_eq!(me.user_id, "u1");
}

#[test]
fn me_response_invalid_without_user_id() {
    let me: MeResponse = serde_json::from_str(r#"{"valid":false}"#).unwrap();
    assert!(!me.valid);
    assert!(me.user_id.is_empty());
}

#[test]
fn auth_response_reads_nested_user() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"user":{"id":"u9","displayName":"Ada","email":"ada@example.com"},"accessToken":"a","refreshToken":"r"}"#,
    )
    .unwrap();
    assert_eq!(resp.user.id, "u9");
    assert_eq!(resp.user.display_name, "Ada");
}

#[test]
fn sign_up_request_uses_display_name_key() {
    let req = SignUpRequest {
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["displayName"], "Ada");
}

#[test]
fn upload_url_request_uses_content_type_key() {
    let req = UploadUrlRequest { filename: "a.png".to_owned(), content_type: "image/png".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "filename": "a.png", "contentType": "image/png" })
    );
}

#[test]
fn error_body_defaults_missing_parts() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
    assert_eq!(body.error.as_deref(), Some("nope"));
    assert!(body.fields.is_empty());
}
