use super::*;

#[test]
fn validation_error_maps_fields_and_message() {
    let mut fields = BTreeMap::new();
    fields.insert("email".to_owned(), "Email is required".to_owned());
    let err = ApiError::Validation {
        message: Some("Invalid input".to_owned()),
        fields,
    };

    let errors = FormErrors::from_api_error(&err, GENERIC_ERROR);

    assert_eq!(errors.field("email").as_deref(), Some("Email is required"));
    assert_eq!(errors.banner.as_deref(), Some("Invalid input"));
}

#[test]
fn validation_without_message_has_no_banner() {
    let mut fields = BTreeMap::new();
    fields.insert("title".to_owned(), "Title is required".to_owned());
    let err = ApiError::Validation { message: None, fields };

    let errors = FormErrors::from_api_error(&err, GENERIC_ERROR);

    assert!(errors.has_field("title"));
    assert_eq!(errors.banner, None);
}

#[test]
fn server_message_becomes_banner() {
    let err = ApiError::Server {
        status: 409,
        message: Some("Email already registered".to_owned()),
    };
    let errors = FormErrors::from_api_error(&err, GENERIC_ERROR);
    assert!(errors.fields.is_empty());
    assert_eq!(errors.banner.as_deref(), Some("Email already registered"));
}

#[test]
fn network_error_falls_back_to_generic_banner() {
    let err = ApiError::Network("offline".to_owned());
    let errors = FormErrors::from_api_error(&err, GENERIC_ERROR);
    assert_eq!(errors.banner.as_deref(), Some(GENERIC_ERROR));
}

#[test]
fn clear_for_input_drops_field_and_banner_only() {
    let mut errors = FormErrors {
        banner: Some("Bad credentials".to_owned()),
        ..FormErrors::default()
    }
    .with_field("email", "Unknown email")
        .with_field("password", "Too short");

    errors.clear_for_input("email");

    assert!(!errors.has_field("email"));
    assert!(errors.has_field("password"));
    assert_eq!(errors.banner, None);
    assert!(!errors.is_empty());
}

#[test]
fn default_is_empty() {
    assert!(FormErrors::default().is_empty());
}

#[test]
fn fields_from_keeps_only_field_errors() {
    let mut fields = BTreeMap::new();
    fields.insert("readTime".to_owned(), "Too long".to_owned());
    let err = ApiError::Validation {
        message: Some("Invalid input".to_owned()),
        fields,
    };

    let errors = FormErrors::fields_from(&err).unwrap();

    assert_eq!(errors.field("readTime").as_deref(), Some("Too long"));
    assert_eq!(errors.banner, None);
}

#[test]
fn fields_from_ignores_errors_without_fields() {
    let server = ApiError::Server {
        status: 500,
        message: Some("boom".to_owned()),
    };
    let empty = ApiError::Validation {
        message: Some("Invalid input".to_owned()),
        fields: BTreeMap::new(),
    };

    assert_eq!(FormErrors::fields_from(&server), None);
    assert_eq!(FormErrors::fields_from(&empty), None);
}
