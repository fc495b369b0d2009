use super::*;
use chrono::{FixedOffset, Utc};

use crate::net::types::Category;

fn post(image: Option<&str>) -> Post {
    Post {
        id: "p1".to_owned(),
        author_id: "u1".to_owned(),
        title: "Title".to_owned(),
        content: "Body".to_owned(),
        image: image.map(str::to_owned),
        category: Category::Career,
        read_time: 3,
        created_at: "2025-03-14T09:26:53Z".to_owned(),
        updated_at: "2025-03-14T09:26:53Z".to_owned(),
    }
}

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("short", EXCERPT_CHARS), "short");
}

#[test]
fn excerpt_cuts_long_text_with_ellipsis() {
    let text = "a".repeat(120);
    let cut = excerpt(&text, EXCERPT_CHARS);
    assert_eq!(cut.len(), 103);
    assert!(cut.ends_with("..."));
}

#[test]
fn excerpt_exact_length_has_no_ellipsis() {
    let text = "b".repeat(EXCERPT_CHARS);
    assert_eq!(excerpt(&text, EXCERPT_CHARS), text);
}

#[test]
fn excerpt_respects_multibyte_boundaries() {
    assert_eq!(excerpt("héllo wörld", 4), "héll...");
}

#[test]
fn read_time_label_formats_minutes() {
    assert_eq!(read_time_label(7), "7 min read");
}

#[test]
fn cover_image_falls_back_to_placeholder() {
    assert_eq!(cover_image(&post(None)), PLACEHOLDER_IMAGE);
    assert_eq!(cover_image(&post(Some("https://cdn/a.png"))), "https://cdn/a.png");
}

fn utc_short(raw: &str) -> String {
    format_in(raw, &Utc, SHORT_DATE)
}

fn utc_long(raw: &str) -> String {
    format_in(raw, &Utc, LONG_DATETIME)
}

#[test]
fn short_date_uses_abbreviated_month() {
    assert_eq!(utc_short("2025-03-14T09:26:53Z"), "Mar 14, 2025");
    assert_eq!(utc_short("2024-12-01T12:00:00+00:00"), "Dec 1, 2024");
}

#[test]
fn long_datetime_uses_twelve_hour_clock() {
    assert_eq!(utc_long("2025-03-14T09:26:53Z"), "March 14, 2025 at 9:26 AM");
    assert_eq!(utc_long("2025-07-04T00:05:00Z"), "July 4, 2025 at 12:05 AM");
    assert_eq!(utc_long("2025-07-04T13:45:00.123Z"), "July 4, 2025 at 1:45 PM");
}

#[test]
fn dates_shift_into_the_target_zone() {
    let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
    assert_eq!(format_in("2025-03-14T02:30:00Z", &new_york, SHORT_DATE), "Mar 13, 2025");
    assert_eq!(
        format_in("2025-03-14T02:30:00Z", &new_york, LONG_DATETIME),
        "March 13, 2025 at 9:30 PM"
    );
}

#[test]
fn unparsable_dates_pass_through() {
    assert_eq!(format_short_date("yesterday"), "yesterday");
    assert_eq!(format_long_datetime("2025-13-01T00:00:00Z"), "2025-13-01T00:00:00Z");
}

#[test]
fn impossible_day_is_not_formatted() {
    assert_eq!(format_short_date("2025-02-99T00:00:00Z"), "2025-02-99T00:00:00Z");
    assert_eq!(format_short_date("2025-02-30T00:00:00Z"), "2025-02-30T00:00:00Z");
}

#[test]
fn impossible_time_is_not_formatted() {
    assert_eq!(format_long_datetime("2025-03-14T47:99:00Z"), "2025-03-14T47:99:00Z");
}
