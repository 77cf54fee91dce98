use super::*;
use chrono::Duration;

#[test]
fn test_format_size_binary() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1024), "1 KiB");
    assert_eq!(format_size(2801778), "2.67 MiB");
}

#[test]
fn test_format_timestamp_relative() {
    let two_hours_ago = Utc::now() - Duration::hours(2);
    assert_eq!(format_timestamp(&two_hours_ago), "2 hours ago");
}

#[test]
fn test_format_optional_timestamp_unset() {
    assert_eq!(format_optional_timestamp(None), "-");
}

#[test]
fn test_format_optional_timestamp_set() {
    let one_day_ago = Utc::now() - Duration::days(1);
    assert_eq!(format_optional_timestamp(Some(one_day_ago)), "a day ago");
}

#[test]
fn test_short_digest_truncates_hex() {
    let digest = "sha256:7173b809ca12ec5dee4506cd86be934c4596dd234ee82c0662eac04a8c2c71dc";
    assert_eq!(short_digest(digest), "sha256:7173b809ca12");
}

#[test]
fn test_short_digest_leaves_short_and_opaque_values() {
    assert_eq!(short_digest("sha256:aaa"), "sha256:aaa");
    assert_eq!(short_digest("not-a-digest"), "not-a-digest");
    assert_eq!(short_digest(""), "");
}
