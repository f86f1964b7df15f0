use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::otp::{OtpEntry, CODE_LENGTH, OTP_TTL_MINUTES};

#[test]
fn test_generated_code_is_six_digits() {
    for _ in 0..200 {
        let code = OtpEntry::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        let value: u32 = code.parse().unwrap();
        assert!((100_000..=999_999).contains(&value));
    }
}

#[test]
fn test_expiry_is_strictly_after_deadline() {
    let issued = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let entry = OtpEntry::issue(issued, Duration::minutes(OTP_TTL_MINUTES));

    assert_eq!(entry.expires_at(), issued + Duration::minutes(10));
    assert!(!entry.is_expired_at(issued + Duration::minutes(10)));
    assert!(entry.is_expired_at(issued + Duration::minutes(10) + Duration::milliseconds(1)));
}

#[test]
fn test_matches_trims_submitted_code() {
    let entry = OtpEntry::issue(Utc::now(), Duration::minutes(OTP_TTL_MINUTES));
    let code = entry.code().to_string();

    assert!(entry.matches(&code));
    assert!(entry.matches(&format!("  {}\n", code)));
    assert!(!entry.matches(""));
    assert!(!entry.matches(&code[..5]));
}
