use crate::domain::entities::user::{User, DEFAULT_COLLEGE};

fn sample_user() -> User {
    User::new(
        "  Ravi Kumar ",
        " Ravi@Example.COM",
        "9876543210",
        "$2b$12$hash".to_string(),
        None,
    )
}

#[test]
fn test_new_user_normalizes_fields() {
    let user = sample_user();
    assert_eq!(user.username, "Ravi Kumar");
    assert_eq!(user.email, "ravi@example.com");
    assert_eq!(user.college, DEFAULT_COLLEGE);
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_custom_college_is_kept() {
    let user = User::new("ravi", "r@x.io", "9876543210", String::new(), Some("CIT"));
    assert_eq!(user.college, "CIT");

    let blank = User::new("ravi", "r@x.io", "9876543210", String::new(), Some("  "));
    assert_eq!(blank.college, DEFAULT_COLLEGE);
}

#[test]
fn test_atom_id_prefix() {
    let user = sample_user();
    assert_eq!(user.atom_id(), format!("ATOM25{}", user.id));
}

#[test]
fn test_password_hash_is_never_serialized() {
    let user = sample_user();
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ravi@example.com");
}

#[test]
fn test_matches_query() {
    let user = sample_user();
    assert!(user.matches_query("kumar"));
    assert!(user.matches_query("EXAMPLE"));
    assert!(user.matches_query("5432"));
    assert!(!user.matches_query("priya"));
    assert!(!user.matches_query("   "));
}
