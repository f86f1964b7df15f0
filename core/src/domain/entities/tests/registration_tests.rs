use uuid::Uuid;

use crate::domain::entities::registration::Registration;

#[test]
fn test_append_and_list_events() {
    let mut reg = Registration::new(Uuid::new_v4(), "ravi", "Ravi@x.io", "Hackathon", "9876543210");
    assert_eq!(reg.email, "ravi@x.io");
    assert_eq!(reg.events(), vec!["Hackathon"]);

    let first_date = reg.registration_date;
    reg.append_event("Quiz", "9123456780");
    assert_eq!(reg.evname, "Hackathon, Quiz");
    assert_eq!(reg.events(), vec!["Hackathon", "Quiz"]);
    assert_eq!(reg.mobile, "9123456780");
    assert!(reg.registration_date >= first_date);
}

#[test]
fn test_has_event_is_exact() {
    let mut reg = Registration::new(Uuid::new_v4(), "ravi", "ravi@x.io", "Code Sprint", "9876543210");
    reg.append_event("Quiz", "9876543210");

    assert!(reg.has_event("Quiz"));
    assert!(reg.has_event("Code Sprint"));
    assert!(!reg.has_event("Code"));
    assert!(!reg.has_event("quiz"));
}

#[test]
fn test_for_event_shows_only_that_event() {
    let mut reg = Registration::new(Uuid::new_v4(), "ravi", "ravi@x.io", "Hackathon", "9876543210");
    reg.append_event("Quiz", "9876543210");

    let view = reg.for_event("Quiz");
    assert_eq!(view.evname, "Quiz");
    assert_eq!(view.id, reg.id);
}
