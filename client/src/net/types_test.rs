use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: Some(format!("{id}@example.com")),
        email_confirmed_at: None,
        identities: None,
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_decodes_gotrue_token_response() {
    let raw = r#"{
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1700003600,
        "refresh_token": "rt",
        "user": { "id": "u1", "email": "u1@example.com", "aud": "authenticated" }
    }"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.access_token, "at");
    assert_eq!(session.refresh_token, "rt");
    assert_eq!(session.expires_at, Some(1_700_003_600));
    assert_eq!(session.user.email_or_empty(), "u1@example.com");
}

#[test]
fn session_stamped_fills_missing_expiry() {
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 60,
        expires_at: None,
        user: user("u1"),
    };
    assert_eq!(session.stamped(1_000).expires_at, Some(1_060));
}

#[test]
fn session_stamped_keeps_provider_expiry() {
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: String::new(),
        token_type: "bearer".to_owned(),
        expires_in: 60,
        expires_at: Some(5),
        user: user("u1"),
    };
    assert_eq!(session.stamped(1_000).expires_at, Some(5));
}

#[test]
fn session_expiry_respects_margin() {
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: String::new(),
        token_type: "bearer".to_owned(),
        expires_in: 0,
        expires_at: Some(100),
        user: user("u1"),
    };
    assert!(!session.is_expired(50, 10));
    assert!(session.is_expired(90, 10));
    assert!(session.is_expired(200, 0));
}

#[test]
fn session_without_expiry_never_expires() {
    let session = Session {
        access_token: "at".to_owned(),
        refresh_token: String::new(),
        token_type: "bearer".to_owned(),
        expires_in: 0,
        expires_at: None,
        user: user("u1"),
    };
    assert!(!session.is_expired(i64::MAX, 0));
}

// =============================================================
// User
// =============================================================

#[test]
fn user_with_empty_identities_is_obfuscated_duplicate() {
    let mut u = user("u1");
    u.identities = Some(Vec::new());
    assert!(u.is_obfuscated_duplicate());
}

#[test]
fn user_without_identities_field_is_not_duplicate() {
    let u: User = serde_json::from_str(r#"{"id":"u1","email":"a@b.com"}"#).unwrap();
    assert!(!u.is_obfuscated_duplicate());
}

#[test]
fn user_with_identity_is_not_duplicate() {
    let u: User = serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","identities":[{"id":"i1","provider":"email"}]}"#,
    )
    .unwrap();
    assert!(!u.is_obfuscated_duplicate());
}

// =============================================================
// SessionEvent
// =============================================================

#[test]
fn session_event_parses_recognized_names() {
    for event in [
        SessionEvent::SignedIn,
        SessionEvent::SignedOut,
        SessionEvent::TokenRefreshed,
        SessionEvent::UserUpdated,
        SessionEvent::UserDeleted,
    ] {
        assert_eq!(SessionEvent::parse(event.as_str()), Some(event));
    }
}

#[test]
fn session_event_ignores_unrecognized_names() {
    assert_eq!(SessionEvent::parse("INITIAL_SESSION"), None);
    assert_eq!(SessionEvent::parse("PASSWORD_RECOVERY"), None);
    assert_eq!(SessionEvent::parse("signed_in"), None);
}

#[test]
fn session_event_serializes_as_provider_name() {
    let json = serde_json::to_string(&SessionEvent::TokenRefreshed).unwrap();
    assert_eq!(json, "\"TOKEN_REFRESHED\"");
}

#[test]
fn only_session_bearing_events_carry_session() {
    assert!(SessionEvent::SignedIn.carries_session());
    assert!(SessionEvent::TokenRefreshed.carries_session());
    assert!(SessionEvent::UserUpdated.carries_session());
    assert!(!SessionEvent::SignedOut.carries_session());
    assert!(!SessionEvent::UserDeleted.carries_session());
}
