// Unit tests for Friender API

use friender_api::core::password::{hash, verify};
use friender_api::models::{LikeEdge, SignupRequest, User, DEFAULT_IMAGE_URL};
use validator::Validate;

fn create_test_user(username: &str) -> User {
    User {
        id: 1,
        email: format!("{}@example.com", username),
        username: username.to_string(),
        password: hash("pw1").unwrap(),
        firstname: "Test".to_string(),
        lastname: "User".to_string(),
        location: None,
        image_url: None,
        hobbies: None,
        interests: None,
        friendradius: None,
    }
}

#[test]
fn test_hash_then_verify_succeeds() {
    let digest = hash("pw1").unwrap();
    assert!(verify(&digest, "pw1"));
}

#[test]
fn test_verify_rejects_different_password() {
    let digest = hash("pw1").unwrap();
    assert!(!verify(&digest, "pw2"));
    assert!(!verify(&digest, ""));
}

#[test]
fn test_hashes_are_salted_per_call() {
    let first = hash("same-password").unwrap();
    let second = hash("same-password").unwrap();

    assert_ne!(first, second, "Each digest should carry a fresh salt");
    assert!(verify(&first, "same-password"));
    assert!(verify(&second, "same-password"));
}

#[test]
fn test_empty_password_hashes_and_verifies() {
    // No special-casing: the empty string goes through the same algorithm
    let digest = hash("").unwrap();
    assert!(verify(&digest, ""));
    assert!(!verify(&digest, "nonempty"));
}

#[test]
fn test_stored_digest_is_not_plaintext() {
    let digest = hash("pw1").unwrap();
    assert_ne!(digest, "pw1");
    assert!(digest.starts_with("$argon2"));
}

#[test]
fn test_view_defaults_optionals() {
    let view = create_test_user("ann").to_view();

    assert_eq!(view.location, "");
    assert_eq!(view.hobbies, "");
    assert_eq!(view.interests, "");
    assert_eq!(view.friendradius, 0);
    assert_eq!(view.image_url, DEFAULT_IMAGE_URL);
}

#[test]
fn test_view_has_no_password_or_id_key() {
    let user = create_test_user("ann");
    let json = serde_json::to_value(user.to_view()).unwrap();
    let object = json.as_object().unwrap();

    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("id"));
    assert_eq!(object.get("username").unwrap(), "ann");
    assert_eq!(object.get("email").unwrap(), "ann@example.com");
}

#[test]
fn test_like_edge_serializes_as_flat_mapping() {
    let edge = LikeEdge {
        user_swiping: "ann".to_string(),
        user_being_liked: "bob".to_string(),
    };

    let json = serde_json::to_value(&edge).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"user_swiping": "ann", "user_being_liked": "bob"})
    );
}

#[test]
fn test_signup_request_requires_all_fields_non_empty() {
    let valid = SignupRequest {
        username: "ann".to_string(),
        password: "pw1".to_string(),
        email: "ann@example.com".to_string(),
        firstname: "Ann".to_string(),
        lastname: "Archer".to_string(),
    };
    assert!(valid.validate().is_ok());

    let mut missing_first = valid.clone();
    missing_first.firstname = String::new();
    assert!(missing_first.validate().is_err());

    let mut bad_email = valid;
    bad_email.email = "nope".to_string();
    assert!(bad_email.validate().is_err());
}
