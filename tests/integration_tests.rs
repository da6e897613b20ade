// Integration tests for Friender API

use friender_api::config::StorageSettings;
use friender_api::models::{CardsResponse, UserResponse, UserView};
use friender_api::services::{StorageClient, StorageError};

fn storage_settings(endpoint: String) -> StorageSettings {
    StorageSettings {
        endpoint,
        bucket: "friender-images".to_string(),
        region: "us-west-1".to_string(),
        access_token: "test_token".to_string(),
        public_base_url: None,
        timeout_secs: Some(5),
    }
}

fn create_test_view(username: &str) -> UserView {
    UserView {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        firstname: "Test".to_string(),
        lastname: "User".to_string(),
        location: String::new(),
        hobbies: String::new(),
        interests: String::new(),
        friendradius: 0,
        image_url: "/static/images/default-pic.png".to_string(),
    }
}

#[tokio::test]
async fn test_storage_upload_puts_object_and_returns_public_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/friender-images/ann-profile-image")
        .match_header("authorization", "Bearer test_token")
        .match_header("content-type", "image/png")
        .with_status(200)
        .create_async()
        .await;

    let client = StorageClient::new(&storage_settings(server.url()));
    let url = client
        .upload("ann-profile-image", b"not-really-a-png".to_vec(), "image/png")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        url,
        "https://friender-images.s3.us-west-1.amazonaws.com/ann-profile-image"
    );
}

#[tokio::test]
async fn test_storage_upload_failure_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PUT", "/friender-images/ann-profile-image")
        .with_status(403)
        .create_async()
        .await;

    let client = StorageClient::new(&storage_settings(server.url()));
    let result = client
        .upload("ann-profile-image", b"bytes".to_vec(), "image/png")
        .await;

    match result {
        Err(StorageError::ApiError(message)) => assert!(message.contains("403")),
        other => panic!("Expected ApiError, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_user_response_envelope_shape() {
    let response = UserResponse {
        user: create_test_view("ann"),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["user"]["username"], "ann");
    assert!(json["user"].get("password").is_none());
}

#[test]
fn test_cards_response_envelope_shape() {
    let response = CardsResponse {
        users: vec![create_test_view("ann"), create_test_view("bob")],
    };

    let json = serde_json::to_value(&response).unwrap();
    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["username"], "bob");
}

/// Full signup -> login -> swipe flow against a running server.
///
/// Needs a live instance with a clean database; point FRIENDER_TEST_API
/// at it and run with `cargo test -- --ignored`.
#[tokio::test]
#[ignore]
async fn test_end_to_end_swipe_flow() {
    let base = std::env::var("FRIENDER_TEST_API")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = reqwest::Client::new();

    // Sign up two users
    for (username, email) in [("ann", "ann@x.com"), ("bob", "bob@x.com")] {
        let response = client
            .post(format!("{}/signup", base))
            .json(&serde_json::json!({
                "username": username,
                "password": "pw1",
                "email": email,
                "firstname": "Ann",
                "lastname": "A",
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["user"]["username"], username);
        assert!(body["user"].get("password").is_none());
    }

    // Correct password logs in
    let login = client
        .post(format!("{}/login", base))
        .json(&serde_json::json!({"username": "ann", "password": "pw1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(login.status(), 200);

    // Wrong password does not
    let bad_login = client
        .post(format!("{}/login", base))
        .json(&serde_json::json!({"username": "ann", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_login.status(), 401);

    // Swipe and read it back
    let like = client
        .post(format!("{}/like", base))
        .json(&serde_json::json!({"user_swiping": "ann", "user_being_liked": "bob"}))
        .send()
        .await
        .unwrap();
    assert_eq!(like.status(), 200);

    let likes: serde_json::Value = client
        .get(format!("{}/alllikes/ann", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let edges = likes.as_array().unwrap();
    assert!(edges
        .iter()
        .any(|edge| edge["user_swiping"] == "ann" && edge["user_being_liked"] == "bob"));
}
