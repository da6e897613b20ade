use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub firstname: String,
    #[validate(length(min = 1))]
    pub lastname: String,
}

/// Request to log in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}

/// Request to record a like swipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LikeRequest {
    #[validate(length(min = 1))]
    pub user_swiping: String,
    #[validate(length(min = 1))]
    pub user_being_liked: String,
}

/// Request to record a dislike swipe
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DislikeRequest {
    #[validate(length(min = 1))]
    pub user_swiping: String,
    #[validate(length(min = 1))]
    pub user_being_disliked: String,
}

/// Multipart form for `PATCH /profile`
///
/// All text fields are required; `image_url` carries the profile image
/// file itself, which gets uploaded to object storage before the row is
/// updated. A non-numeric `friendradius` fails extraction with a 400.
#[derive(Debug, MultipartForm)]
pub struct ProfileUpdateForm {
    pub username: Text<String>,
    pub password: Text<String>,
    pub email: Text<String>,
    pub firstname: Text<String>,
    pub lastname: Text<String>,
    pub location: Text<String>,
    pub hobbies: Text<String>,
    pub interests: Text<String>,
    pub friendradius: Text<i32>,
    #[multipart(limit = "10MB")]
    pub image_url: TempFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validates() {
        let req = SignupRequest {
            username: "ann".to_string(),
            password: "pw1".to_string(),
            email: "ann@example.com".to_string(),
            firstname: "Ann".to_string(),
            lastname: "Archer".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signup_rejects_empty_username() {
        let req = SignupRequest {
            username: "".to_string(),
            password: "pw1".to_string(),
            email: "ann@example.com".to_string(),
            firstname: "Ann".to_string(),
            lastname: "Archer".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_signup_rejects_malformed_email() {
        let req = SignupRequest {
            username: "ann".to_string(),
            password: "pw1".to_string(),
            email: "not-an-email".to_string(),
            firstname: "Ann".to_string(),
            lastname: "Archer".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_like_request_deserializes_from_client_payload() {
        let req: LikeRequest =
            serde_json::from_str(r#"{"user_swiping": "ann", "user_being_liked": "bob"}"#).unwrap();
        assert_eq!(req.user_swiping, "ann");
        assert_eq!(req.user_being_liked, "bob");
        assert!(req.validate().is_ok());
    }
}
