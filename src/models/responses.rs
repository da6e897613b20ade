use crate::models::domain::UserView;
use serde::{Deserialize, Serialize};

/// Envelope for a single serialized user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserView,
}

/// Response for the cards endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsResponse {
    pub users: Vec<UserView>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
