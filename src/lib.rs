//! Friender API - swipe-to-match backend service for the Friender social app
//!
//! This library implements the user directory (signup, login, profile
//! updates), the affinity ledger (like/dislike swipes between users) and
//! the object-storage client used for profile image uploads.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::password;
pub use error::ApiError;
pub use models::{DislikeEdge, LikeEdge, NewUser, ProfileChanges, User, UserView};
