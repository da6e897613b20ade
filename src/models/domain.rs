use serde::{Deserialize, Serialize};

/// Placeholder shown until a profile image has been uploaded
pub const DEFAULT_IMAGE_URL: &str = "/static/images/default-pic.png";

/// A user row as stored in the `users` relation
///
/// `password` holds the argon2id digest, never the plaintext. Rows are
/// created by signup and mutated only by profile update; there is no
/// delete operation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub hobbies: Option<String>,
    pub interests: Option<String>,
    pub friendradius: Option<i32>,
}

impl User {
    /// Flat, password-free view returned over the API boundary
    ///
    /// Optional text fields default to the empty string, `friendradius`
    /// defaults to 0 and `image_url` to the placeholder path. `id` and
    /// `password` have no counterpart in the view type at all.
    pub fn to_view(&self) -> UserView {
        UserView {
            username: self.username.clone(),
            email: self.email.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            location: self.location.clone().unwrap_or_default(),
            hobbies: self.hobbies.clone().unwrap_or_default(),
            interests: self.interests.clone().unwrap_or_default(),
            friendradius: self.friendradius.unwrap_or(0),
            image_url: self
                .image_url
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        }
    }
}

/// Serialized user ("card") as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub location: String,
    pub hobbies: String,
    pub interests: String,
    pub friendradius: i32,
    pub image_url: String,
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

/// Mutable profile fields, applied as a full replacement
///
/// `id`, `username` and `password` are deliberately absent; an update can
/// never touch them.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub location: String,
    pub hobbies: String,
    pub interests: String,
    pub friendradius: i32,
    pub image_url: String,
}

/// Directed like edge (actor -> target)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LikeEdge {
    pub user_swiping: String,
    pub user_being_liked: String,
}

/// Directed dislike edge (actor -> target)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DislikeEdge {
    pub user_swiping: String,
    pub user_being_disliked: String,
}
