// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{DislikeEdge, LikeEdge, NewUser, ProfileChanges, User, UserView, DEFAULT_IMAGE_URL};
pub use requests::{DislikeRequest, LikeRequest, LoginRequest, ProfileUpdateForm, SignupRequest};
pub use responses::{CardsResponse, ErrorResponse, HealthResponse, UserResponse};
