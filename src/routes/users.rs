use crate::error::ApiError;
use crate::models::{
    CardsResponse, HealthResponse, NewUser, ProfileChanges, ProfileUpdateForm, SignupRequest,
    LoginRequest, UserResponse,
};
use crate::routes::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Configure identity and profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/signup", web::post().to(signup))
        .route("/login", web::post().to(login))
        .route("/profile", web::patch().to(update_profile))
        .route("/cards", web::get().to(cards));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let db_healthy = state.users.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create a new account
///
/// POST /signup
///
/// Request body:
/// ```json
/// {
///   "username": "string",
///   "password": "string",
///   "email": "string",
///   "firstname": "string",
///   "lastname": "string"
/// }
/// ```
async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let req = req.into_inner();

    tracing::info!("Signup requested for username: {}", req.username);

    let user = state
        .users
        .signup(NewUser {
            username: req.username,
            email: req.email,
            password: req.password,
            firstname: req.firstname,
            lastname: req.lastname,
        })
        .await?;

    Ok(HttpResponse::Created().json(UserResponse {
        user: user.to_view(),
    }))
}

/// Log in with username and password
///
/// POST /login
///
/// Responds 401 with a fixed message on failure; whether the username or
/// the password was wrong is not disclosed.
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    match state.users.authenticate(&req.username, &req.password).await? {
        Some(user) => {
            tracing::info!("Login succeeded for {}", req.username);
            Ok(HttpResponse::Ok().json(UserResponse {
                user: user.to_view(),
            }))
        }
        None => Err(ApiError::AuthenticationFailed),
    }
}

/// Update a profile and its image
///
/// PATCH /profile
///
/// Multipart form: username, password, email, firstname, lastname,
/// location, hobbies, interests, friendradius, plus the image file under
/// the `image_url` field. Authentication happens before the upload; a
/// failed upload aborts the update.
async fn update_profile(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<ProfileUpdateForm>,
) -> Result<HttpResponse, ApiError> {
    let username = form.username.into_inner();
    let password = form.password.into_inner();

    if state.users.authenticate(&username, &password).await?.is_none() {
        return Err(ApiError::AuthenticationFailed);
    }

    let object_key = format!("{}-profile-image", username);
    let content_type = form
        .image_url
        .content_type
        .as_ref()
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let bytes = tokio::fs::read(form.image_url.file.path())
        .await
        .map_err(crate::services::StorageError::from)?;

    let image_url = state
        .storage
        .upload(&object_key, bytes, &content_type)
        .await?;

    tracing::info!("Uploaded profile image for {} to {}", username, image_url);

    let updated = state
        .users
        .update(
            &username,
            ProfileChanges {
                firstname: form.firstname.into_inner(),
                lastname: form.lastname.into_inner(),
                email: form.email.into_inner(),
                location: form.location.into_inner(),
                hobbies: form.hobbies.into_inner(),
                interests: form.interests.into_inner(),
                friendradius: form.friendradius.into_inner(),
                image_url,
            },
        )
        .await?;

    match updated {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse {
            user: user.to_view(),
        })),
        None => Err(ApiError::NotFound(format!("No such user: {}", username))),
    }
}

/// All user cards
///
/// GET /cards
async fn cards(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.users.list_all().await?;

    let views: Vec<_> = users.iter().map(|user| user.to_view()).collect();

    Ok(HttpResponse::Ok().json(CardsResponse { users: views }))
}
