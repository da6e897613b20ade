use crate::error::ApiError;
use crate::models::{DislikeRequest, LikeRequest};
use crate::routes::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Configure swipe routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/like", web::post().to(like))
        .route("/dislike", web::post().to(dislike))
        .route("/alllikes/{username}", web::get().to(all_likes))
        .route("/alldislikes/{username}", web::get().to(all_dislikes));
}

/// Record a like swipe
///
/// POST /like
///
/// Request body:
/// ```json
/// {
///   "user_swiping": "string",
///   "user_being_liked": "string"
/// }
/// ```
async fn like(
    state: web::Data<AppState>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .affinity
        .like(&req.user_swiping, &req.user_being_liked)
        .await?;

    Ok(HttpResponse::Ok().body(format!(
        "{} liked {}",
        req.user_swiping, req.user_being_liked
    )))
}

/// Record a dislike swipe
///
/// POST /dislike
async fn dislike(
    state: web::Data<AppState>,
    req: web::Json<DislikeRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    state
        .affinity
        .dislike(&req.user_swiping, &req.user_being_disliked)
        .await?;

    Ok(HttpResponse::Ok().body(format!(
        "{} disliked {}",
        req.user_swiping, req.user_being_disliked
    )))
}

/// All likes issued by a user
///
/// GET /alllikes/{username}
async fn all_likes(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();

    let edges = state.affinity.likes_for(&username).await?;

    Ok(HttpResponse::Ok().json(edges))
}

/// All dislikes issued by a user
///
/// GET /alldislikes/{username}
async fn all_dislikes(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();

    let edges = state.affinity.dislikes_for(&username).await?;

    Ok(HttpResponse::Ok().json(edges))
}
