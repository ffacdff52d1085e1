//! Authentication handlers.

use actix_web::{HttpResponse, web};

use quill_shared::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let session = state.auth.register(&body).await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token: session.token,
        user: user_response(session.user),
    }))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let session = state.auth.login(&body).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token: session.token,
        user: user_response(session.user),
    }))
}

/// GET /api/auth/me - the authenticated caller's profile.
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state.users.get(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(user_response(user)))
}
