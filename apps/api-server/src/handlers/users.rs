//! Admin user directory.

use actix_web::{HttpResponse, web};

use super::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users - admin only.
pub async fn list(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let users = state.users.list(&identity.actor()).await?;
    Ok(HttpResponse::Ok().json(users.into_iter().map(user_response).collect::<Vec<_>>()))
}
