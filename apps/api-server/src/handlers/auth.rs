//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use arena_core::ports::{PasswordService, TokenService};
use arena_shared::ApiResponse;
use arena_shared::dto::{AuthResponse, LoginRequest, MeResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .users
        .authenticate(&req.username, &req.password, password_service.get_ref().as_ref())
        .map_err(|_| AppError::Unauthorized)?;

    let token = token_service
        .generate_token(user.id, &user.username, user.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(MeResponse {
        id: identity.user_id.to_string(),
        username: identity.username,
        role: identity.role.as_str().to_string(),
    })))
}
