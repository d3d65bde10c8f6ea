//! Account handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use devconnect_core::DomainError;
use devconnect_core::domain::User;
use devconnect_core::validation::{credentials, registration};
use devconnect_shared::dto::{CurrentUserResponse, LoginResponse, UserResponse};

use super::raw_input;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/users/register
pub async fn register(state: web::Data<AppState>, body: web::Json<Value>) -> AppResult<HttpResponse> {
    let form = registration(&raw_input(body))?;

    if state.users.find_by_email(&form.email).await?.is_some() {
        return Err(DomainError::Duplicate {
            field: "email",
            message: "Email already exists".to_string(),
        }
        .into());
    }

    let password_hash = state.passwords.hash(&form.password)?;
    let user = User::new(form.name, form.email, password_hash);
    let user = state.users.save(user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
        created_at: user.created_at,
    }))
}

/// POST /api/users/login
pub async fn login(state: web::Data<AppState>, body: web::Json<Value>) -> AppResult<HttpResponse> {
    let login = credentials(&raw_input(body))?;

    let user = state
        .users
        .find_by_email(&login.email)
        .await?
        .ok_or_else(|| AppError::NotFound {
            key: "email",
            message: "User not found".to_string(),
        })?;

    if !state.passwords.verify(&login.password, &user.password_hash)? {
        return Err(AppError::BadRequest {
            key: "password",
            message: "Password incorrect".to_string(),
        });
    }

    let token = state.tokens.generate_token(&user)?;
    tracing::debug!(user_id = %user.id, "Token issued");

    Ok(HttpResponse::Ok().json(LoginResponse::bearer(&token)))
}

/// GET /api/users/current
pub async fn current(identity: Identity) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse {
        id: identity.user_id,
        name: identity.name,
        email: identity.email,
        avatar: identity.avatar,
    }))
}
