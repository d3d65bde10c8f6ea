//! HTTP handlers and route configuration.

mod health;
mod posts;
mod profile;
mod users;

#[cfg(test)]
mod tests;

use actix_web::web;
use serde_json::Value;
use uuid::Uuid;

use devconnect_core::Missing;
use devconnect_core::validation::RawInput;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(users::register))
                    .route("/login", web::post().to(users::login))
                    .route("/current", web::get().to(users::current)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/like/{id}", web::post().to(posts::like))
                    .route("/unlike/{id}", web::post().to(posts::unlike))
                    .route("/comment/{id}", web::post().to(posts::add_comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(posts::remove_comment),
                    )
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            .service(
                web::scope("/profile")
                    .route("", web::get().to(profile::current))
                    .route("", web::post().to(profile::upsert))
                    .route("", web::delete().to(profile::delete_account))
                    .route("/all", web::get().to(profile::list))
                    .route("/handle/{handle}", web::get().to(profile::by_handle))
                    .route("/user/{user_id}", web::get().to(profile::by_user))
                    .route("/experience", web::post().to(profile::add_experience))
                    .route(
                        "/experience/{exp_id}",
                        web::delete().to(profile::remove_experience),
                    )
                    .route("/education", web::post().to(profile::add_education))
                    .route(
                        "/education/{edu_id}",
                        web::delete().to(profile::remove_education),
                    ),
            ),
    );
}

/// Request body as field-addressable input.
fn raw_input(body: web::Json<Value>) -> RawInput {
    RawInput::from(body.into_inner())
}

/// A path id that is not a UUID cannot name anything, so it reads as `missing`.
fn parse_id(raw: &str, missing: Missing) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| missing.into())
}
