//! Profile handlers, including the experience and education lists.

use actix_web::{HttpResponse, web};
use futures::future::try_join_all;
use serde_json::Value;

use devconnect_core::domain::{Profile, User};
use devconnect_core::validation::{education_fields, experience_fields, profile_fields};
use devconnect_core::{DomainError, Missing};
use devconnect_shared::SuccessResponse;
use devconnect_shared::dto::{UserSummary, WithOwner};

use super::{parse_id, raw_input};
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn summary(user: User) -> UserSummary {
    UserSummary {
        id: user.id,
        name: user.name,
        avatar: user.avatar,
    }
}

/// Attach the owner's summary, if the owner still exists.
async fn with_owner(state: &AppState, profile: Profile) -> AppResult<WithOwner<Profile>> {
    let user = state.users.find_by_id(profile.user_id).await?;
    Ok(WithOwner {
        record: profile,
        user: user.map(summary),
    })
}

async fn own_profile(state: &AppState, identity: &Identity) -> AppResult<Profile> {
    state
        .profiles
        .find_by_user_id(identity.user_id)
        .await?
        .ok_or_else(|| Missing::Profile.into())
}

/// GET /api/profile
pub async fn current(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let profile = own_profile(&state, &identity).await?;
    Ok(HttpResponse::Ok().json(with_owner(&state, profile).await?))
}

/// GET /api/profile/all
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profiles = state.profiles.find_all().await?;
    let populated = try_join_all(profiles.into_iter().map(|p| with_owner(&state, p))).await?;
    Ok(HttpResponse::Ok().json(populated))
}

/// GET /api/profile/handle/{handle}
pub async fn by_handle(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profile = state
        .profiles
        .find_by_handle(&path)
        .await?
        .ok_or(AppError::from(Missing::Profile))?;
    Ok(HttpResponse::Ok().json(with_owner(&state, profile).await?))
}

/// GET /api/profile/user/{user_id}
pub async fn by_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_id(&path, Missing::Profile)?;
    let profile = state
        .profiles
        .find_by_user_id(user_id)
        .await?
        .ok_or(AppError::from(Missing::Profile))?;
    Ok(HttpResponse::Ok().json(with_owner(&state, profile).await?))
}

/// POST /api/profile - create the caller's profile, or update it in place.
pub async fn upsert(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let fields = profile_fields(&raw_input(body))?;

    let handle_taken = state
        .profiles
        .find_by_handle(&fields.handle)
        .await?
        .is_some_and(|holder| holder.user_id != identity.user_id);
    if handle_taken {
        return Err(DomainError::Duplicate {
            field: "handle",
            message: "That handle already exists".to_string(),
        }
        .into());
    }

    let profile = match state.profiles.find_by_user_id(identity.user_id).await? {
        Some(mut existing) => {
            existing.update(fields);
            existing
        }
        None => Profile::new(identity.user_id, fields),
    };
    let profile = state.profiles.save(profile).await?;

    tracing::info!(user_id = %identity.user_id, handle = %profile.handle, "Profile saved");
    Ok(HttpResponse::Ok().json(with_owner(&state, profile).await?))
}

/// POST /api/profile/experience
pub async fn add_experience(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let fields = experience_fields(&raw_input(body))?;
    let mut profile = own_profile(&state, &identity).await?;
    let experience_id = profile.add_experience(fields);
    let profile = state.profiles.save(profile).await?;

    tracing::info!(user_id = %identity.user_id, %experience_id, "Experience added");
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut profile = own_profile(&state, &identity).await?;
    profile.remove_experience(&path)?;
    let profile = state.profiles.save(profile).await?;

    tracing::info!(user_id = %identity.user_id, experience_id = %path, "Experience removed");
    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/profile/education
pub async fn add_education(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let fields = education_fields(&raw_input(body))?;
    let mut profile = own_profile(&state, &identity).await?;
    let education_id = profile.add_education(fields);
    let profile = state.profiles.save(profile).await?;

    tracing::info!(user_id = %identity.user_id, %education_id, "Education added");
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut profile = own_profile(&state, &identity).await?;
    profile.remove_education(&path)?;
    let profile = state.profiles.save(profile).await?;

    tracing::info!(user_id = %identity.user_id, education_id = %path, "Education removed");
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile - remove the caller's profile, posts and account.
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    if let Some(profile) = state.profiles.find_by_user_id(identity.user_id).await? {
        state.profiles.delete(profile.id).await?;
    }
    for post in state.posts.find_by_user_id(identity.user_id).await? {
        state.posts.delete(post.id).await?;
    }
    state.users.delete(identity.user_id).await?;

    tracing::info!(user_id = %identity.user_id, "Account deleted");
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
