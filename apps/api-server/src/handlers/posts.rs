//! Post handlers: the feed, likes and comments.

use actix_web::{HttpResponse, web};
use serde_json::Value;

use devconnect_core::Missing;
use devconnect_core::domain::{Post, PostContent};
use devconnect_core::validation::post_content;
use devconnect_shared::SuccessResponse;

use super::{parse_id, raw_input};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn load(state: &AppState, raw_id: &str) -> AppResult<Post> {
    let id = parse_id(raw_id, Missing::Post)?;
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| Missing::Post.into())
}

/// Body content, signed with the caller's name and avatar unless the body
/// supplies its own.
fn signed_content(body: web::Json<Value>, identity: &Identity) -> AppResult<PostContent> {
    let mut content = post_content(&raw_input(body))?;
    content.name.get_or_insert_with(|| identity.name.clone());
    content.avatar.get_or_insert_with(|| identity.avatar.clone());
    Ok(content)
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = load(&state, &path).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let content = signed_content(body, &identity)?;
    let post = state.posts.save(Post::new(identity.user_id, content)).await?;

    tracing::info!(post_id = %post.id, user_id = %identity.user_id, "Post created");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = load(&state, &path).await?;
    post.ensure_author(identity.user_id)?;
    state.posts.delete(post.id).await?;

    tracing::info!(post_id = %post.id, user_id = %identity.user_id, "Post deleted");
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

/// POST /api/posts/like/{id}
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut post = load(&state, &path).await?;
    post.like(identity.user_id)?;
    let post = state.posts.save(post).await?;

    tracing::debug!(post_id = %post.id, user_id = %identity.user_id, "Post liked");
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/unlike/{id}
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut post = load(&state, &path).await?;
    post.unlike(identity.user_id)?;
    let post = state.posts.save(post).await?;

    tracing::debug!(post_id = %post.id, user_id = %identity.user_id, "Post unliked");
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/comment/{id}
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let content = signed_content(body, &identity)?;
    let mut post = load(&state, &path).await?;
    let comment_id = post.add_comment(identity.user_id, content);
    let post = state.posts.save(post).await?;

    tracing::info!(post_id = %post.id, %comment_id, "Comment added");
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let mut post = load(&state, &post_id).await?;
    let removed = post.remove_comment(&comment_id)?;
    let post = state.posts.save(post).await?;

    tracing::info!(post_id = %post.id, comment_id = %removed.id, "Comment removed");
    Ok(HttpResponse::Ok().json(post))
}
