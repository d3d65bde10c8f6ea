//! Data Transfer Objects - response shapes that differ from the stored aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of an account, returned by registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller, as read from the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Issued on a successful login. `token` already carries the `Bearer ` prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

impl LoginResponse {
    pub fn bearer(token: &str) -> Self {
        Self {
            success: true,
            token: format!("Bearer {token}"),
        }
    }
}

/// Owner details embedded in profile responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

/// A record with its owner's summary attached under `user`.
///
/// The record's own fields are flattened next to it, so a profile keeps its
/// usual shape and gains `user: {id, name, avatar}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithOwner<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
