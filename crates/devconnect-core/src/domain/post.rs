use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collection::{Identified, find_index, find_index_by_id, insert_front, remove_at};
use crate::error::{DomainError, Missing};

/// Text and author display details shared by posts and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

/// A user's like on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub user_id: Uuid,
}

/// A comment left on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Post aggregate - a status update with its likes and comments.
///
/// Likes are unique per user. Both collections are kept newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post authored by `user_id`.
    pub fn new(user_id: Uuid, content: PostContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            text: content.text,
            name: content.name,
            avatar: content.avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Only the author may act on the post as a whole.
    pub fn ensure_author(&self, user_id: Uuid) -> Result<(), DomainError> {
        if self.user_id == user_id {
            Ok(())
        } else {
            Err(DomainError::NotOwner)
        }
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    pub fn like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        if self.is_liked_by(user_id) {
            return Err(DomainError::AlreadyLiked);
        }
        insert_front(
            &mut self.likes,
            Like {
                id: Uuid::new_v4(),
                user_id,
            },
        );
        Ok(())
    }

    pub fn unlike(&mut self, user_id: Uuid) -> Result<Like, DomainError> {
        find_index(&self.likes, |like| like.user_id == user_id)
            .and_then(|index| remove_at(&mut self.likes, index))
            .ok_or(DomainError::NotLiked)
    }

    /// Prepend a comment and return its id.
    pub fn add_comment(&mut self, user_id: Uuid, content: PostContent) -> Uuid {
        let comment = Comment {
            id: Uuid::new_v4(),
            user_id,
            text: content.text,
            name: content.name,
            avatar: content.avatar,
            created_at: Utc::now(),
        };
        let id = comment.id;
        insert_front(&mut self.comments, comment);
        id
    }

    pub fn remove_comment(&mut self, comment_id: &str) -> Result<Comment, DomainError> {
        find_index_by_id(&self.comments, comment_id)
            .and_then(|index| remove_at(&mut self.comments, index))
            .ok_or(DomainError::NotFound(Missing::Comment))
    }
}

impl Identified for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Like {
    fn id(&self) -> Uuid {
        self.id
    }
}
