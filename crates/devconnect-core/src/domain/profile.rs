use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collection::{Identified, find_index_by_id, insert_front, remove_at};
use crate::error::{DomainError, Missing};

/// Links to a developer's social accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// A job held by the profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceFields {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

/// A school attended by the profile owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationFields {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

/// The editable top-level fields of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub handle: String,
    pub status: String,
    pub skillset: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
}

/// Profile aggregate - one per user, addressed publicly by its handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub handle: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skillset: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: Uuid, fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            handle: fields.handle,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            skillset: fields.skillset,
            bio: fields.bio,
            github_username: fields.github_username,
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Overwrite the supplied fields, keeping the ones left out.
    ///
    /// Social links are replaced as a whole.
    pub fn update(&mut self, fields: ProfileFields) {
        self.handle = fields.handle;
        self.status = fields.status;
        self.skillset = fields.skillset;
        self.social = fields.social;

        let optional = [
            (&mut self.company, fields.company),
            (&mut self.website, fields.website),
            (&mut self.location, fields.location),
            (&mut self.bio, fields.bio),
            (&mut self.github_username, fields.github_username),
        ];
        for (slot, value) in optional {
            if value.is_some() {
                *slot = value;
            }
        }
    }

    /// Prepend an experience entry and return its id.
    pub fn add_experience(&mut self, fields: ExperienceFields) -> Uuid {
        let entry = Experience {
            id: Uuid::new_v4(),
            title: fields.title,
            company: fields.company,
            location: fields.location,
            from: fields.from,
            to: fields.to,
            current: fields.current,
            description: fields.description,
        };
        let id = entry.id;
        insert_front(&mut self.experience, entry);
        id
    }

    pub fn remove_experience(&mut self, experience_id: &str) -> Result<Experience, DomainError> {
        find_index_by_id(&self.experience, experience_id)
            .and_then(|index| remove_at(&mut self.experience, index))
            .ok_or(DomainError::NotFound(Missing::Experience))
    }

    /// Prepend an education entry and return its id.
    pub fn add_education(&mut self, fields: EducationFields) -> Uuid {
        let entry = Education {
            id: Uuid::new_v4(),
            school: fields.school,
            degree: fields.degree,
            field_of_study: fields.field_of_study,
            from: fields.from,
            to: fields.to,
            current: fields.current,
            description: fields.description,
        };
        let id = entry.id;
        insert_front(&mut self.education, entry);
        id
    }

    pub fn remove_education(&mut self, education_id: &str) -> Result<Education, DomainError> {
        find_index_by_id(&self.education, education_id)
            .and_then(|index| remove_at(&mut self.education, index))
            .ok_or(DomainError::NotFound(Missing::Education))
    }
}

impl Identified for Profile {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Experience {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Education {
    fn id(&self) -> Uuid {
        self.id
    }
}
