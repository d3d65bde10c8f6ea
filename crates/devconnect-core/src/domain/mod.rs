//! Domain entities - the aggregates and the collections nested in them.

pub mod collection;

mod post;
mod profile;
mod user;

pub use collection::Identified;
pub use post::{Comment, Like, Post, PostContent};
pub use profile::{
    Education, EducationFields, Experience, ExperienceFields, Profile, ProfileFields, SocialLinks,
};
pub use user::{User, gravatar_url};
