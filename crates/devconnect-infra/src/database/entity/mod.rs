//! SeaORM entities. Nested collections are stored as `jsonb` columns so that
//! an aggregate is always written as one row.

pub mod post;
pub mod profile;
pub mod user;
