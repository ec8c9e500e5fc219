//! Entity to model mappers
//!
//! Conversions between domain entities (helpdesk-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod comment;
mod notification;
mod reaction;
mod user;

pub use reaction::ReactionInsert;
