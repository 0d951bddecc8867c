//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is
//!   editable

pub mod brief;
pub mod event;
pub mod favorite;
pub mod list;
pub mod presentation;
pub mod session;
pub mod submission;
pub mod user;
