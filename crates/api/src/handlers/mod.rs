//! Request handlers, one module per resource.

pub mod auth;
pub mod brief;
pub mod event;
pub mod favorite;
pub mod list;
pub mod presentation;
pub mod submission;
pub mod upload;
