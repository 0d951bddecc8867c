//! Castdesk change-event infrastructure.
//!
//! The self-hosted stand-in for the hosted database's live-sync listeners:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ChangeEvent`] — the canonical envelope published on every mutation.
//! - [`EventPersistence`] — background service that appends every event to
//!   the `events` journal table.

pub mod bus;
pub mod persistence;

pub use bus::{ChangeEvent, EventBus};
pub use persistence::EventPersistence;
