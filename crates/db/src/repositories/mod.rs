//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod brief_repo;
pub mod event_repo;
pub mod favorite_repo;
pub mod list_repo;
pub mod presentation_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod user_repo;

pub use brief_repo::BriefRepo;
pub use event_repo::EventRepo;
pub use favorite_repo::FavoriteRepo;
pub use list_repo::ListRepo;
pub use presentation_repo::PresentationRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
pub use user_repo::UserRepo;
