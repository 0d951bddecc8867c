//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Browse parameters for the staff submission index
/// (`?gender=&ethnicity=&favorites_only=&q=&limit=&offset=`).
///
/// Limit and offset are clamped in the repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionBrowseParams {
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub favorites_only: bool,
    /// Case-insensitive substring match against name and surname.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Parameters for the activity feed (`?limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ActivityParams {
    pub limit: Option<i64>,
}
