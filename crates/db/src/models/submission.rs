//! Talent submission model and DTOs.

use castdesk_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `submissions` table.
///
/// `image_urls` preserves the order the talent uploaded in (head shot,
/// hands shot, long shot on the public form). `audition_number` is null
/// until staff allocate one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub list_id: DbId,
    pub name: String,
    pub surname: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub ethnicity: Option<String>,
    pub contact: String,
    pub social_media: Option<String>,
    pub agency: Option<String>,
    pub agency_email: Option<String>,
    pub height_cm: Option<i32>,
    pub tshirt_size: Option<String>,
    pub waist_size: Option<i32>,
    pub pants_size: Option<i32>,
    pub dress_size: Option<String>,
    pub shoe_size: Option<i32>,
    pub work_history: Option<String>,
    pub has_work_visa: Option<bool>,
    pub has_criminal_record: Option<bool>,
    pub has_drivers_license: Option<bool>,
    pub availability: Option<String>,
    pub audition_number: Option<i32>,
    pub image_urls: Vec<String>,
    pub video_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for the public form submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubmission {
    #[serde(skip)]
    pub list_id: DbId,
    pub name: String,
    pub surname: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub ethnicity: Option<String>,
    pub contact: String,
    pub social_media: Option<String>,
    pub agency: Option<String>,
    pub agency_email: Option<String>,
    pub height_cm: Option<i32>,
    pub tshirt_size: Option<String>,
    pub waist_size: Option<i32>,
    pub pants_size: Option<i32>,
    pub dress_size: Option<String>,
    pub shoe_size: Option<i32>,
    pub work_history: Option<String>,
    pub has_work_visa: Option<bool>,
    pub has_criminal_record: Option<bool>,
    pub has_drivers_license: Option<bool>,
    pub availability: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub video_url: Option<String>,
}

/// DTO for staff edits and media attachment. Only non-`None` fields apply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSubmission {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub ethnicity: Option<String>,
    pub contact: Option<String>,
    pub social_media: Option<String>,
    pub agency: Option<String>,
    pub agency_email: Option<String>,
    pub height_cm: Option<i32>,
    pub tshirt_size: Option<String>,
    pub waist_size: Option<i32>,
    pub pants_size: Option<i32>,
    pub dress_size: Option<String>,
    pub shoe_size: Option<i32>,
    pub work_history: Option<String>,
    pub has_work_visa: Option<bool>,
    pub has_criminal_record: Option<bool>,
    pub has_drivers_license: Option<bool>,
    pub availability: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub video_url: Option<String>,
}

/// Browse filters for the staff submission index.
///
/// All fields optional; pagination is clamped in the repository.
#[derive(Debug, Clone, Default)]
pub struct SubmissionQuery {
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub favorites_only: bool,
    /// Case-insensitive substring match against name and surname.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
