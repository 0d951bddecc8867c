//! Submission input validation and derived fields.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Maximum number of profile images a single submission may carry.
pub const MAX_SUBMISSION_IMAGES: usize = 5;

/// Validate the public form payload before it is persisted.
///
/// Name, surname, and contact details are the required fields on the public
/// form; everything else is optional.
pub fn validate_new_submission(
    name: &str,
    surname: &str,
    contact: &str,
    image_count: usize,
) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required".into()));
    }
    if surname.trim().is_empty() {
        return Err(CoreError::Validation("Surname is required".into()));
    }
    if contact.trim().is_empty() {
        return Err(CoreError::Validation("Contact details are required".into()));
    }
    if image_count > MAX_SUBMISSION_IMAGES {
        return Err(CoreError::Validation(format!(
            "At most {MAX_SUBMISSION_IMAGES} images are allowed, got {image_count}"
        )));
    }
    Ok(())
}

/// Compute age in whole years on `today` for someone born on `date_of_birth`.
///
/// Accounts for whether the birthday has passed this year; a date of birth
/// in the future yields zero rather than a negative age.
pub fn derive_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    let birthday_passed = (today.month(), today.day()) >= (date_of_birth.month(), date_of_birth.day());
    if !birthday_passed {
        age -= 1;
    }
    age.max(0)
}
