//! Casting brief input validation.

use crate::error::CoreError;

/// Validate the fields required to publish a casting brief.
///
/// Title, agency, shoot details, and the role description are mandatory;
/// callback, wardrobe, media usage, venue, rate, and the rich-text body are
/// free-form and optional. The brief date is enforced by its type in the
/// create DTO.
pub fn validate_new_brief(
    title: &str,
    agency: &str,
    shoot: &str,
    roles: &str,
) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Brief title is required".into()));
    }
    if agency.trim().is_empty() {
        return Err(CoreError::Validation("Agency is required".into()));
    }
    if shoot.trim().is_empty() {
        return Err(CoreError::Validation("Shoot details are required".into()));
    }
    if roles.trim().is_empty() {
        return Err(CoreError::Validation(
            "Role description is required".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_brief_passes() {
        assert!(validate_new_brief("BMW - Male Driver", "Talent Africa", "2 day shoot", "Male, 30-40").is_ok());
    }

    #[test]
    fn each_required_field_is_enforced() {
        assert!(validate_new_brief("", "a", "s", "r").is_err());
        assert!(validate_new_brief("t", " ", "s", "r").is_err());
        assert!(validate_new_brief("t", "a", "", "r").is_err());
        assert!(validate_new_brief("t", "a", "s", "\t").is_err());
    }
}
