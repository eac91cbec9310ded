//! Collected field-level validation.
//!
//! Constraint checks never short-circuit: every violated constraint is
//! recorded as a `(field, message)` pair so the boundary layer can re-render
//! a form with all messages at once.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DomainError, ErrorCode};

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulator for field-level violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns whether any violation was recorded for the field.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Merges another set of violations into this one.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Converts into `Ok(())` when empty, or a `ValidationFailed` domain
    /// error carrying each field as a detail otherwise.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Ok(());
        }
        let mut err = DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Validation failed with {} error(s)", self.errors.len()),
        );
        for field_error in &self.errors {
            err = err.with_detail(field_error.field.clone(), field_error.message.clone());
        }
        Err(err)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Constraint checks
    // ─────────────────────────────────────────────────────────────────────

    /// The value must contain at least one non-whitespace character.
    pub fn require_non_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "must not be blank");
        }
    }

    /// The value must be exactly ten ASCII digits.
    pub fn require_telephone(&mut self, field: &str, value: &str) {
        if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
            self.add(field, "must be exactly 10 digits");
        }
    }

    /// The value must start with a street number followed by whitespace and
    /// further text (the shape of "123 Main Street").
    pub fn require_street_address(&mut self, field: &str, value: &str) {
        self.require_non_blank(field, value);
        if !value.trim().is_empty() && !looks_like_street(value) {
            self.add(field, "must start with a number followed by the street name");
        }
    }

    /// The date, when present, must not be after `today`.
    pub fn require_not_in_future(&mut self, field: &str, date: Option<NaiveDate>, today: NaiveDate) {
        if let Some(date) = date {
            if date > today {
                self.add(field, "must not be in the future");
            }
        }
    }
}

/// Matches a leading number, whitespace, then at least one word character.
fn looks_like_street(value: &str) -> bool {
    let after_digits = value.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == value.len() {
        return false; // no street number
    }
    let after_whitespace = after_digits.trim_start_matches(char::is_whitespace);
    if after_whitespace.len() == after_digits.len() {
        return false; // number not followed by whitespace
    }
    after_whitespace
        .chars()
        .next()
        .map(|c| c.is_alphanumeric() || c == '_')
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("firstName", "   ");
        assert!(errors.has_field("firstName"));
    }

    #[test]
    fn telephone_of_ten_digits_passes() {
        let mut errors = ValidationErrors::new();
        errors.require_telephone("telephone", "6085551023");
        assert!(errors.is_empty());
    }

    #[test]
    fn telephone_of_three_digits_fails() {
        let mut errors = ValidationErrors::new();
        errors.require_telephone("telephone", "123");
        assert!(errors.has_field("telephone"));
    }

    #[test]
    fn telephone_with_letters_fails() {
        let mut errors = ValidationErrors::new();
        errors.require_telephone("telephone", "60855510ab");
        assert!(errors.has_field("telephone"));
    }

    #[test]
    fn street_with_leading_number_passes() {
        let mut errors = ValidationErrors::new();
        errors.require_street_address("address", "123 Main Street");
        assert!(errors.is_empty());
    }

    #[test]
    fn street_without_leading_number_fails() {
        let mut errors = ValidationErrors::new();
        errors.require_street_address("address", "Main Street");
        assert!(errors.has_field("address"));
    }

    #[test]
    fn street_number_without_following_text_fails() {
        let mut errors = ValidationErrors::new();
        errors.require_street_address("address", "123");
        assert!(errors.has_field("address"));
    }

    #[test]
    fn birth_date_today_passes() {
        let today = date(2025, 6, 1);
        let mut errors = ValidationErrors::new();
        errors.require_not_in_future("birthDate", Some(today), today);
        assert!(errors.is_empty());
    }

    #[test]
    fn birth_date_tomorrow_fails() {
        let today = date(2025, 6, 1);
        let mut errors = ValidationErrors::new();
        errors.require_not_in_future("birthDate", Some(date(2025, 6, 2)), today);
        assert!(errors.has_field("birthDate"));
    }

    #[test]
    fn missing_date_is_not_a_future_violation() {
        let mut errors = ValidationErrors::new();
        errors.require_not_in_future("birthDate", None, date(2025, 6, 1));
        assert!(errors.is_empty());
    }

    #[test]
    fn violations_are_collected_not_short_circuited() {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("firstName", "");
        errors.require_telephone("telephone", "123");
        errors.require_street_address("address", "Main Street");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn into_result_carries_fields_as_details() {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("city", "");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.details.contains_key("city"));
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
