//! Pre-write checks shared by every input record.
//!
//! Validation runs before any statement reaches the database and reports the
//! first violated constraint as [`ModelError::Validation`].

use chrono::NaiveDate;

use crate::errors::ModelError;

/// Implemented by every payload accepted on create/update.
pub trait Validate {
    /// `today` is injected so "not in the future" checks stay deterministic.
    fn validate(&self, today: NaiveDate) -> Result<(), ModelError>;
}

pub fn not_blank(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} longer than {max} characters")));
    }
    Ok(())
}

pub fn not_in_future(field: &str, date: NaiveDate, today: NaiveDate) -> Result<(), ModelError> {
    if date > today {
        return Err(ModelError::Validation(format!("{field} must not be in the future")));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::Validation(format!("{field} must be a non-negative amount")));
    }
    Ok(())
}

/// `end` may equal `start`; a one-day range is valid.
pub fn not_before(field: &str, end: NaiveDate, start: NaiveDate) -> Result<(), ModelError> {
    if end < start {
        return Err(ModelError::Validation(format!("{field} precedes the start date")));
    }
    Ok(())
}
