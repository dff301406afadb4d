//! Input validation for process sets.
//!
//! Checks the process records before a run. Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//!
//! All errors are collected, not just the first one.

use crate::models::ProcessSet;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process ID.
    pub process_id: i64,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is before t=0.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, process_id: i64, message: impl Into<String>) -> Self {
        Self {
            kind,
            process_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the processes of a run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &ProcessSet) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes.iter() {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                p.id,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                p.id,
                format!("Process {} arrives at negative time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    #[test]
    fn test_valid_input() {
        let set = ProcessSet::from_triplets(&[1, 0, 5, 2, 1, 3]);
        assert!(validate_processes(&set).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_processes(&ProcessSet::new()).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let set = ProcessSet::new()
            .with_process(Process::new(1, 0, 5))
            .with_process(Process::new(1, 2, 3));

        let errors = validate_processes(&set).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].process_id, 1);
    }

    #[test]
    fn test_bad_times() {
        let set = ProcessSet::new()
            .with_process(Process::new(1, -2, 5))
            .with_process(Process::new(2, 0, 0));

        let errors = validate_processes(&set).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_multiple_errors() {
        let set = ProcessSet::new()
            .with_process(Process::new(3, -1, -1))
            .with_process(Process::new(3, 0, 1));

        let errors = validate_processes(&set).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
