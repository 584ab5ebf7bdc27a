//! Configuration validation.
//!
//! Checks structural integrity of a [`DispatcherConfig`] before the dispatch
//! loop may start. Detects:
//! - Empty job set
//! - Duplicate job IDs
//! - Zero or negative periods
//! - Non-positive tolerance or polling quantum
//! - Negative phase durations
//!
//! All problems are reported together; a configuration error is fatal and
//! the loop must not start.

use std::collections::HashSet;
use std::fmt;

use crate::config::DispatcherConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The job set is empty.
    EmptyJobSet,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job's period is zero or negative.
    NonPositivePeriod,
    /// The lateness tolerance is zero or negative.
    NonPositiveTolerance,
    /// The polling quantum is zero or negative.
    NonPositiveQuantum,
    /// A simulated phase duration is negative.
    NegativePhaseDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a dispatcher configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &DispatcherConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobSet,
            "Job set is empty; at least one periodic job is required",
        ));
    }

    let mut ids = HashSet::new();
    for spec in &config.jobs {
        if !ids.insert(spec.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", spec.id),
            ));
        }
        if spec.period_us <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositivePeriod,
                format!(
                    "Job {} has non-positive period {} µs",
                    spec.id, spec.period_us
                ),
            ));
        }
    }

    if config.tolerance_us <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveTolerance,
            format!("Non-positive tolerance {} µs", config.tolerance_us),
        ));
    }

    if config.poll_quantum_us <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Non-positive polling quantum {} µs", config.poll_quantum_us),
        ));
    }

    if config.read_phase_us < 0 || config.send_phase_us < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativePhaseDuration,
            format!(
                "Negative phase duration (read {} µs, send {} µs)",
                config.read_phase_us, config.send_phase_us
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
