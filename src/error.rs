//! Construction-time errors.
//!
//! Validation failures are never errors; they are reason codes inside a
//! [`ValidationResult`](crate::ValidationResult).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Rule set references undeclared field: {0}")]
    UndeclaredField(String),
    #[error("Field declared more than once: {0}")]
    DuplicateField(String),
    #[error("More than one rule set for field: {0}")]
    DuplicateRuleSet(String),
    #[error("Inverted range on field {field}: min {min} > max {max}")]
    InvertedRange { field: String, min: f64, max: f64 },
    #[error("NaN range bound on field {0}")]
    NanRangeBound(String),
    #[error("Inverted length bounds on field {field}: min {min} > max {max}")]
    InvertedLength { field: String, min: usize, max: usize },
    #[error("Invalid pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid password policy: {0}")]
    InvalidPolicy(String),
}
