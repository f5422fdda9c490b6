//! Reason codes reported by rules and the strength scorer.
//!
//! Codes are stable tokens meant to be mapped to user-facing text by the
//! caller. Their `Display` form is the wire token (e.g. `TooShort`,
//! `MissingRequiredClass:digit`).

use std::fmt;

use crate::policy::CharClass;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReasonCode {
    /// Value absent for a required field, or blank for a `NotEmpty` rule.
    Required,
    TooShort,
    TooLong,
    PatternMismatch,
    OutOfRange,
    /// The rule cannot be applied to this kind of value (e.g. `Range` on text).
    TypeMismatch,
    /// A custom predicate returned `false`.
    PredicateFailed,
    /// A custom predicate returned an error or panicked.
    PredicateError,
    BannedValue,
    MissingRequiredClass(CharClass),
    LowEntropy,
    RepetitivePattern,
    SequentialPattern,
    WeakPassword,
    /// Caller-defined token set through [`Rule::with_reason`](crate::Rule::with_reason).
    Custom(String),
}

impl ReasonCode {
    pub fn custom(token: impl Into<String>) -> Self {
        ReasonCode::Custom(token.into())
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonCode::Required => f.write_str("Required"),
            ReasonCode::TooShort => f.write_str("TooShort"),
            ReasonCode::TooLong => f.write_str("TooLong"),
            ReasonCode::PatternMismatch => f.write_str("PatternMismatch"),
            ReasonCode::OutOfRange => f.write_str("OutOfRange"),
            ReasonCode::TypeMismatch => f.write_str("TypeMismatch"),
            ReasonCode::PredicateFailed => f.write_str("PredicateFailed"),
            ReasonCode::PredicateError => f.write_str("PredicateError"),
            ReasonCode::BannedValue => f.write_str("BannedValue"),
            ReasonCode::MissingRequiredClass(class) => {
                write!(f, "MissingRequiredClass:{}", class)
            }
            ReasonCode::LowEntropy => f.write_str("LowEntropy"),
            ReasonCode::RepetitivePattern => f.write_str("RepetitivePattern"),
            ReasonCode::SequentialPattern => f.write_str("SequentialPattern"),
            ReasonCode::WeakPassword => f.write_str("WeakPassword"),
            ReasonCode::Custom(token) => f.write_str(token),
        }
    }
}
