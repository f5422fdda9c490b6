//! Atomic checks applied to a single field value.

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use regex::Regex;

use crate::error::ConfigurationError;
use crate::field::Field;
use crate::reason::ReasonCode;
use crate::value::{Record, Value};

/// Error type a custom predicate may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Caller-supplied check. `Ok(true)` passes, `Ok(false)` fails with the
/// rule's reason code, `Err(_)` fails with `PredicateError`.
pub type Predicate =
    Arc<dyn Fn(&Value, &RuleContext<'_>) -> Result<bool, BoxError> + Send + Sync>;

/// What a rule sees besides the value: the field it is bound to and the whole
/// record, for cross-field checks.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub field: &'a Field,
    pub record: &'a Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub reason: Option<ReasonCode>,
}

impl Outcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    pub fn fail(reason: ReasonCode) -> Self {
        Self {
            passed: false,
            reason: Some(reason),
        }
    }
}

#[derive(Clone)]
pub enum Check {
    NotEmpty,
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
    Range { min: f64, max: f64 },
    Custom(Predicate),
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::NotEmpty => f.write_str("NotEmpty"),
            Check::MinLength(n) => f.debug_tuple("MinLength").field(n).finish(),
            Check::MaxLength(n) => f.debug_tuple("MaxLength").field(n).finish(),
            Check::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Check::Range { min, max } => f
                .debug_struct("Range")
                .field("min", min)
                .field("max", max)
                .finish(),
            Check::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A single check with its failure reason and short-circuit flag.
///
/// Rules hold no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Rule {
    check: Check,
    reason: ReasonCode,
    short_circuit: bool,
}

impl Rule {
    fn new(check: Check, reason: ReasonCode) -> Self {
        Self {
            check,
            reason,
            short_circuit: false,
        }
    }

    /// Fails on empty or whitespace-only strings.
    pub fn not_empty() -> Self {
        Self::new(Check::NotEmpty, ReasonCode::Required)
    }

    pub fn min_length(min: usize) -> Self {
        Self::new(Check::MinLength(min), ReasonCode::TooShort)
    }

    pub fn max_length(max: usize) -> Self {
        Self::new(Check::MaxLength(max), ReasonCode::TooLong)
    }

    /// Full-match regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] if the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, ConfigurationError> {
        let anchored = format!("^(?:{})$", pattern);
        let re = Regex::new(&anchored).map_err(|source| ConfigurationError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::new(Check::Pattern(re), ReasonCode::PatternMismatch))
    }

    /// Inclusive numeric range. Inverted bounds are rejected when the engine is built.
    pub fn range(min: f64, max: f64) -> Self {
        Self::new(Check::Range { min, max }, ReasonCode::OutOfRange)
    }

    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Value, &RuleContext<'_>) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        Self::new(Check::Custom(Arc::new(predicate)), ReasonCode::PredicateFailed)
    }

    /// Stop evaluating the field's remaining rules when this one fails.
    pub fn short_circuit(mut self) -> Self {
        self.short_circuit = true;
        self
    }

    /// Replaces the reason code reported on an ordinary failure.
    /// `TypeMismatch` and `PredicateError` are not affected.
    pub fn with_reason(mut self, reason: ReasonCode) -> Self {
        self.reason = reason;
        self
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    pub fn reason(&self) -> &ReasonCode {
        &self.reason
    }

    pub fn is_short_circuit(&self) -> bool {
        self.short_circuit
    }

    pub fn evaluate(&self, value: &Value, context: &RuleContext<'_>) -> Outcome {
        match &self.check {
            Check::NotEmpty => self.verdict(!value.is_blank()),
            Check::MinLength(min) => match value.as_str() {
                Some(s) => self.verdict(s.chars().count() >= *min),
                None => Outcome::fail(ReasonCode::TypeMismatch),
            },
            Check::MaxLength(max) => match value.as_str() {
                Some(s) => self.verdict(s.chars().count() <= *max),
                None => Outcome::fail(ReasonCode::TypeMismatch),
            },
            Check::Pattern(re) => match value.as_str() {
                Some(s) => self.verdict(re.is_match(s)),
                None => Outcome::fail(ReasonCode::TypeMismatch),
            },
            Check::Range { min, max } => match value.as_number() {
                // NaN fails both comparisons, so test containment rather than exclusion
                Some(n) => self.verdict(n >= *min && n <= *max),
                None => Outcome::fail(ReasonCode::TypeMismatch),
            },
            Check::Custom(predicate) => {
                match catch_unwind(AssertUnwindSafe(|| predicate(value, context))) {
                    Ok(Ok(passed)) => self.verdict(passed),
                    Ok(Err(_e)) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("Custom predicate on field {} failed: {}", context.field.id, _e);
                        Outcome::fail(ReasonCode::PredicateError)
                    }
                    Err(_) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("Custom predicate on field {} panicked", context.field.id);
                        Outcome::fail(ReasonCode::PredicateError)
                    }
                }
            }
        }
    }

    fn verdict(&self, passed: bool) -> Outcome {
        if passed {
            Outcome::pass()
        } else {
            Outcome::fail(self.reason.clone())
        }
    }
}
