//! Field validation engine with password strength scoring
//!
//! This library validates records of named fields against ordered rule sets
//! and scores password fields against a configurable policy.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `VALIDATION_BANNED_VALUES_PATH`: Custom path to the banned values file
//!   (default: `./assets/banned-values.txt`)
//!
//! # Example
//!
//! ```rust
//! use validation_worker::{
//!     CharClass, Field, PasswordPolicy, Record, ReasonCode, Rule, RuleSet, ValidationEngine,
//!     Value,
//! };
//!
//! let engine = ValidationEngine::builder()
//!     .field(Field::text("email").required())
//!     .field(Field::password("password").required())
//!     .rule_set(
//!         RuleSet::new("email")
//!             .rule(Rule::not_empty().short_circuit())
//!             .rule(Rule::pattern(r"[^@\s]+@[^@\s]+\.[^@\s]+")?),
//!     )
//!     .policy(
//!         PasswordPolicy::new()
//!             .min_length(8)
//!             .require(CharClass::Digit)
//!             .ban("password1"),
//!     )
//!     .build()?;
//!
//! let record = Record::new()
//!     .with("email", Value::text("ada@example.com"))
//!     .with("password", Value::secret("password1"));
//!
//! let result = engine.validate(&record);
//! assert!(!result.is_valid());
//! assert_eq!(result.field_failures("password"), &[ReasonCode::WeakPassword]);
//! # Ok::<(), validation_worker::ConfigurationError>(())
//! ```

// Internal modules
mod banned;
mod engine;
mod error;
mod field;
mod policy;
mod reason;
mod result;
mod rule;
mod rule_set;
mod scorer;
mod sections;
mod value;
mod worker;

// Public API
pub use banned::{
    BannedListError, BannedValues, banned_values_path, load_banned_values,
    load_banned_values_from_path,
};
pub use engine::{EngineBuilder, ValidationEngine};
pub use error::ConfigurationError;
pub use field::{Field, FieldKind};
pub use policy::{CharClass, PasswordPolicy};
pub use reason::ReasonCode;
pub use result::ValidationResult;
pub use rule::{BoxError, Check, Outcome, Predicate, Rule, RuleContext};
pub use rule_set::RuleSet;
pub use scorer::{PasswordStrengthScorer, StrengthScore, StrengthScorer, StrengthTier};
pub use value::{Record, Value};
pub use worker::ValidationWorker;
