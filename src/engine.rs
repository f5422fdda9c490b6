//! Validation engine: runs rule sets over a record and scores password fields.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

use crate::error::ConfigurationError;
use crate::field::Field;
use crate::policy::PasswordPolicy;
use crate::reason::ReasonCode;
use crate::result::ValidationResult;
use crate::rule::{Check, RuleContext};
use crate::rule_set::RuleSet;
use crate::scorer::{PasswordStrengthScorer, StrengthScore, StrengthScorer};
use crate::value::{EMPTY, Record, Value};

struct FieldEntry {
    field: Field,
    rules: RuleSet,
}

/// Immutable validation engine.
///
/// All configuration is checked by [`EngineBuilder::build`]; `validate` never
/// fails and takes `&self`, so one engine can serve any number of threads.
/// To reconfigure, build a new engine and swap it in (see
/// [`ValidationWorker`](crate::ValidationWorker)).
pub struct ValidationEngine {
    fields: BTreeMap<String, FieldEntry>,
    policy: PasswordPolicy,
    scorer: Arc<dyn StrengthScorer>,
}

impl fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl ValidationEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.get(id).map(|entry| &entry.field)
    }

    /// Validates every declared field of `record`.
    ///
    /// Fields missing from the record are checked as empty values (or
    /// reported `Required`), for rules and scoring alike. Record keys with no
    /// field definition are ignored. Password fields whose rule set passed are
    /// scored; a tier below the policy minimum adds `WeakPassword`.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut failures = BTreeMap::new();
        let mut strengths = BTreeMap::new();

        for (id, entry) in &self.fields {
            let context = RuleContext {
                field: &entry.field,
                record,
            };
            let value = record.get(id);
            let mut reasons = entry.rules.evaluate_field(value, &context);

            if reasons.is_empty() && entry.field.is_password() {
                match self.score(value.unwrap_or(&EMPTY)) {
                    Some(score) => {
                        if !score.meets(&self.policy) {
                            reasons.push(ReasonCode::WeakPassword);
                        }
                        strengths.insert(id.clone(), score);
                    }
                    None => reasons.push(ReasonCode::TypeMismatch),
                }
            }

            if !reasons.is_empty() {
                failures.insert(id.clone(), reasons);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Validation finished: {} failing fields", failures.len());

        ValidationResult::new(failures, strengths)
    }

    fn score(&self, value: &Value) -> Option<StrengthScore> {
        match value {
            Value::Secret(secret) => Some(self.scorer.score(secret, &self.policy)),
            Value::Text(text) => {
                let secret = SecretString::new(text.clone().into_boxed_str());
                Some(self.scorer.score(&secret, &self.policy))
            }
            Value::Number(_) => None,
        }
    }
}

/// Collects fields, rule sets, the policy and the scorer, then checks them.
pub struct EngineBuilder {
    fields: Vec<Field>,
    rule_sets: Vec<RuleSet>,
    policy: PasswordPolicy,
    scorer: Arc<dyn StrengthScorer>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            rule_sets: Vec::new(),
            policy: PasswordPolicy::default(),
            scorer: Arc::new(PasswordStrengthScorer),
        }
    }
}

impl EngineBuilder {
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn rule_set(mut self, rule_set: RuleSet) -> Self {
        self.rule_sets.push(rule_set);
        self
    }

    pub fn policy(mut self, policy: PasswordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the default [`PasswordStrengthScorer`].
    pub fn scorer(mut self, scorer: impl StrengthScorer + 'static) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    pub fn shared_scorer(mut self, scorer: Arc<dyn StrengthScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for duplicate fields or rule sets, rule
    /// sets on undeclared fields, inverted or NaN ranges, conflicting
    /// length bounds and unsatisfiable password policies.
    pub fn build(self) -> Result<ValidationEngine, ConfigurationError> {
        let result = self.assemble();

        #[cfg(feature = "tracing")]
        match &result {
            Ok(engine) => tracing::info!("Validation engine built: {} fields", engine.fields.len()),
            Err(e) => tracing::error!("Validation engine rejected: {}", e),
        }

        result
    }

    fn assemble(self) -> Result<ValidationEngine, ConfigurationError> {
        self.policy.check()?;

        let mut fields: BTreeMap<String, FieldEntry> = BTreeMap::new();
        for field in self.fields {
            if fields.contains_key(&field.id) {
                return Err(ConfigurationError::DuplicateField(field.id));
            }
            let rules = RuleSet::new(field.id.clone());
            fields.insert(field.id.clone(), FieldEntry { field, rules });
        }

        let mut bound: Vec<String> = Vec::new();
        for rule_set in self.rule_sets {
            let id = rule_set.field().to_string();
            check_rule_set(&rule_set)?;
            let entry = fields
                .get_mut(&id)
                .ok_or_else(|| ConfigurationError::UndeclaredField(id.clone()))?;
            if bound.contains(&id) {
                return Err(ConfigurationError::DuplicateRuleSet(id));
            }
            entry.rules = rule_set;
            bound.push(id);
        }

        Ok(ValidationEngine {
            fields,
            policy: self.policy,
            scorer: self.scorer,
        })
    }
}

fn check_rule_set(rule_set: &RuleSet) -> Result<(), ConfigurationError> {
    let field = rule_set.field();
    for rule in rule_set.rules() {
        if let Check::Range { min, max } = rule.check() {
            if min.is_nan() || max.is_nan() {
                return Err(ConfigurationError::NanRangeBound(field.to_string()));
            }
            if min > max {
                return Err(ConfigurationError::InvertedRange {
                    field: field.to_string(),
                    min: *min,
                    max: *max,
                });
            }
        }
    }
    if let Some((min, max)) = rule_set.inverted_length() {
        return Err(ConfigurationError::InvertedLength {
            field: field.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CharClass;
    use crate::rule::Rule;
    use crate::scorer::StrengthTier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const EMAIL: &str = r"[^@\s]+@[^@\s]+\.[^@\s]+";

    fn scenario_policy() -> PasswordPolicy {
        PasswordPolicy::new()
            .min_length(8)
            .require(CharClass::Lowercase)
            .require(CharClass::Digit)
            .ban("password1")
    }

    fn signup_engine(policy: PasswordPolicy) -> ValidationEngine {
        ValidationEngine::builder()
            .field(Field::text("email").required())
            .field(Field::password("password").required())
            .field(Field::number("age"))
            .rule_set(
                RuleSet::new("email")
                    .rule(Rule::not_empty().short_circuit())
                    .rule(Rule::pattern(EMAIL).unwrap()),
            )
            .rule_set(RuleSet::new("password").rule(Rule::not_empty()))
            .rule_set(RuleSet::new("age").rule(Rule::range(13.0, 130.0)))
            .policy(policy)
            .build()
            .expect("valid configuration")
    }

    fn signup(email: &str, password: &str) -> Record {
        Record::new()
            .with("email", Value::text(email))
            .with("password", Value::secret(password))
            .with("age", Value::number(30.0))
    }

    #[test]
    fn test_valid_record() {
        let engine = signup_engine(scenario_policy());
        let result = engine.validate(&signup("ada@example.com", "abcd1234"));
        assert!(result.is_valid(), "{:?}", result);
        assert_eq!(
            result.strength("password").map(|s| s.tier),
            Some(StrengthTier::Fair)
        );
    }

    #[test]
    fn test_weak_password_against_stricter_tier() {
        let engine = signup_engine(scenario_policy().min_tier(StrengthTier::Good));
        let result = engine.validate(&signup("ada@example.com", "abcd1234"));
        assert!(!result.is_valid());
        assert_eq!(result.field_failures("password"), &[ReasonCode::WeakPassword]);
        assert_eq!(
            result.strength("password").map(|s| s.tier),
            Some(StrengthTier::Fair)
        );
    }

    #[test]
    fn test_banned_password() {
        let engine = signup_engine(scenario_policy());
        let result = engine.validate(&signup("ada@example.com", "password1"));
        assert_eq!(result.field_failures("password"), &[ReasonCode::WeakPassword]);
        let score = result.strength("password").expect("scored");
        assert_eq!(score.tier, StrengthTier::Unacceptable);
        assert_eq!(score.reasons, vec![ReasonCode::BannedValue]);
    }

    #[test]
    fn test_missing_required_email() {
        let engine = signup_engine(scenario_policy());
        let record = Record::new()
            .with("password", Value::secret("abcd1234"))
            .with("age", Value::number(30.0));
        let result = engine.validate(&record);
        assert!(!result.is_valid());
        assert_eq!(result.field_failures("email"), &[ReasonCode::Required]);
        assert_eq!(result.failures().len(), 1);
    }

    #[test]
    fn test_failed_password_rules_skip_scoring() {
        let engine = signup_engine(scenario_policy());
        let result = engine.validate(&signup("ada@example.com", "   "));
        assert_eq!(result.field_failures("password"), &[ReasonCode::Required]);
        assert!(result.strength("password").is_none());
    }

    #[test]
    fn test_optional_absent_password_is_scored_as_empty() {
        let engine = ValidationEngine::builder()
            .field(Field::password("new_password"))
            .build()
            .unwrap();
        let result = engine.validate(&Record::new());
        assert_eq!(result.field_failures("new_password"), &[ReasonCode::WeakPassword]);
        let score = result.strength("new_password").expect("scored");
        assert_eq!(score.tier, StrengthTier::Unacceptable);
        assert_eq!(score.reasons, vec![ReasonCode::TooShort]);
    }

    #[test]
    fn test_absent_optional_fields_all_checked_as_empty() {
        let engine = ValidationEngine::builder()
            .field(Field::number("age"))
            .field(Field::password("pw"))
            .rule_set(RuleSet::new("age").rule(Rule::range(0.0, 10.0)))
            .build()
            .unwrap();
        let result = engine.validate(&Record::new());
        assert_eq!(result.field_failures("age"), &[ReasonCode::TypeMismatch]);
        assert_eq!(result.field_failures("pw"), &[ReasonCode::WeakPassword]);
        assert_eq!(result.strengths().len(), 1);
    }

    #[test]
    fn test_required_blank_password_is_not_scored() {
        let engine = ValidationEngine::builder()
            .field(Field::password("pw").required())
            .build()
            .unwrap();
        let result = engine.validate(&Record::new().with("pw", Value::secret("")));
        assert_eq!(result.field_failures("pw"), &[ReasonCode::Required]);
        assert!(result.strengths().is_empty());
    }

    #[test]
    fn test_numeric_password_is_type_mismatch() {
        let engine = ValidationEngine::builder()
            .field(Field::password("pin"))
            .build()
            .unwrap();
        let result = engine.validate(&Record::new().with("pin", Value::number(1234.0)));
        assert_eq!(result.field_failures("pin"), &[ReasonCode::TypeMismatch]);
    }

    #[test]
    fn test_text_password_is_scored() {
        let engine = signup_engine(scenario_policy());
        let record = signup("ada@example.com", "").with("password", Value::text("abcd1234"));
        let result = engine.validate(&record);
        assert!(result.is_valid(), "{:?}", result);
        assert!(result.strength("password").is_some());
    }

    #[test]
    fn test_unreferenced_record_keys_are_ignored() {
        let engine = signup_engine(scenario_policy());
        let record = signup("ada@example.com", "abcd1234").with("nickname", Value::number(1.0));
        let result = engine.validate(&record);
        assert!(result.is_valid());
        assert!(result.field_failures("nickname").is_empty());
    }

    #[test]
    fn test_range_failure_reported() {
        let engine = signup_engine(scenario_policy());
        let record = signup("ada@example.com", "abcd1234").with("age", Value::number(7.0));
        let result = engine.validate(&record);
        assert_eq!(result.field_failures("age"), &[ReasonCode::OutOfRange]);
        assert_eq!(result.failures().len(), 1);
    }

    #[test]
    fn test_validity_matches_failure_lists() {
        let engine = signup_engine(scenario_policy());
        let records = [
            signup("ada@example.com", "abcd1234"),
            signup("not-an-email", "abcd1234"),
            signup("ada@example.com", "short"),
            Record::new(),
        ];
        for record in &records {
            let result = engine.validate(record);
            assert_eq!(
                result.is_valid(),
                result.failures().values().all(|r| r.is_empty())
            );
            assert!(result.failures().values().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn test_confirmation_rule_across_fields() {
        let engine = ValidationEngine::builder()
            .field(Field::password("password").required())
            .field(Field::password("confirm").required())
            .rule_set(RuleSet::new("confirm").rule(
                Rule::custom(|v, ctx| {
                    Ok(ctx.record.get("password").and_then(Value::as_str) == v.as_str())
                })
                .with_reason(ReasonCode::custom("Mismatch")),
            ))
            .build()
            .unwrap();
        let record = Record::new()
            .with("password", Value::secret("Abcdef12!"))
            .with("confirm", Value::secret("Abcdef12?"));
        let result = engine.validate(&record);
        assert_eq!(
            result.field_failures("confirm"),
            &[ReasonCode::custom("Mismatch")]
        );
        assert!(result.field_failures("password").is_empty());
    }

    #[test]
    fn test_undeclared_field_rejected() {
        let result = ValidationEngine::builder()
            .field(Field::text("email"))
            .rule_set(RuleSet::new("phoneNumber").rule(Rule::not_empty()))
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::UndeclaredField(ref f)) if f == "phoneNumber"
        ));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = ValidationEngine::builder()
            .field(Field::text("email"))
            .field(Field::text("email"))
            .build();
        assert!(matches!(result, Err(ConfigurationError::DuplicateField(_))));
    }

    #[test]
    fn test_duplicate_rule_set_rejected() {
        let result = ValidationEngine::builder()
            .field(Field::text("email"))
            .rule_set(RuleSet::new("email"))
            .rule_set(RuleSet::new("email"))
            .build();
        assert!(matches!(result, Err(ConfigurationError::DuplicateRuleSet(_))));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = ValidationEngine::builder()
            .field(Field::number("age"))
            .rule_set(RuleSet::new("age").rule(Rule::range(10.0, 1.0)))
            .build();
        assert!(matches!(result, Err(ConfigurationError::InvertedRange { .. })));
    }

    #[test]
    fn test_nan_range_rejected() {
        let result = ValidationEngine::builder()
            .field(Field::number("age"))
            .rule_set(RuleSet::new("age").rule(Rule::range(f64::NAN, 1.0)))
            .build();
        assert!(matches!(result, Err(ConfigurationError::NanRangeBound(_))));
    }

    #[test]
    fn test_half_open_range_allowed() {
        let engine = ValidationEngine::builder()
            .field(Field::number("score"))
            .rule_set(RuleSet::new("score").rule(Rule::range(0.0, f64::INFINITY)))
            .build()
            .unwrap();
        let result = engine.validate(&Record::new().with("score", Value::number(1e300)));
        assert!(result.is_valid());
    }

    #[test]
    fn test_inverted_length_rejected() {
        let result = ValidationEngine::builder()
            .field(Field::text("code"))
            .rule_set(
                RuleSet::new("code")
                    .rule(Rule::min_length(10))
                    .rule(Rule::max_length(5)),
            )
            .build();
        assert!(matches!(result, Err(ConfigurationError::InvertedLength { .. })));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result = ValidationEngine::builder()
            .policy(PasswordPolicy::new().min_length(10).max_length(4))
            .build();
        assert!(matches!(result, Err(ConfigurationError::InvalidPolicy(_))));
    }

    struct FixedScorer {
        calls: AtomicUsize,
    }

    impl StrengthScorer for FixedScorer {
        fn score(&self, _password: &SecretString, _policy: &PasswordPolicy) -> StrengthScore {
            self.calls.fetch_add(1, Ordering::SeqCst);
            StrengthScore {
                tier: StrengthTier::Strong,
                reasons: Vec::new(),
                entropy_bits: 0.0,
            }
        }
    }

    #[test]
    fn test_injected_scorer_is_used() {
        let scorer = Arc::new(FixedScorer {
            calls: AtomicUsize::new(0),
        });
        let engine = ValidationEngine::builder()
            .field(Field::password("password"))
            .policy(scenario_policy())
            .shared_scorer(scorer.clone())
            .build()
            .unwrap();
        let result = engine.validate(&Record::new().with("password", Value::secret("password1")));
        assert!(result.is_valid());
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_validation_matches_sequential() {
        let engine = signup_engine(scenario_policy());
        let first = signup("ada@example.com", "abcd1234");
        let second = signup("bad email", "password1");
        let expected_first = engine.validate(&first);
        let expected_second = engine.validate(&second);

        std::thread::scope(|s| {
            let a = s.spawn(|| (0..200).map(|_| engine.validate(&first)).collect::<Vec<_>>());
            let b = s.spawn(|| (0..200).map(|_| engine.validate(&second)).collect::<Vec<_>>());
            for result in a.join().unwrap() {
                assert_eq!(result, expected_first);
            }
            for result in b.join().unwrap() {
                assert_eq!(result, expected_second);
            }
        });
        assert!(expected_first.is_valid());
        assert!(!expected_second.is_valid());
    }
}
