//! Ordered rules bound to one field.

use crate::reason::ReasonCode;
use crate::rule::{Check, Rule, RuleContext};
use crate::value::{EMPTY, Value};

#[derive(Debug, Clone)]
pub struct RuleSet {
    field: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs the rules in declaration order and returns the failure reasons.
    ///
    /// An absent or blank value on a required field yields `[Required]`
    /// without running any rule. Otherwise an absent value is checked as an
    /// empty string. A failing short-circuit rule stops the iteration.
    pub fn evaluate_field(&self, value: Option<&Value>, context: &RuleContext<'_>) -> Vec<ReasonCode> {
        let value = value.unwrap_or(&EMPTY);
        if context.field.required && value.is_blank() {
            return vec![ReasonCode::Required];
        }

        let mut reasons = Vec::new();
        for rule in &self.rules {
            let outcome = rule.evaluate(value, context);
            if outcome.passed {
                continue;
            }
            if let Some(reason) = outcome.reason {
                reasons.push(reason);
            }
            if rule.is_short_circuit() {
                break;
            }
        }
        reasons
    }

    /// Largest `MinLength` and smallest `MaxLength`, when they conflict.
    pub(crate) fn inverted_length(&self) -> Option<(usize, usize)> {
        let min = self
            .rules
            .iter()
            .filter_map(|r| match r.check() {
                Check::MinLength(n) => Some(*n),
                _ => None,
            })
            .max()?;
        let max = self
            .rules
            .iter()
            .filter_map(|r| match r.check() {
                Check::MaxLength(n) => Some(*n),
                _ => None,
            })
            .min()?;
        (min > max).then_some((min, max))
    }
}
