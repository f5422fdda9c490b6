//! Outcome of one `validate` call.

use std::collections::BTreeMap;

use crate::reason::ReasonCode;
use crate::scorer::StrengthScore;

/// Immutable validation outcome, owned by the caller.
///
/// Only failing fields appear in [`failures`](Self::failures); a field absent
/// from the map passed (or was not validated).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    failures: BTreeMap<String, Vec<ReasonCode>>,
    strengths: BTreeMap<String, StrengthScore>,
}

impl ValidationResult {
    pub(crate) fn new(
        failures: BTreeMap<String, Vec<ReasonCode>>,
        strengths: BTreeMap<String, StrengthScore>,
    ) -> Self {
        Self {
            failures,
            strengths,
        }
    }

    /// True iff no field reported a failure.
    pub fn is_valid(&self) -> bool {
        self.failures.values().all(Vec::is_empty)
    }

    pub fn failures(&self) -> &BTreeMap<String, Vec<ReasonCode>> {
        &self.failures
    }

    /// Reason codes for one field; empty if the field passed.
    pub fn field_failures(&self, field: &str) -> &[ReasonCode] {
        self.failures.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Strength score of a password field that was scored.
    pub fn strength(&self, field: &str) -> Option<&StrengthScore> {
        self.strengths.get(field)
    }

    pub fn strengths(&self) -> &BTreeMap<String, StrengthScore> {
        &self.strengths
    }

    /// Lowest-tier score among the scored password fields.
    pub fn weakest_strength(&self) -> Option<&StrengthScore> {
        self.strengths.values().min_by_key(|s| s.tier)
    }
}
