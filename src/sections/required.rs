//! Required classes section - checks for character classes the policy demands.

use super::{Finding, SectionInput, SectionResult};
use crate::reason::ReasonCode;

/// Reports every required class missing from the password.
///
/// Each missing class caps the tier one below the policy's minimum tier, so
/// a password lacking a required class never meets the policy.
pub fn required_classes_section(input: &SectionInput<'_>) -> SectionResult {
    let cap = input.policy.min_tier.below();
    input
        .policy
        .required_classes
        .iter()
        .filter(|class| !input.password.chars().any(|c| class.matches(c)))
        .map(|class| Finding::new(ReasonCode::MissingRequiredClass(*class), cap))
        .collect()
}
