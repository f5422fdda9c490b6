//! Password scoring sections
//!
//! Each section checks one aspect of a password against the policy and
//! reports findings. A finding caps the final tier; the scorer takes the
//! minimum of the diversity tier and every cap.

mod banned;
mod entropy;
mod length;
mod pattern;
mod required;
mod variety;

pub use banned::banned_section;
pub use entropy::{entropy_bits, entropy_section, max_entropy_bits};
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use required::required_classes_section;
pub use variety::{diversity_tier, present_classes};

use crate::policy::PasswordPolicy;
use crate::reason::ReasonCode;
use crate::scorer::StrengthTier;

/// What every section gets to look at.
pub struct SectionInput<'a> {
    pub password: &'a str,
    /// Length in chars.
    pub length: usize,
    pub policy: &'a PasswordPolicy,
    /// Tier from character-class diversity alone.
    pub base: StrengthTier,
}

/// A violation and the highest tier it still allows.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub reason: ReasonCode,
    pub cap: StrengthTier,
}

impl Finding {
    pub fn new(reason: ReasonCode, cap: StrengthTier) -> Self {
        Self { reason, cap }
    }
}

/// Result type for section functions. Empty means the section passed.
pub type SectionResult = Vec<Finding>;

#[cfg(test)]
pub(crate) fn input<'a>(password: &'a str, policy: &'a PasswordPolicy) -> SectionInput<'a> {
    SectionInput {
        password,
        length: password.chars().count(),
        policy,
        base: diversity_tier(password),
    }
}
