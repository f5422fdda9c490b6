//! Password strength scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;
use crate::reason::ReasonCode;
use crate::sections::{
    SectionInput, SectionResult, banned_section, diversity_tier, entropy_bits, entropy_section,
    length_section, pattern_analysis_section, required_classes_section,
};

/// Graded strength, 0 (unacceptable) to 4 (strong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthTier {
    Unacceptable = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
}

impl StrengthTier {
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Values above 4 clamp to `Strong`.
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => StrengthTier::Unacceptable,
            1 => StrengthTier::Weak,
            2 => StrengthTier::Fair,
            3 => StrengthTier::Good,
            _ => StrengthTier::Strong,
        }
    }

    /// 0 or 1 classes map to `Weak`, then one tier per class.
    pub fn from_class_count(count: usize) -> Self {
        Self::from_value(count.clamp(1, 4) as u8)
    }

    /// One tier lower, saturating at `Unacceptable`.
    pub fn below(self) -> Self {
        Self::from_value(self.value().saturating_sub(1))
    }
}

/// Outcome of scoring one password.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthScore {
    pub tier: StrengthTier,
    /// Violations that lowered the tier, in section order.
    pub reasons: Vec<ReasonCode>,
    pub entropy_bits: f64,
}

impl StrengthScore {
    pub fn value(&self) -> u8 {
        self.tier.value()
    }

    pub fn meets(&self, policy: &PasswordPolicy) -> bool {
        self.tier >= policy.min_tier
    }
}

/// Strength-scoring capability the engine delegates password fields to.
///
/// Implementations must be deterministic: identical inputs give identical scores.
pub trait StrengthScorer: Send + Sync {
    fn score(&self, password: &SecretString, policy: &PasswordPolicy) -> StrengthScore;
}

/// Default scorer: diversity tier, capped by length, denylist, required
/// classes, entropy and pattern findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordStrengthScorer;

impl PasswordStrengthScorer {
    pub fn new() -> Self {
        Self
    }
}

impl StrengthScorer for PasswordStrengthScorer {
    fn score(&self, password: &SecretString, policy: &PasswordPolicy) -> StrengthScore {
        let pwd = password.expose_secret();
        let input = SectionInput {
            password: pwd,
            length: pwd.chars().count(),
            policy,
            base: diversity_tier(pwd),
        };

        // Orchestrator: execute sections in sequence
        let sections: [(&str, fn(&SectionInput<'_>) -> SectionResult); 5] = [
            ("length", length_section),
            ("banned", banned_section),
            ("required", required_classes_section),
            ("entropy", entropy_section),
            ("pattern", pattern_analysis_section),
        ];

        let mut tier = input.base;
        let mut reasons = Vec::new();
        for (_section_name, section_fn) in sections {
            for finding in section_fn(&input) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Section {} reported {}", _section_name, finding.reason);
                tier = tier.min(finding.cap);
                reasons.push(finding.reason);
            }
        }

        StrengthScore {
            tier,
            reasons,
            entropy_bits: entropy_bits(pwd),
        }
    }
}
