//! Entropy section - brute-force search space estimate.

use super::{Finding, SectionInput, SectionResult, present_classes};
use crate::policy::CharClass;
use crate::reason::ReasonCode;
use crate::scorer::StrengthTier;

/// Pool credited for characters outside every class, sized like a
/// single-case Latin alphabet.
const UNCLASSIFIED_POOL: u32 = 26;

/// `length * log2(pool)`, where the pool is the combined alphabet of the
/// classes present plus [`UNCLASSIFIED_POOL`] if any character fits no class.
pub fn entropy_bits(password: &str) -> f64 {
    let mut pool: u32 = present_classes(password)
        .into_iter()
        .map(|class| class.pool_size())
        .sum();
    if password.chars().any(CharClass::unclassified) {
        pool += UNCLASSIFIED_POOL;
    }
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

/// Highest estimate any password of `length` chars can reach.
pub fn max_entropy_bits(length: usize) -> f64 {
    let pool: u32 = CharClass::ALL
        .into_iter()
        .map(CharClass::pool_size)
        .sum::<u32>()
        + UNCLASSIFIED_POOL;
    length as f64 * f64::from(pool).log2()
}

/// Caps the tier at `Weak` when the policy sets a minimum the estimate misses.
pub fn entropy_section(input: &SectionInput<'_>) -> SectionResult {
    match input.policy.min_entropy_bits {
        Some(min) if entropy_bits(input.password) < min => {
            vec![Finding::new(ReasonCode::LowEntropy, StrengthTier::Weak)]
        }
        _ => Vec::new(),
    }
}
