//! Character variety section - counts lowercase, uppercase, digit and symbol classes.

use crate::policy::CharClass;
use crate::scorer::StrengthTier;

/// Classes present in the password, in [`CharClass::ALL`] order.
pub fn present_classes(password: &str) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.matches(c)))
        .collect()
}

/// Base tier from class diversity: 0-1 classes is tier 1, then one tier per class.
pub fn diversity_tier(password: &str) -> StrengthTier {
    StrengthTier::from_class_count(present_classes(password).len())
}
