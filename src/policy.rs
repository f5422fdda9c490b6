//! Password policy configuration.

use std::collections::BTreeSet;
use std::fmt;

use crate::banned::BannedValues;
use crate::error::ConfigurationError;
use crate::scorer::StrengthTier;
use crate::sections::max_entropy_bits;

/// Character classes counted for diversity and required by policy.
///
/// Ordered so that reason codes for missing classes come out in a stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Digit => c.is_numeric(),
            CharClass::Symbol => !c.is_alphanumeric(),
        }
    }

    /// True for characters no class matches, such as caseless letters (CJK).
    pub fn unclassified(c: char) -> bool {
        !CharClass::ALL.iter().any(|class| class.matches(c))
    }

    /// Alphabet size used by the entropy estimate.
    pub fn pool_size(self) -> u32 {
        match self {
            CharClass::Lowercase | CharClass::Uppercase => 26,
            CharClass::Digit => 10,
            CharClass::Symbol => 33,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digit",
            CharClass::Symbol => "symbol",
        })
    }
}

/// Password policy.
///
/// The default policy requires 8 to 128 characters and a minimum tier of
/// [`StrengthTier::Fair`], with no required classes and no banned values.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub required_classes: BTreeSet<CharClass>,
    pub banned_values: BannedValues,
    pub min_tier: StrengthTier,
    /// When set, passwords below this estimate are capped at [`StrengthTier::Weak`].
    pub min_entropy_bits: Option<f64>,
    /// Penalize repeated and sequential runs of characters.
    pub reject_patterns: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            required_classes: BTreeSet::new(),
            banned_values: BannedValues::default(),
            min_tier: StrengthTier::Fair,
            min_entropy_bits: None,
            reject_patterns: false,
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = min;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = max;
        self
    }

    pub fn require(mut self, class: CharClass) -> Self {
        self.required_classes.insert(class);
        self
    }

    pub fn banned_values(mut self, banned: BannedValues) -> Self {
        self.banned_values = banned;
        self
    }

    pub fn ban(mut self, value: impl Into<String>) -> Self {
        self.banned_values.insert(value);
        self
    }

    pub fn min_tier(mut self, tier: StrengthTier) -> Self {
        self.min_tier = tier;
        self
    }

    pub fn min_entropy_bits(mut self, bits: f64) -> Self {
        self.min_entropy_bits = Some(bits);
        self
    }

    pub fn reject_patterns(mut self, reject: bool) -> Self {
        self.reject_patterns = reject;
        self
    }

    /// Rejects policies no password could ever satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPolicy`] if the length bounds are
    /// inverted, if `max_length` leaves no room for the characters the
    /// minimum tier or the required classes need, or if the entropy bound is
    /// not a finite non-negative number or, with a minimum tier above `Weak`,
    /// out of reach of any `max_length` password.
    pub fn check(&self) -> Result<(), ConfigurationError> {
        if self.min_length > self.max_length {
            return Err(ConfigurationError::InvalidPolicy(format!(
                "min_length {} > max_length {}",
                self.min_length, self.max_length
            )));
        }

        // Tier N needs N classes (tier 1 needs one non-empty char)
        let tier_chars = self.min_tier.value() as usize;
        if tier_chars > self.max_length {
            return Err(ConfigurationError::InvalidPolicy(format!(
                "min_tier {:?} unreachable with max_length {}",
                self.min_tier, self.max_length
            )));
        }

        if self.min_tier > StrengthTier::Unacceptable
            && self.required_classes.len() > self.max_length
        {
            return Err(ConfigurationError::InvalidPolicy(format!(
                "{} required classes cannot fit in max_length {}",
                self.required_classes.len(),
                self.max_length
            )));
        }

        if let Some(bits) = self.min_entropy_bits {
            if !bits.is_finite() || bits < 0.0 {
                return Err(ConfigurationError::InvalidPolicy(format!(
                    "min_entropy_bits must be finite and non-negative, got {}",
                    bits
                )));
            }
            if self.min_tier > StrengthTier::Weak && bits > max_entropy_bits(self.max_length) {
                return Err(ConfigurationError::InvalidPolicy(format!(
                    "min_entropy_bits {} unreachable with max_length {}",
                    bits, self.max_length
                )));
            }
        }

        Ok(())
    }
}
