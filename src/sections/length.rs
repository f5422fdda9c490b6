//! Length section - checks password length against policy bounds.

use super::{Finding, SectionInput, SectionResult};
use crate::reason::ReasonCode;
use crate::scorer::StrengthTier;

/// Checks the password length against `min_length..=max_length`.
///
/// An empty password is always too short, whatever the policy minimum.
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    let policy = input.policy;
    if input.length == 0 || input.length < policy.min_length {
        return vec![Finding::new(ReasonCode::TooShort, StrengthTier::Unacceptable)];
    }
    if input.length > policy.max_length {
        return vec![Finding::new(ReasonCode::TooLong, StrengthTier::Unacceptable)];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PasswordPolicy;
    use crate::sections::input;

    #[test]
    fn test_length_section_too_short() {
        let policy = PasswordPolicy::new().min_length(8);
        let result = length_section(&input("Short1!", &policy));
        assert_eq!(
            result,
            vec![Finding::new(ReasonCode::TooShort, StrengthTier::Unacceptable)]
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let policy = PasswordPolicy::new().min_length(8);
        assert!(length_section(&input("12345678", &policy)).is_empty());
    }

    #[test]
    fn test_length_section_too_long() {
        let policy = PasswordPolicy::new().min_length(1).max_length(4);
        let result = length_section(&input("abcde", &policy));
        assert_eq!(result[0].reason, ReasonCode::TooLong);
    }

    #[test]
    fn test_length_section_counts_chars() {
        let policy = PasswordPolicy::new().min_length(1).max_length(4);
        assert!(length_section(&input("ñçüé", &policy)).is_empty());
    }

    #[test]
    fn test_length_section_empty_with_zero_minimum() {
        let policy = PasswordPolicy::new().min_length(0);
        let result = length_section(&input("", &policy));
        assert_eq!(result[0].reason, ReasonCode::TooShort);
    }
}
