//! Banned section - checks the password against the policy's denylist.

use super::{Finding, SectionInput, SectionResult};
use crate::reason::ReasonCode;
use crate::scorer::StrengthTier;

/// Forces tier 0 on an exact (case-sensitive) denylist match.
pub fn banned_section(input: &SectionInput<'_>) -> SectionResult {
    if input.policy.banned_values.contains(input.password) {
        return vec![Finding::new(ReasonCode::BannedValue, StrengthTier::Unacceptable)];
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PasswordPolicy;
    use crate::sections::input;

    #[test]
    fn test_banned_section_match() {
        let policy = PasswordPolicy::new().ban("password1").ban("qwerty");
        let result = banned_section(&input("password1", &policy));
        assert_eq!(
            result,
            vec![Finding::new(ReasonCode::BannedValue, StrengthTier::Unacceptable)]
        );
    }

    #[test]
    fn test_banned_section_case_sensitive() {
        let policy = PasswordPolicy::new().ban("password1");
        assert!(banned_section(&input("Password1", &policy)).is_empty());
    }

    #[test]
    fn test_banned_section_empty_list() {
        let policy = PasswordPolicy::new();
        assert!(banned_section(&input("CorrectHorseBatteryStaple!123", &policy)).is_empty());
    }
}
