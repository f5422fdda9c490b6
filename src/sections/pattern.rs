//! Pattern analysis section - detects repetitive and sequential patterns.

use super::{Finding, SectionInput, SectionResult};
use crate::reason::ReasonCode;

const REPEAT_RUN: usize = 3;
const SEQUENCE_RUN: usize = 4;

/// Looks for runs of identical characters (e.g. "aaa") and runs of
/// consecutive code points in one direction (e.g. "1234", "dcba").
///
/// Only active when the policy sets `reject_patterns`. Each kind of pattern
/// found drops the tier one below the diversity tier.
pub fn pattern_analysis_section(input: &SectionInput<'_>) -> SectionResult {
    if !input.policy.reject_patterns {
        return Vec::new();
    }

    let chars: Vec<char> = input.password.chars().collect();
    let cap = input.base.below();
    let mut findings = Vec::new();

    if has_repeated_run(&chars) {
        findings.push(Finding::new(ReasonCode::RepetitivePattern, cap));
    }
    if has_sequential_run(&chars) {
        findings.push(Finding::new(ReasonCode::SequentialPattern, cap));
    }
    findings
}

fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(REPEAT_RUN).any(|w| w.iter().all(|&c| c == w[0]))
}

fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(SEQUENCE_RUN).any(|w| {
        let step = |a: char, b: char| b as i64 - a as i64;
        let first = step(w[0], w[1]);
        (first == 1 || first == -1) && w.windows(2).all(|p| step(p[0], p[1]) == first)
    })
}
