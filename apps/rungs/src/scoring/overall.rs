//! Flat top-line score: share of all checks that passed.

use super::percent;
use crate::models::CheckResult;

/// `round(passed / total * 100)` over every result; 0 for an empty list.
/// Ignores levels, pillars, and required flags entirely.
pub fn overall_score(results: &[CheckResult]) -> u32 {
    let passed = results.iter().filter(|r| r.passed).count();
    percent(passed, results.len(), 0)
}
