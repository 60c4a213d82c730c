//! Scoring and level-gating engine.
//!
//! Pure functions over a fully materialized `CheckResult` list:
//! - `levels`: per-level totals and local pass flag.
//! - `gate`: sequential walk to the single achieved level, plus progress.
//! - `pillars`: per-pillar totals and a pillar-scoped gate walk.
//! - `overall`: flat pass rate across everything.
//! - `actions`: failed checks ranked by what blocks progress.
//!
//! Nothing here performs I/O or holds state; the same input always yields
//! the same `ScanResult`.

pub mod actions;
pub mod gate;
pub mod levels;
pub mod overall;
pub mod pillars;

use crate::models::profile::Remediation;
use crate::models::taxonomy::THRESHOLD_PERCENT;
use crate::models::{CheckResult, LevelSummary, ScanResult};
use std::collections::HashMap;

/// Pass/required counters for one slice of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub passed: usize,
    pub total: usize,
    pub required_passed: usize,
    pub required_total: usize,
}

impl Tally {
    pub fn add(&mut self, r: &CheckResult) {
        self.total += 1;
        if r.passed {
            self.passed += 1;
        }
        if r.required {
            self.required_total += 1;
            if r.passed {
                self.required_passed += 1;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn all_required_pass(&self) -> bool {
        self.required_passed == self.required_total
    }

    /// `passed / total >= 0.80`, exact in integers; vacuously true when empty.
    pub fn meets_threshold(&self) -> bool {
        self.passed * 100 >= self.total * THRESHOLD_PERCENT
    }
}

impl From<&LevelSummary> for Tally {
    fn from(s: &LevelSummary) -> Self {
        Tally {
            passed: s.checks_passed,
            total: s.checks_total,
            required_passed: s.required_passed,
            required_total: s.required_total,
        }
    }
}

/// `round(passed / total * 100)`, or `empty` when there is nothing to count.
pub(crate) fn percent(passed: usize, total: usize, empty: u32) -> u32 {
    if total == 0 {
        return empty;
    }
    (passed as f64 / total as f64 * 100.0).round() as u32
}

/// Run every engine stage and assemble the aggregate root.
pub fn evaluate(
    results: Vec<CheckResult>,
    remediations: &HashMap<String, Remediation>,
) -> ScanResult {
    let levels = levels::summarize_levels(&results);
    let level_achieved = gate::achieved_level(&levels);
    let progress_to_next = gate::progress_to_next(&levels, level_achieved);
    let pillars = pillars::summarize_pillars(&results);
    let overall_score = overall::overall_score(&results);
    let failed_checks: Vec<CheckResult> = results.iter().filter(|r| !r.passed).cloned().collect();
    let action_items = actions::rank_actions(&failed_checks, level_achieved, remediations);
    ScanResult {
        level_achieved,
        overall_score,
        progress_to_next,
        levels,
        pillars,
        check_results: results,
        failed_checks,
        action_items,
    }
}
