//! Level summarizer: partitions results by level and totals each slice.

use super::{percent, Tally};
use crate::models::{CheckResult, Level, LevelSummary};
use std::collections::BTreeMap;

/// One `LevelSummary` per level, including levels with no checks.
///
/// An empty level scores 0 yet is locally `achieved`: it has no required
/// check to fail and the threshold is skipped. The gate relies on this to
/// let empty levels pass through.
pub fn summarize_levels(results: &[CheckResult]) -> BTreeMap<Level, LevelSummary> {
    let mut tallies: BTreeMap<Level, Tally> =
        Level::ALL.into_iter().map(|l| (l, Tally::default())).collect();
    for r in results {
        tallies.entry(r.level).or_default().add(r);
    }
    tallies
        .into_iter()
        .map(|(level, t)| (level, summary_from(level, &t)))
        .collect()
}

fn summary_from(level: Level, t: &Tally) -> LevelSummary {
    LevelSummary {
        level,
        achieved: t.all_required_pass() && (t.is_empty() || t.meets_threshold()),
        score: percent(t.passed, t.total, 0),
        checks_passed: t.passed,
        checks_total: t.total,
        required_passed: t.required_passed,
        required_total: t.required_total,
    }
}
