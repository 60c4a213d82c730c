//! Level gate: collapses per-level tallies into one achieved level.
//!
//! The walk is strictly sequential `L1 -> L5` and stops at the first level
//! that fails, so a level is only ever achieved on top of every level below
//! it. Two threshold rules share the walk:
//!
//! - `CurrentLevel`: level N needs 80% of its own checks passing. The
//!   repository-wide gate uses this rule.
//! - `PreviousLevel`: level N needs 80% of level N-1's checks passing (L1 is
//!   exempt). The per-pillar gate uses this rule, since a pillar's progress is
//!   judged by how well it covered the tier beneath.
//!
//! Both rules also require every required check at level N to pass.

use super::Tally;
use crate::models::{Level, LevelSummary};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ThresholdBasis {
    CurrentLevel,
    PreviousLevel,
}

/// Highest level reached by the sequential walk, or `None` if L1 fails.
pub(crate) fn walk<F>(tally_of: F, basis: ThresholdBasis) -> Option<Level>
where
    F: Fn(Level) -> Tally,
{
    let mut highest: Option<Level> = None;
    for level in Level::ALL {
        let t = tally_of(level);
        if t.is_empty() {
            // Empty levels pass through, but never ahead of an unmet predecessor.
            if highest.is_some() || level == Level::L1 {
                highest = Some(level);
                continue;
            }
            break;
        }
        let threshold_met = match basis {
            ThresholdBasis::CurrentLevel => t.meets_threshold(),
            ThresholdBasis::PreviousLevel => level
                .previous()
                .map(|p| tally_of(p).meets_threshold())
                .unwrap_or(true),
        };
        if t.all_required_pass() && threshold_met {
            highest = Some(level);
        } else {
            break;
        }
    }
    highest
}

/// Repository-wide achieved level using the current-level threshold.
pub fn achieved_level(levels: &BTreeMap<Level, LevelSummary>) -> Option<Level> {
    walk(
        |l| levels.get(&l).map(Tally::from).unwrap_or_default(),
        ThresholdBasis::CurrentLevel,
    )
}

/// The level a repository is working toward: L1 when nothing is achieved,
/// `None` once L5 is reached.
pub fn next_level(achieved: Option<Level>) -> Option<Level> {
    match achieved {
        None => Some(Level::L1),
        Some(l) => l.next(),
    }
}

/// Fraction of the next level's checks already passing, in `[0, 1]`.
///
/// Returns 1.0 when the next level has no checks or L5 is already achieved.
pub fn progress_to_next(levels: &BTreeMap<Level, LevelSummary>, achieved: Option<Level>) -> f64 {
    let Some(next) = next_level(achieved) else {
        return 1.0;
    };
    match levels.get(&next) {
        Some(s) if s.checks_total > 0 => s.checks_passed as f64 / s.checks_total as f64,
        _ => 1.0,
    }
}
