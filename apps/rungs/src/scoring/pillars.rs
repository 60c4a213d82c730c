//! Pillar summarizer: one summary per pillar, cutting across levels.

use super::gate::{walk, ThresholdBasis};
use super::{percent, Tally};
use crate::models::{CheckResult, Level, Pillar, PillarSummary};
use std::collections::BTreeMap;

/// One `PillarSummary` per pillar, including pillars with no checks.
///
/// Unlike level scores, a pillar without checks scores 100: a pillar that
/// does not apply must not drag its own score down.
///
/// `level_achieved` walks this pillar's checks with the previous-level
/// threshold, independent of the rule the repository-wide gate uses.
pub fn summarize_pillars(results: &[CheckResult]) -> BTreeMap<Pillar, PillarSummary> {
    Pillar::ALL
        .into_iter()
        .map(|pillar| (pillar, summarize_pillar(pillar, results)))
        .collect()
}

fn summarize_pillar(pillar: Pillar, results: &[CheckResult]) -> PillarSummary {
    let mut overall = Tally::default();
    let mut by_level: BTreeMap<Level, Tally> = BTreeMap::new();
    let mut failed_checks: Vec<String> = Vec::new();
    for r in results.iter().filter(|r| r.pillar == pillar) {
        overall.add(r);
        by_level.entry(r.level).or_default().add(r);
        if !r.passed {
            failed_checks.push(r.check_id.clone());
        }
    }
    let level_achieved = walk(
        |l| by_level.get(&l).copied().unwrap_or_default(),
        ThresholdBasis::PreviousLevel,
    );
    PillarSummary {
        pillar,
        name: pillar.name().to_string(),
        level_achieved,
        score: percent(overall.passed, overall.total, 100),
        checks_passed: overall.passed,
        checks_total: overall.total,
        failed_checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::check;

    #[test]
    fn test_empty_pillar_scores_full_and_passes_through() {
        let s = summarize_pillars(&[check(Pillar::Docs, "readme", Level::L1, false, false)]);
        let style = &s[&Pillar::Style];
        assert_eq!(style.checks_total, 0);
        assert_eq!(style.score, 100);
        assert_eq!(style.level_achieved, Some(Level::L5));
        assert!(style.failed_checks.is_empty());
        assert_eq!(style.name, "Style & Validation");
    }

    #[test]
    fn test_failed_checks_keep_input_order_and_pillar_scope() {
        let results = vec![
            check(Pillar::Test, "zeta", Level::L2, false, false),
            check(Pillar::Docs, "readme", Level::L1, false, false),
            check(Pillar::Test, "alpha", Level::L1, false, false),
            check(Pillar::Test, "unit", Level::L1, true, false),
        ];
        let s = summarize_pillars(&results);
        let t = &s[&Pillar::Test];
        assert_eq!(t.failed_checks, vec!["test.zeta", "test.alpha"]);
        assert_eq!((t.checks_passed, t.checks_total), (1, 3));
        assert_eq!(t.score, 33);
    }

    #[test]
    fn test_pillar_gate_uses_previous_level_threshold() {
        // L1 1/2 (50%, no required): L1 itself is reached, L2 is then blocked
        // by L1 falling short, even though L2 is fully green.
        let results = vec![
            check(Pillar::Build, "make", Level::L1, true, false),
            check(Pillar::Build, "lock", Level::L1, false, false),
            check(Pillar::Build, "ci", Level::L2, true, false),
        ];
        let b = &summarize_pillars(&results)[&Pillar::Build];
        assert_eq!(b.level_achieved, Some(Level::L1));
    }

    #[test]
    fn test_pillar_gate_required_veto() {
        let results = vec![
            check(Pillar::Security, "gitignore", Level::L1, true, false),
            check(Pillar::Security, "secrets", Level::L2, false, true),
            check(Pillar::Security, "sast", Level::L3, true, false),
        ];
        let s = &summarize_pillars(&results)[&Pillar::Security];
        assert_eq!(s.level_achieved, Some(Level::L1));
        assert_eq!(s.failed_checks, vec!["security.secrets"]);
    }

    #[test]
    fn test_pillar_required_failure_at_l1() {
        let results = vec![check(Pillar::Env, "dotenv", Level::L1, false, true)];
        let e = &summarize_pillars(&results)[&Pillar::Env];
        assert_eq!(e.level_achieved, None);
        assert_eq!(e.score, 0);
    }

    #[test]
    fn test_pillar_empty_previous_level_meets_threshold() {
        // L2 has no docs checks: L3 looks back at an empty level, which
        // meets the bar vacuously, so the walk continues through L5.
        let results = vec![
            check(Pillar::Docs, "readme", Level::L1, true, false),
            check(Pillar::Docs, "agents", Level::L1, true, false),
            check(Pillar::Docs, "adr", Level::L3, true, false),
        ];
        let d = &summarize_pillars(&results)[&Pillar::Docs];
        assert_eq!(d.level_achieved, Some(Level::L5));
        assert_eq!(d.score, 100);
    }

    #[test]
    fn test_pillar_empty_previous_level_keeps_required_veto() {
        let results = vec![
            check(Pillar::Docs, "readme", Level::L1, true, false),
            check(Pillar::Docs, "agents", Level::L1, true, false),
            check(Pillar::Docs, "adr", Level::L3, false, true),
        ];
        let d = &summarize_pillars(&results)[&Pillar::Docs];
        assert_eq!(d.level_achieved, Some(Level::L2));
    }

    #[test]
    fn test_pillar_can_exceed_repository_gate() {
        // L2 at 1/2 blocks the repository-wide gate at L1, while the pillar
        // walk only looks back at L1 (100%) and so reaches L2 and beyond.
        let results = vec![
            check(Pillar::Docs, "readme", Level::L1, true, false),
            check(Pillar::Docs, "agents", Level::L2, true, false),
            check(Pillar::Docs, "adr", Level::L2, false, false),
        ];
        let levels = crate::scoring::levels::summarize_levels(&results);
        assert_eq!(crate::scoring::gate::achieved_level(&levels), Some(Level::L1));
        let d = &summarize_pillars(&results)[&Pillar::Docs];
        assert_eq!(d.level_achieved, Some(Level::L5));
    }
}
