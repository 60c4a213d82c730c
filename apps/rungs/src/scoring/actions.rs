//! Action item ranker: turns failed checks into prioritized remediation.
//!
//! Priority depends only on where a check sits relative to the gate:
//!
//! | priority | condition                                                    |
//! |----------|--------------------------------------------------------------|
//! | critical | required, and at the blocking level or at/below the achieved |
//! | high     | at the blocking level (the next one to achieve)              |
//! | medium   | optional, at or below the achieved level                     |
//! | low      | beyond the blocking level                                    |
//!
//! The blocking level is L1 when nothing is achieved.

use super::gate::next_level;
use crate::models::profile::Remediation;
use crate::models::{ActionItem, CheckResult, Level, Priority};
use std::collections::HashMap;

/// Priority of one failed check given the achieved level.
pub fn priority_for(check: &CheckResult, achieved: Option<Level>) -> Priority {
    let blocking = next_level(achieved);
    let at_blocking = blocking == Some(check.level);
    let at_or_below = achieved.is_some_and(|a| check.level <= a);
    if check.required && (at_blocking || at_or_below) {
        Priority::Critical
    } else if at_blocking {
        Priority::High
    } else if at_or_below {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Rank failed checks as action items, critical first, then by level and id.
///
/// Action text comes from the remediation catalogue when present, else from
/// the check's first suggestion, else from its message.
pub fn rank_actions(
    failed: &[CheckResult],
    achieved: Option<Level>,
    remediations: &HashMap<String, Remediation>,
) -> Vec<ActionItem> {
    let mut items: Vec<ActionItem> = failed
        .iter()
        .filter(|c| !c.passed)
        .map(|c| {
            let rem = remediations.get(&c.check_id);
            ActionItem {
                check_id: c.check_id.clone(),
                pillar: c.pillar,
                level: c.level,
                priority: priority_for(c, achieved),
                action: action_text(c, rem),
                details: rem.and_then(|r| r.details.clone()),
                template: rem.and_then(|r| r.template.clone()),
            }
        })
        .collect();
    items.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.level.cmp(&b.level))
            .then_with(|| a.check_id.cmp(&b.check_id))
    });
    items
}

fn action_text(c: &CheckResult, rem: Option<&Remediation>) -> String {
    if let Some(a) = rem.and_then(|r| r.action.as_ref()) {
        return a.clone();
    }
    if let Some(s) = c.suggestions.first() {
        return s.clone();
    }
    if !c.message.is_empty() {
        return c.message.clone();
    }
    format!("Make check '{}' pass", c.check_id)
}
