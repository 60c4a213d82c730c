//! Shared data models: engine input/output records plus the profile and
//! outcome schemas read from disk.

pub mod outcome;
pub mod profile;
pub mod taxonomy;

pub use taxonomy::{Level, Pillar, LEVELS, PASS_THRESHOLD, PILLARS};

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Outcome of one atomic check, annotated with its profile metadata.
///
/// Only `pillar`, `level`, `passed`, and `required` feed the engine; the
/// remaining fields are carried through for presentation.
pub struct CheckResult {
    pub check_id: String,
    pub pillar: Pillar,
    pub level: Level,
    pub passed: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub matched_files: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Aggregate of one level across all pillars.
///
/// `achieved` is the level's local criterion only; the authoritative
/// answer comes from the gate walk.
pub struct LevelSummary {
    pub level: Level,
    pub achieved: bool,
    pub score: u32,
    pub checks_passed: usize,
    pub checks_total: usize,
    pub required_passed: usize,
    pub required_total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Aggregate of one pillar across all levels.
pub struct PillarSummary {
    pub pillar: Pillar,
    pub name: String,
    pub level_achieved: Option<Level>,
    pub score: u32,
    pub checks_passed: usize,
    pub checks_total: usize,
    pub failed_checks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Remediation urgency. Declaration order is sort order: critical first.
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::UnknownPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A prioritized remediation suggestion derived from a failed check.
pub struct ActionItem {
    pub check_id: String,
    pub pillar: Pillar,
    pub level: Level,
    pub priority: Priority,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Everything one scan derives from its check results.
pub struct ScanResult {
    pub level_achieved: Option<Level>,
    pub overall_score: u32,
    pub progress_to_next: f64,
    pub levels: BTreeMap<Level, LevelSummary>,
    pub pillars: BTreeMap<Pillar, PillarSummary>,
    pub check_results: Vec<CheckResult>,
    pub failed_checks: Vec<CheckResult>,
    pub action_items: Vec<ActionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse_forms() {
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!(" High ".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert!(Priority::Critical < Priority::Low);
    }

    #[test]
    fn test_unknown_priority_is_a_typed_error() {
        match "urgent".parse::<Priority>() {
            Err(Error::UnknownPriority(tok)) => assert_eq!(tok, "urgent"),
            other => panic!("expected unknown priority, got {:?}", other),
        }
        let msg = "".parse::<Priority>().unwrap_err().to_string();
        assert!(msg.contains("critical|high|medium|low"));
    }
}
