//! Closed enumerations shared by the engine and every consumer that renders
//! level order, pillar names, or the pass threshold.
//!
//! - `Level`: ordered maturity tiers `L1..L5`, never skipped.
//! - `Pillar`: nine independent categories of repository health.
//! - `PASS_THRESHOLD`: the 80% bar applied by both gates.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fraction of checks that must pass for a level to clear the gate.
pub const PASS_THRESHOLD: f64 = 0.80;

/// `PASS_THRESHOLD` as an integer percentage, used for exact comparisons.
pub(crate) const THRESHOLD_PERCENT: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Maturity tier. Ordering follows the gate walk: `L1 < L2 < ... < L5`.
pub enum Level {
    L1,
    L2,
    L3,
    L4,
    L5,
}

/// Levels in gate order.
pub const LEVELS: [Level; 5] = Level::ALL;

impl Level {
    pub const ALL: [Level; 5] = [Level::L1, Level::L2, Level::L3, Level::L4, Level::L5];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L3 => "L3",
            Level::L4 => "L4",
            Level::L5 => "L5",
        }
    }

    /// Human label shown next to the level token.
    pub fn title(self) -> &'static str {
        match self {
            Level::L1 => "Functional",
            Level::L2 => "Documented",
            Level::L3 => "Standardized",
            Level::L4 => "Optimized",
            Level::L5 => "Autonomous",
        }
    }

    pub fn next(self) -> Option<Level> {
        Level::ALL.get(self as usize + 1).copied()
    }

    pub fn previous(self) -> Option<Level> {
        (self as usize).checked_sub(1).map(|i| Level::ALL[i])
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Accepts `L3`, `l3`, or a bare `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let digits = t
            .strip_prefix('L')
            .or_else(|| t.strip_prefix('l'))
            .unwrap_or(t);
        match digits {
            "1" => Ok(Level::L1),
            "2" => Ok(Level::L2),
            "3" => Ok(Level::L3),
            "4" => Ok(Level::L4),
            "5" => Ok(Level::L5),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Category of repository health, independent of the level axis.
pub enum Pillar {
    Docs,
    Style,
    Build,
    Test,
    Security,
    Observability,
    Env,
    TaskDiscovery,
    Product,
}

/// Pillars in display order.
pub const PILLARS: [Pillar; 9] = Pillar::ALL;

impl Pillar {
    pub const ALL: [Pillar; 9] = [
        Pillar::Docs,
        Pillar::Style,
        Pillar::Build,
        Pillar::Test,
        Pillar::Security,
        Pillar::Observability,
        Pillar::Env,
        Pillar::TaskDiscovery,
        Pillar::Product,
    ];

    /// Identifier used as the check id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Pillar::Docs => "docs",
            Pillar::Style => "style",
            Pillar::Build => "build",
            Pillar::Test => "test",
            Pillar::Security => "security",
            Pillar::Observability => "observability",
            Pillar::Env => "env",
            Pillar::TaskDiscovery => "task_discovery",
            Pillar::Product => "product",
        }
    }

    /// Display label.
    pub fn name(self) -> &'static str {
        match self {
            Pillar::Docs => "Documentation",
            Pillar::Style => "Style & Validation",
            Pillar::Build => "Build System",
            Pillar::Test => "Testing",
            Pillar::Security => "Security",
            Pillar::Observability => "Observability",
            Pillar::Env => "Development Environment",
            Pillar::TaskDiscovery => "Task Discovery",
            Pillar::Product => "Product & Experimentation",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Pillar::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| Error::UnknownPillar(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_walk_neighbours() {
        assert_eq!(Level::L1.previous(), None);
        assert_eq!(Level::L1.next(), Some(Level::L2));
        assert_eq!(Level::L4.next(), Some(Level::L5));
        assert_eq!(Level::L5.next(), None);
        assert_eq!(Level::L3.previous(), Some(Level::L2));
    }

    #[test]
    fn test_level_parse_forms() {
        assert_eq!("L2".parse::<Level>().unwrap(), Level::L2);
        assert_eq!("l4".parse::<Level>().unwrap(), Level::L4);
        assert_eq!(" 5 ".parse::<Level>().unwrap(), Level::L5);
        assert!(matches!("L6".parse::<Level>(), Err(Error::UnknownLevel(_))));
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_pillar_parse_and_serde_names() {
        assert_eq!(
            "task_discovery".parse::<Pillar>().unwrap(),
            Pillar::TaskDiscovery
        );
        assert!(matches!(
            "perf".parse::<Pillar>(),
            Err(Error::UnknownPillar(_))
        ));
        let v = serde_json::to_value(Pillar::TaskDiscovery).unwrap();
        assert_eq!(v, "task_discovery");
        let l = serde_json::to_value(Level::L3).unwrap();
        assert_eq!(l, "L3");
    }

    #[test]
    fn test_constants_are_ordered() {
        assert!(LEVELS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PILLARS.len(), 9);
        assert_eq!(THRESHOLD_PERCENT as f64 / 100.0, PASS_THRESHOLD);
    }
}
