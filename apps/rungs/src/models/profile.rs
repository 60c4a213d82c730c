//! Profile schema: the catalogue of checks and the metadata the engine needs.
//!
//! Each entry declares:
//! - `id`: `<pillar>.<name>`, stable across runs.
//! - `pillar` / `level`: placement on the two scoring axes.
//! - `required`: whether a failure vetoes its level.
//! - `action` / `details` / `template`: remediation text for action items.
//!
//! Profiles may be written in YAML, TOML, or JSON; the loader picks the
//! parser from the file extension.

use crate::error::{Error, Result};
use crate::models::taxonomy::{Level, Pillar};
use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

#[derive(Debug, Deserialize, Clone, Default)]
/// Root profile document.
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub checks: Vec<ProfileCheck>,
}

#[derive(Debug, Deserialize, Clone)]
/// One declared check.
pub struct ProfileCheck {
    pub id: String,
    pub pillar: Pillar,
    pub level: Level,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Remediation text attached to a check, consumed by the action ranker.
pub struct Remediation {
    pub action: Option<String>,
    pub details: Option<String>,
    pub template: Option<String>,
}

fn check_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<pillar>[a-z][a-z0-9_]*)\.(?P<name>[a-z0-9][a-z0-9_\-]*)$")
            .expect("check id regex is valid")
    })
}

/// Split `<pillar>.<name>` and return the pillar prefix.
pub fn check_id_prefix(id: &str) -> Result<&str> {
    check_id_re()
        .captures(id)
        .and_then(|c| c.name("pillar"))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::InvalidCheckId(id.to_string()))
}

impl Profile {
    /// Reject malformed ids, pillar/prefix disagreement, and duplicates.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for c in &self.checks {
            let prefix = check_id_prefix(&c.id)?;
            if prefix != c.pillar.as_str() {
                return Err(Error::PillarMismatch {
                    id: c.id.clone(),
                    declared: c.pillar.as_str().to_string(),
                    prefix: prefix.to_string(),
                });
            }
            if !seen.insert(c.id.as_str()) {
                return Err(Error::DuplicateCheck(c.id.clone()));
            }
        }
        Ok(())
    }

    /// Remediation text keyed by check id.
    pub fn remediations(&self) -> HashMap<String, Remediation> {
        self.checks
            .iter()
            .map(|c| {
                (
                    c.id.clone(),
                    Remediation {
                        action: c.action.clone(),
                        details: c.details.clone(),
                        template: c.template.clone(),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_from_yaml(s: &str) -> Profile {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_yaml_profile_defaults_and_lookup() {
        let p = profile_from_yaml(
            r#"
name: default
checks:
  - id: docs.readme
    pillar: docs
    level: L1
    required: true
    action: Add a README.md
    template: README.md
  - id: task_discovery.issue_templates
    pillar: task_discovery
    level: L3
"#,
        );
        p.validate().unwrap();
        assert_eq!(p.checks.len(), 2);
        let tdc = &p.checks[1];
        assert_eq!(tdc.id, "task_discovery.issue_templates");
        assert!(!tdc.required);
        assert_eq!(tdc.level, Level::L3);
        let rem = p.remediations();
        assert_eq!(
            rem["docs.readme"].action.as_deref(),
            Some("Add a README.md")
        );
        assert_eq!(rem["docs.readme"].template.as_deref(), Some("README.md"));
        assert_eq!(rem["task_discovery.issue_templates"], Remediation::default());
    }

    #[test]
    fn test_free_text_description_is_ignored() {
        let p = profile_from_yaml(
            r#"
name: described
description: Baseline profile
checks:
  - id: env.dotenv
    pillar: env
    level: L2
    description: Ships an .env.example
"#,
        );
        p.validate().unwrap();
        assert_eq!(p.name.as_deref(), Some("described"));
        assert_eq!(p.checks[0].level, Level::L2);
    }

    #[test]
    fn test_toml_profile_parses() {
        let p: Profile = toml::from_str(
            r#"
name = "toml"
[[checks]]
id = "build.lockfile"
pillar = "build"
level = "L2"
required = true
"#,
        )
        .unwrap();
        p.validate().unwrap();
        assert!(p.checks[0].required);
    }

    #[test]
    fn test_unknown_enum_values_rejected_at_parse() {
        let r: std::result::Result<Profile, _> = serde_yaml::from_str(
            r#"
checks:
  - id: perf.bench
    pillar: perf
    level: L1
"#,
        );
        assert!(r.is_err());
        let r2: std::result::Result<Profile, _> = serde_yaml::from_str(
            r#"
checks:
  - id: docs.readme
    pillar: docs
    level: L9
"#,
        );
        assert!(r2.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_ids() {
        let bad = profile_from_yaml(
            r#"
checks:
  - id: readme
    pillar: docs
    level: L1
"#,
        );
        assert!(matches!(bad.validate(), Err(Error::InvalidCheckId(_))));

        let mismatch = profile_from_yaml(
            r#"
checks:
  - id: style.readme
    pillar: docs
    level: L1
"#,
        );
        match mismatch.validate() {
            Err(Error::PillarMismatch { prefix, declared, .. }) => {
                assert_eq!(prefix, "style");
                assert_eq!(declared, "docs");
            }
            other => panic!("expected mismatch, got {:?}", other),
        }

        let dup = profile_from_yaml(
            r#"
checks:
  - id: docs.readme
    pillar: docs
    level: L1
  - id: docs.readme
    pillar: docs
    level: L2
"#,
        );
        assert!(matches!(dup.validate(), Err(Error::DuplicateCheck(id)) if id == "docs.readme"));
    }

    #[test]
    fn test_check_id_prefix() {
        assert_eq!(check_id_prefix("env.devcontainer").unwrap(), "env");
        assert_eq!(
            check_id_prefix("task_discovery.pr-template").unwrap(),
            "task_discovery"
        );
        assert!(check_id_prefix("Docs.Readme").is_err());
        assert!(check_id_prefix("docs.").is_err());
    }
}
