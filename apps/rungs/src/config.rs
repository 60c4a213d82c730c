//! Configuration discovery and effective settings resolution.
//!
//! Rungs reads `rungs.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `profile`: none (must be configured)
//! - `results`: `.rungs/results/*.json`
//! - `output`: `human`
//! - `max_actions`: 10
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::models::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_RESULTS: &str = ".rungs/results/*.json";
pub const DEFAULT_MAX_ACTIONS: usize = 10;

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `rungs.toml|yaml`.
pub struct RungsConfig {
    pub profile: Option<String>,
    pub results: Option<String>,
    pub output: Option<String>,
    #[serde(alias = "failUnder")]
    pub fail_under: Option<String>,
    #[serde(alias = "maxActions")]
    pub max_actions: Option<usize>,
    #[serde(alias = "writeJson")]
    pub write_json: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub profile: String,
    pub profile_configured: bool,
    pub results: String,
    pub output: String,
    pub fail_under: Option<Level>,
    pub max_actions: usize,
    pub write_json: Option<String>,
}

#[derive(Debug, Default, Clone)]
/// Raw CLI overrides; `None` defers to the config file.
pub struct CliOverrides<'a> {
    pub repo_root: Option<&'a str>,
    pub profile: Option<&'a str>,
    pub results: Option<&'a str>,
    pub output: Option<&'a str>,
    pub fail_under: Option<&'a str>,
    pub max_actions: Option<usize>,
    pub write_json: Option<&'a str>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `rungs.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("rungs.toml").exists()
            || cur.join("rungs.yaml").exists()
            || cur.join("rungs.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `RungsConfig` from `rungs.toml` or `rungs.yaml|yml` if present.
///
/// A missing file is `Ok(None)`; a file that exists but cannot be read or
/// parsed is an error rather than a silent fall back to defaults.
pub fn load_config(root: &Path) -> Result<Option<RungsConfig>> {
    let toml_path = root.join("rungs.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).map_err(|e| Error::io(&toml_path, e))?;
        let cfg: RungsConfig = toml::from_str(&s).map_err(|e| Error::parse(&toml_path, e))?;
        return Ok(Some(cfg));
    }
    for yml in ["rungs.yaml", "rungs.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).map_err(|e| Error::io(&p, e))?;
            let cfg: RungsConfig = serde_yaml::from_str(&s).map_err(|e| Error::parse(&p, e))?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Fails when the config file is unreadable or malformed, or when a
/// `fail_under` value does not name a level.
pub fn resolve_effective(cli: &CliOverrides<'_>) -> Result<Effective> {
    let start = PathBuf::from(cli.repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let (profile, profile_configured) = match cli.profile.map(str::to_string).or(cfg.profile) {
        Some(p) => (p, true),
        None => (String::new(), false),
    };
    let results = cli
        .results
        .map(str::to_string)
        .or(cfg.results)
        .unwrap_or_else(|| DEFAULT_RESULTS.to_string());
    let output = cli
        .output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let fail_under = match cli.fail_under.map(str::to_string).or(cfg.fail_under) {
        Some(s) => Some(s.parse::<Level>()?),
        None => None,
    };
    let max_actions = cli
        .max_actions
        .or(cfg.max_actions)
        .unwrap_or(DEFAULT_MAX_ACTIONS);
    let write_json = cli.write_json.map(str::to_string).or(cfg.write_json);

    Ok(Effective {
        repo_root,
        config_found,
        profile,
        profile_configured,
        results,
        output,
        fail_under,
        max_actions,
        write_json,
    })
}
