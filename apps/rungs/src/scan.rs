//! Scan runner: loads a profile and outcome shards, joins them into
//! `CheckResult`s, and hands them to the scoring engine.
//!
//! Outcome shards are matched by a glob relative to the repository root,
//! parsed in parallel, and concatenated in sorted path order so the joined
//! list (and thus every summary) is deterministic.

use crate::error::{Error, Result};
use crate::models::outcome::{Outcome, OutcomeDoc};
use crate::models::profile::Profile;
use crate::models::{CheckResult, ScanResult};
use crate::scoring;
use glob::glob;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// A completed scan plus the shard files it was built from.
pub struct ScanRun {
    pub profile_name: Option<String>,
    pub sources: Vec<String>,
    pub result: ScanResult,
}

/// Load a profile, choosing the parser by extension (yaml|yml|toml|json).
pub fn load_profile(path: &Path) -> Result<Profile> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let profile: Profile = match ext.as_str() {
        "toml" => toml::from_str(&data).map_err(|e| Error::parse(path, e))?,
        "json" => serde_json::from_str(&data).map_err(|e| Error::parse(path, e))?,
        _ => serde_yaml::from_str(&data).map_err(|e| Error::parse(path, e))?,
    };
    profile.validate()?;
    Ok(profile)
}

/// Expand `pattern` under `root` and return matching files, sorted.
pub fn find_shards(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let abs = root.join(pattern);
    let pat = abs.to_string_lossy().to_string();
    let entries = glob(&pat).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    let mut files: Vec<PathBuf> = entries.flatten().filter(|p| p.is_file()).collect();
    files.sort();
    if files.is_empty() {
        return Err(Error::NoResults(pattern.to_string()));
    }
    Ok(files)
}

fn read_shard(path: &Path) -> Result<Vec<Outcome>> {
    let data = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let doc: OutcomeDoc = serde_json::from_str(&data).map_err(|e| Error::parse(path, e))?;
    Ok(doc.into_outcomes())
}

/// Parse every shard and concatenate in path order. Rejects a check id that
/// appears more than once across all shards.
pub fn load_outcomes(files: &[PathBuf]) -> Result<Vec<Outcome>> {
    let per_file: Vec<Result<Vec<Outcome>>> = files.par_iter().map(|p| read_shard(p)).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut all: Vec<Outcome> = Vec::new();
    for shard in per_file {
        for o in shard? {
            if !seen.insert(o.check_id.clone()) {
                return Err(Error::DuplicateCheck(o.check_id));
            }
            all.push(o);
        }
    }
    Ok(all)
}

/// Join outcomes to profile entries, in profile order.
///
/// Every outcome must name a declared check and every declared check must
/// have an outcome; anything else would silently skew the aggregates.
pub fn assemble(profile: &Profile, outcomes: Vec<Outcome>) -> Result<Vec<CheckResult>> {
    let declared: HashSet<&str> = profile.checks.iter().map(|c| c.id.as_str()).collect();
    let mut by_id: HashMap<String, Outcome> = HashMap::with_capacity(outcomes.len());
    for o in outcomes {
        if !declared.contains(o.check_id.as_str()) {
            return Err(Error::UnknownCheck(o.check_id));
        }
        by_id.insert(o.check_id.clone(), o);
    }
    profile
        .checks
        .iter()
        .map(|c| {
            let o = by_id
                .remove(&c.id)
                .ok_or_else(|| Error::MissingOutcome(c.id.clone()))?;
            Ok(CheckResult {
                check_id: c.id.clone(),
                pillar: c.pillar,
                level: c.level,
                passed: o.passed,
                required: c.required,
                message: o.message,
                matched_files: o.matched_files,
                suggestions: o.suggestions,
            })
        })
        .collect()
}

/// Run the full pipeline: profile, shards, join, score.
pub fn run_scan(repo_root: &Path, profile_path: &str, results_pattern: &str) -> Result<ScanRun> {
    let profile = load_profile(&repo_root.join(profile_path))?;
    let files = find_shards(repo_root, results_pattern)?;
    let outcomes = load_outcomes(&files)?;
    let results = assemble(&profile, outcomes)?;
    let result = scoring::evaluate(results, &profile.remediations());
    let sources = files
        .iter()
        .map(|f| {
            pathdiff::diff_paths(f, repo_root)
                .unwrap_or_else(|| f.clone())
                .to_string_lossy()
                .to_string()
        })
        .collect();
    Ok(ScanRun {
        profile_name: profile.name,
        sources,
        result,
    })
}
