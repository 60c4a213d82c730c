//! Output rendering for scan, actions, and levels commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form mirrors the
//! `ScanResult` field names so downstream tools can consume it directly.

use crate::error::{Error, Result};
use crate::models::{ActionItem, Level, Priority, ScanResult, LEVELS, PASS_THRESHOLD, PILLARS};
use crate::scan::ScanRun;
use crate::scoring::gate::next_level;
use crate::utils::{bar, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fs;
use std::path::Path;

fn level_label(level: Option<Level>) -> String {
    match level {
        Some(l) => format!("{} {}", l, l.title()),
        None => "none".to_string(),
    }
}

fn priority_tag(p: Priority, color: bool) -> String {
    let tag = format!("⟦{}⟧", p.as_str());
    if !color {
        return tag;
    }
    match p {
        Priority::Critical => tag.red().bold().to_string(),
        Priority::High => tag.yellow().bold().to_string(),
        Priority::Medium => tag.blue().to_string(),
        Priority::Low => tag.bright_black().to_string(),
    }
}

/// Print a full scan in the requested format.
pub fn print_scan(run: &ScanRun, output: &str, max_actions: usize) {
    match output {
        "json" => println!("{:#}", compose_scan_json(run)),
        _ => {
            let color = use_colors(output);
            let res = &run.result;
            print_headline(res, color);
            println!();
            print_level_lines(res, color);
            println!();
            print_pillar_lines(res, color);
            if !res.action_items.is_empty() {
                println!();
                let shown = max_actions.min(res.action_items.len());
                let heading = format!("Actions (top {} of {})", shown, res.action_items.len());
                if color {
                    println!("{}", heading.bold());
                } else {
                    println!("{}", heading);
                }
                print_action_lines(&res.action_items[..shown], color);
            }
            let summary = format!(
                "— Summary — level={} score={} failed={} total={}",
                res.level_achieved.map(|l| l.as_str()).unwrap_or("none"),
                res.overall_score,
                res.failed_checks.len(),
                res.check_results.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

fn print_headline(res: &ScanResult, color: bool) {
    let level = level_label(res.level_achieved);
    let next = match next_level(res.level_achieved) {
        Some(n) => format!(
            "next {} {} {:.0}%",
            n,
            bar(res.progress_to_next, 10),
            res.progress_to_next * 100.0
        ),
        None => "top level reached".to_string(),
    };
    if color {
        println!(
            "{} {}   overall {}   {}",
            "Level".bold(),
            level.green().bold(),
            format!("{}%", res.overall_score).bold(),
            next
        );
    } else {
        println!("Level {}   overall {}%   {}", level, res.overall_score, next);
    }
}

fn print_level_lines(res: &ScanResult, color: bool) {
    for s in res.levels.values() {
        let reached = res.level_achieved.is_some_and(|a| s.level <= a);
        let icon = match (s.checks_total, reached) {
            (0, _) => "·".to_string(),
            (_, true) => "✔".to_string(),
            _ => "✖".to_string(),
        };
        let icon = if !color {
            icon
        } else if reached {
            icon.green().to_string()
        } else {
            icon.red().to_string()
        };
        if s.checks_total == 0 {
            println!("  {} {:<2} {:<13} (no checks)", icon, s.level, s.level.title());
        } else {
            println!(
                "  {} {:<2} {:<13} {:>3}%  {}/{}  required {}/{}",
                icon,
                s.level,
                s.level.title(),
                s.score,
                s.checks_passed,
                s.checks_total,
                s.required_passed,
                s.required_total
            );
        }
    }
}

fn print_pillar_lines(res: &ScanResult, color: bool) {
    for p in res.pillars.values() {
        if p.checks_total == 0 {
            continue;
        }
        let name = if color {
            format!("{:<26}", p.name).bold().to_string()
        } else {
            format!("{:<26}", p.name)
        };
        println!(
            "  {} {:>3}%  {}/{}  level {}",
            name,
            p.score,
            p.checks_passed,
            p.checks_total,
            p.level_achieved.map(|l| l.as_str()).unwrap_or("-")
        );
    }
}

fn print_action_lines(items: &[ActionItem], color: bool) {
    for a in items {
        let id = if color {
            a.check_id.clone().bold().to_string()
        } else {
            a.check_id.clone()
        };
        println!(
            "  {} {} ❲{}❳ — {}",
            priority_tag(a.priority, color),
            id,
            a.level,
            a.action
        );
        if let Some(d) = &a.details {
            println!("      {}", d);
        }
        if let Some(t) = &a.template {
            println!("      template: {}", t);
        }
    }
}

/// Print action items at or above `min_priority`.
pub fn print_actions(items: &[ActionItem], output: &str, min_priority: Option<Priority>) {
    let kept: Vec<ActionItem> = filter_actions(items, min_priority);
    match output {
        "json" => println!("{:#}", compose_actions_json(&kept)),
        _ => {
            let color = use_colors(output);
            if kept.is_empty() {
                println!("no action items");
                return;
            }
            print_action_lines(&kept, color);
        }
    }
}

/// Print the level order, threshold, and pillar names.
pub fn print_levels(output: &str) {
    match output {
        "json" => println!("{:#}", compose_levels_json()),
        _ => {
            let color = use_colors(output);
            for l in LEVELS {
                if color {
                    println!("  {} {}", l.as_str().bold(), l.title());
                } else {
                    println!("  {} {}", l.as_str(), l.title());
                }
            }
            println!("pass threshold: {:.0}%", PASS_THRESHOLD * 100.0);
            for p in PILLARS {
                println!("  {:<15} {}", p.as_str(), p.name());
            }
        }
    }
}

/// Keep items whose priority is at least as urgent as `min`.
pub fn filter_actions(items: &[ActionItem], min: Option<Priority>) -> Vec<ActionItem> {
    items
        .iter()
        .filter(|a| min.map_or(true, |m| a.priority <= m))
        .cloned()
        .collect()
}

/// Compose scan JSON object (pure) for testing/snapshot purposes.
pub fn compose_scan_json(run: &ScanRun) -> JsonVal {
    let mut out = serde_json::to_value(&run.result).unwrap_or(JsonVal::Null);
    if let JsonVal::Object(map) = &mut out {
        map.insert("profile".into(), json!(run.profile_name));
        map.insert("sources".into(), json!(run.sources));
        map.insert("pass_threshold".into(), json!(PASS_THRESHOLD));
    }
    out
}

/// Compose action items JSON object (pure).
pub fn compose_actions_json(items: &[ActionItem]) -> JsonVal {
    let count = |p: Priority| items.iter().filter(|a| a.priority == p).count();
    json!({
        "action_items": items,
        "summary": {
            "critical": count(Priority::Critical),
            "high": count(Priority::High),
            "medium": count(Priority::Medium),
            "low": count(Priority::Low),
            "total": items.len(),
        }
    })
}

/// Compose constants JSON object (pure).
pub fn compose_levels_json() -> JsonVal {
    let levels: Vec<_> = LEVELS
        .iter()
        .map(|l| json!({"level": l, "title": l.title()}))
        .collect();
    let pillars: Vec<_> = PILLARS
        .iter()
        .map(|p| json!({"pillar": p, "name": p.name()}))
        .collect();
    json!({"levels": levels, "pass_threshold": PASS_THRESHOLD, "pillars": pillars})
}

/// Write a JSON document to `path`, creating parent directories.
pub fn write_json(path: &Path, value: &JsonVal) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    fs::write(path, format!("{:#}\n", value)).map_err(|e| Error::io(path, e))
}
