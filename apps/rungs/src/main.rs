//! Rungs CLI binary entry point.
//! Resolves configuration, runs the scan pipeline, and prints results.

use clap::Parser;
use rungs::cli::{Cli, Commands, ScanArgs};
use rungs::config::{self, CliOverrides, Effective};
use rungs::error::Error;
use rungs::models::Priority;
use rungs::scan::{self, ScanRun};
use rungs::{output, utils};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Levels { output } => {
            output::print_levels(output.as_deref().unwrap_or("human"));
        }
        Commands::Score {
            scan,
            fail_under,
            max_actions,
            write_json,
        } => {
            let eff = or_exit(config::resolve_effective(&CliOverrides {
                fail_under: fail_under.as_deref(),
                max_actions,
                write_json: write_json.as_deref(),
                ..overrides(&scan)
            }));
            let run = load_scan(&eff);
            output::print_scan(&run, &eff.output, eff.max_actions);
            if let Some(path) = eff.write_json.as_deref() {
                let target = eff.repo_root.join(path);
                or_exit(output::write_json(&target, &output::compose_scan_json(&run)));
                if eff.output != "json" {
                    eprintln!(
                        "{} wrote {}",
                        utils::info_prefix(),
                        target.to_string_lossy()
                    );
                }
            }
            // CI gate: nothing achieved counts as below any floor
            if let Some(min) = eff.fail_under {
                if run.result.level_achieved < Some(min) {
                    std::process::exit(1);
                }
            }
        }
        Commands::Actions { scan, min_priority } => {
            let min = min_priority
                .as_deref()
                .map(|s| or_exit(s.parse::<Priority>()));
            let eff = or_exit(config::resolve_effective(&overrides(&scan)));
            let run = load_scan(&eff);
            output::print_actions(&run.result.action_items, &eff.output, min);
        }
    }
}

fn overrides(scan: &ScanArgs) -> CliOverrides<'_> {
    CliOverrides {
        repo_root: scan.repo_root.as_deref(),
        profile: scan.profile.as_deref(),
        results: scan.results.as_deref(),
        output: scan.output.as_deref(),
        ..CliOverrides::default()
    }
}

/// Shared preflight and pipeline for commands that need a scan.
fn load_scan(eff: &Effective) -> ScanRun {
    if !eff.profile_configured {
        or_exit::<()>(Err(Error::ProfileNotConfigured));
    }
    // Friendly note if no rungs config was found
    if !eff.config_found && eff.output != "json" {
        eprintln!(
            "{} No rungs.toml found; using defaults.",
            utils::note_prefix()
        );
    }
    let run = or_exit(scan::run_scan(
        Path::new(&eff.repo_root),
        &eff.profile,
        &eff.results,
    ));
    if eff.output != "json" {
        eprintln!(
            "{} Loaded {} results from [{}]",
            utils::info_prefix(),
            run.result.check_results.len(),
            run.sources.join(", ")
        );
    }
    run
}

fn or_exit<T>(res: Result<T, Error>) -> T {
    match res {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
