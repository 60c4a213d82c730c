//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rungs",
    version,
    about = "Rungs: repository maturity levels for agent collaboration",
    long_about = "Rungs — score check outcomes against a profile, derive the achieved maturity level (L1..L5), and rank what to fix next.\n\nConfiguration precedence: CLI > rungs.toml > defaults.",
    after_help = "Examples:\n  rungs score --profile rungs/profile.yaml\n  rungs score --results 'out/*.json' --fail-under L2\n  rungs actions --min-priority high --output json\n  rungs levels",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Clone, Default)]
/// Inputs shared by commands that run a scan.
pub struct ScanArgs {
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Path to the check profile (yaml|toml|json), relative to repo root")]
    pub profile: Option<String>,
    #[arg(long, help = "Glob of outcome shards (default: .rungs/results/*.json)")]
    pub results: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current rungs version.")]
    Version,
    /// Score a repository
    #[command(
        about = "Score check outcomes",
        long_about = "Join outcome shards with the profile, compute level and pillar summaries, the achieved level, and ranked action items.",
        after_help = "Examples:\n  rungs score --profile rungs/profile.yaml\n  rungs score --output json --write-json reports/scan.json"
    )]
    Score {
        #[command(flatten)]
        scan: ScanArgs,
        #[arg(long, help = "Exit non-zero when the achieved level is below this (e.g. L2)")]
        fail_under: Option<String>,
        #[arg(long, help = "Action items shown in human output (default: 10)")]
        max_actions: Option<usize>,
        #[arg(long, help = "Also write the JSON result to this path")]
        write_json: Option<String>,
    },
    /// Print ranked action items only
    #[command(
        about = "List action items",
        long_about = "Print failed checks as prioritized action items (critical, high, medium, low).",
        after_help = "Examples:\n  rungs actions --min-priority high"
    )]
    Actions {
        #[command(flatten)]
        scan: ScanArgs,
        #[arg(long, help = "Only show items at or above: critical|high|medium|low")]
        min_priority: Option<String>,
    },
    /// Print level order, threshold, and pillars
    #[command(
        about = "Show levels and pillars",
        long_about = "Print the ordered levels, the pass threshold, and the pillar names."
    )]
    Levels {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
