//! Rungs core library.
//!
//! This crate scores a repository's maturity for agent collaboration from
//! declarative check outcomes, derives the achieved level under a sequential
//! 80% gate, and ranks remediation work.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Error type for profile, outcome, and config problems.
//! - `models`: Levels, pillars, check results, summaries, profile schema.
//! - `scoring`: The pure scoring and level-gating engine.
//! - `scan`: Loads profile and outcome shards and runs the engine.
//! - `output`: Human/JSON printers for score/actions/levels.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod scan;
pub mod scoring;
pub mod utils;
