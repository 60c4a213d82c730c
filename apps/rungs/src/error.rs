//! Error type shared by profile loading, outcome assembly, and configuration.
//!
//! The scoring engine itself never fails; every variant here describes bad
//! input handed to it by a collaborator (profile, outcome shards, CLI).

use std::path::Path;

/// Errors raised while preparing check results for scoring.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A level token outside `L1..L5`.
    #[error("unknown level '{0}' (expected one of L1, L2, L3, L4, L5)")]
    UnknownLevel(String),

    /// A pillar token outside the fixed pillar set.
    #[error("unknown pillar '{0}'")]
    UnknownPillar(String),

    /// A check id that is not of the form `<pillar>.<name>`.
    #[error("invalid check id '{0}': expected '<pillar>.<name>'")]
    InvalidCheckId(String),

    /// The id prefix and the declared pillar disagree.
    #[error("check '{id}' is declared under pillar '{declared}' but its id names '{prefix}'")]
    PillarMismatch {
        id: String,
        declared: String,
        prefix: String,
    },

    /// The same check id appears twice in a profile or across outcome shards.
    #[error("duplicate check id '{0}'")]
    DuplicateCheck(String),

    /// An outcome refers to a check the profile does not declare.
    #[error("outcome for '{0}' has no entry in the profile")]
    UnknownCheck(String),

    /// A priority token outside `critical|high|medium|low`.
    #[error("unknown priority '{0}' (expected critical|high|medium|low)")]
    UnknownPriority(String),

    /// A profile check has no outcome in any shard.
    #[error("no outcome recorded for profile check '{0}'")]
    MissingOutcome(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid results pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("no result files matched '{0}'")]
    NoResults(String),

    #[error("profile is not configured; pass --profile or set `profile` in rungs.toml")]
    ProfileNotConfigured,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, message: impl ToString) -> Self {
        Error::Parse {
            path: path.to_string_lossy().to_string(),
            message: message.to_string(),
        }
    }
}
