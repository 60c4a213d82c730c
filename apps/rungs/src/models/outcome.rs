//! Outcome shard schema written by upstream check runners.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
/// Raw pass/fail record for one check, before profile metadata is joined in.
pub struct Outcome {
    pub check_id: String,
    pub passed: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub matched_files: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
/// A shard is either a bare array or an object wrapping `results`.
pub enum OutcomeDoc {
    List(Vec<Outcome>),
    Wrapped { results: Vec<Outcome> },
}

impl OutcomeDoc {
    pub fn into_outcomes(self) -> Vec<Outcome> {
        match self {
            OutcomeDoc::List(v) => v,
            OutcomeDoc::Wrapped { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_shard_shapes_parse() {
        let bare: OutcomeDoc =
            serde_json::from_str(r#"[{"check_id":"docs.readme","passed":true}]"#).unwrap();
        let wrapped: OutcomeDoc = serde_json::from_str(
            r#"{"results":[{"check_id":"docs.readme","passed":false,"message":"missing","suggestions":["add one"]}]}"#,
        )
        .unwrap();
        let a = bare.into_outcomes();
        let b = wrapped.into_outcomes();
        assert!(a[0].passed && a[0].message.is_empty());
        assert!(!b[0].passed);
        assert_eq!(b[0].suggestions, vec!["add one".to_string()]);
    }
}
