//! CLI support for juery
//!
//! Provides programmatic access to the juery CLI so it can be embedded in
//! other tools or driven from tests without spawning a process.

mod docs;
mod run;

pub use docs::{DocTopic, get_doc_topic, get_docs_overview};
pub use run::{Command, RunOptions, RunOutput, execute, parse_document};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// `query` was given no pattern tokens
    EmptyPattern,
    /// Unknown documentation topic
    UnknownTopic(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
            CliError::EmptyPattern => write!(f, "A query needs at least one pattern token."),
            CliError::UnknownTopic(t) => {
                write!(f, "Unknown topic: '{}'\nRun 'juery docs' to see available topics.", t)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
