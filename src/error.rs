//! Error types
//!
//! `FortuneError` is the library error. `StageFailure` is what the pipeline
//! reports outward when one stage of a request fails: it names the stage and
//! carries a message, and is logged exactly once where it is created.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FortuneError {
    #[error("invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("invalid element distribution: {0}")]
    InvalidDistribution(String),

    #[error("chart calculation failed: {0}")]
    Calculator(String),

    #[error("chart calculation timed out after {0} ms")]
    Timeout(u64),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("report sync failed after {attempts} attempts: {message}")]
    Sync { attempts: u32, message: String },
}

pub type Result<T> = std::result::Result<T, FortuneError>;

/// Pipeline stage that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Validation,
    Calculator,
    Interactions,
    Sync,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validation => "validation",
            Stage::Calculator => "calculator",
            Stage::Interactions => "interactions",
            Stage::Sync => "sync",
        };
        f.write_str(name)
    }
}

/// Structured failure of one request stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{stage} stage failed: {message}")]
pub struct StageFailure {
    #[serde(rename = "source")]
    pub stage: Stage,
    pub message: String,
}

impl StageFailure {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }

    /// Stage that a library error belongs to when it escapes the pipeline
    pub fn from_error(stage: Stage, err: &FortuneError) -> Self {
        Self::new(stage, err.to_string())
    }
}
