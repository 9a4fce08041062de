// src/types.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Validated input for the analysis endpoint. Construct via [`AnalysisRequest::new`];
/// both fields are trimmed and guaranteed non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub name: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("startup name must not be empty")]
    EmptyName,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("startup name exceeds {MAX_NAME_LEN} characters")]
    NameTooLong,
    #[error("description exceeds {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,
}

impl AnalysisRequest {
    pub fn new(name: &str, description: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        let description = description.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong);
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooLong);
        }

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
        })
    }
}

/// Categorical judgment of the idea. The wire format is a free-form string;
/// anything we do not recognize lands on `Unknown` instead of failing the parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Verdict {
    Trash,
    Potential,
    Gold,
    Unknown,
}

impl From<String> for Verdict {
    fn from(value: String) -> Self {
        match value.as_str() {
            "trash" => Verdict::Trash,
            "potential" => Verdict::Potential,
            "gold" => Verdict::Gold,
            _ => Verdict::Unknown,
        }
    }
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Trash => "trash",
            Verdict::Potential => "potential",
            Verdict::Gold => "gold",
            Verdict::Unknown => "unknown",
        }
    }
}

/// Analysis result as returned by the roast service. Only `verdict`, `score`
/// and `roast` are guaranteed; everything else is rendered conditionally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub score: f64,
    pub roast: String,
    #[serde(default)]
    pub name_rating: String,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub market_size: Option<String>,
    #[serde(default)]
    pub originality_score: Option<f64>,
    #[serde(default)]
    pub execution_difficulty: Option<String>,
}

/// Prefill payload from the random-example endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExampleIdea {
    pub name: String,
    pub description: String,
}

/// The analysis lifecycle. One request in flight at most; a completed request
/// either lands here as `Success`/`Failed` or is discarded as stale.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LifecycleState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failed(String),
}

impl LifecycleState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LifecycleState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LifecycleState::Loading)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            LifecycleState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LifecycleState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
