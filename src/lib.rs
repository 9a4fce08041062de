// src/lib.rs

pub mod backend;
pub mod config;
pub mod controller;
pub mod examples;
pub mod presenter;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use backend::{AnalysisBackend, ClientError, HttpBackend, MockBackend};
pub use config::ClientConfig;
pub use controller::RequestController;
pub use presenter::{
    competitor_overflow, format_score, score_arc_fraction, score_band, share_text, verdict_style,
    ScoreBand, VerdictStyle,
};
pub use types::{AnalysisRequest, AnalysisResult, ExampleIdea, LifecycleState, Verdict};
