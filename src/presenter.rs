// src/presenter.rs
//
// Pure derivation layer: raw analysis result in, display-ready fields out.
// Total over their inputs; an unexpected verdict or out-of-range score maps
// to a defined default instead of failing.

use crate::types::{AnalysisResult, Verdict};

/// Display cap for competitor chips before collapsing into a "+N" label.
pub const VISIBLE_COMPETITORS: usize = 2;

/// Character budget for the roast inside the share text.
pub const SHARE_ROAST_LIMIT: usize = 100;

pub const SHARE_SUFFIX: &str = "Check yours at IsMyStartupTrash.com";

/// Display descriptor for one verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerdictStyle {
    pub emoji: &'static str,
    pub label: &'static str,
    pub color_class: &'static str,
    pub message: &'static str,
}

const TRASH_STYLE: VerdictStyle = VerdictStyle {
    emoji: "🗑️",
    label: "TRASH",
    color_class: "verdict-trash",
    message: "Sorry, this idea belongs in the bin.",
};

const POTENTIAL_STYLE: VerdictStyle = VerdictStyle {
    emoji: "🤔",
    label: "POTENTIAL",
    color_class: "verdict-potential",
    message: "Not terrible, but needs work.",
};

const GOLD_STYLE: VerdictStyle = VerdictStyle {
    emoji: "✨",
    label: "GOLD",
    color_class: "verdict-gold",
    message: "Actually... this might work!",
};

/// Exhaustive verdict-to-style mapping. `Unknown` deliberately shares the
/// `Potential` descriptor.
pub fn verdict_style(verdict: Verdict) -> &'static VerdictStyle {
    match verdict {
        Verdict::Trash => &TRASH_STYLE,
        Verdict::Gold => &GOLD_STYLE,
        Verdict::Potential | Verdict::Unknown => &POTENTIAL_STYLE,
    }
}

/// Score color band. Single source of truth for every score-colored surface
/// (ring stroke, headline).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Mid,
    High,
}

impl ScoreBand {
    /// Gradient stops for the score ring stroke.
    pub fn stroke_colors(self) -> (&'static str, &'static str) {
        match self {
            ScoreBand::Low => ("#FF6B6B", "#FF8E53"),
            ScoreBand::Mid => ("#FFD93D", "#FF9F43"),
            ScoreBand::High => ("#6BCB77", "#4ECDC4"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::Low => "low",
            ScoreBand::Mid => "mid",
            ScoreBand::High => "high",
        }
    }
}

/// Band boundaries: `< 4` low, `[4, 7)` mid, `>= 7` high.
pub fn score_band(score: f64) -> ScoreBand {
    if score < 4.0 {
        ScoreBand::Low
    } else if score < 7.0 {
        ScoreBand::Mid
    } else {
        ScoreBand::High
    }
}

/// Fraction of the score ring's circumference to fill, clamped to [0, 1].
pub fn score_arc_fraction(score: f64) -> f64 {
    (score / 10.0).clamp(0.0, 1.0)
}

/// Score as shown on the card, one decimal place.
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// The exact payload handed to the share action (or clipboard fallback).
pub fn share_text(result: &AnalysisResult) -> String {
    format!(
        "My startup \"{}\" with a score of {}/10! 🔥\n\n{}\n\n{}",
        result.verdict.as_str(),
        format_score(result.score),
        truncate_roast(&result.roast),
        SHARE_SUFFIX,
    )
}

/// First `SHARE_ROAST_LIMIT` characters of the roast, with a trailing "..."
/// only when something was cut.
fn truncate_roast(roast: &str) -> String {
    if roast.chars().count() <= SHARE_ROAST_LIMIT {
        return roast.to_string();
    }
    let mut truncated: String = roast.chars().take(SHARE_ROAST_LIMIT).collect();
    truncated.push_str("...");
    truncated
}

/// Split competitors into the chips to show and an optional "+N" overflow
/// label for the rest.
pub fn competitor_overflow(competitors: &[String], visible: usize) -> (&[String], Option<String>) {
    if competitors.len() <= visible {
        (competitors, None)
    } else {
        (
            &competitors[..visible],
            Some(format!("+{}", competitors.len() - visible)),
        )
    }
}
