// src/render.rs

use crate::presenter::{
    competitor_overflow, format_score, score_arc_fraction, score_band, share_text, verdict_style,
    VISIBLE_COMPETITORS,
};
use crate::types::AnalysisResult;

const RING_SEGMENTS: usize = 20;

/// Render the verdict card as terminal text. Sections beyond verdict, score
/// and roast only appear when the service returned them; an absent and an
/// empty competitor list render the same way (not at all).
pub fn render_card(result: &AnalysisResult) -> String {
    let style = verdict_style(result.verdict);
    let band = score_band(result.score);
    let mut card = String::new();

    card.push_str(&format!("{} {}\n", style.emoji, style.label));
    card.push_str(&format!("{}\n\n", style.message));

    card.push_str(&format!(
        "Viability Score: {}/10 ({})\n",
        format_score(result.score),
        band.name(),
    ));
    card.push_str(&format!("[{}]\n\n", score_ring(result.score)));

    card.push_str("🔥 The Roast\n");
    card.push_str(&format!("{}\n", result.roast));

    if !result.name_rating.is_empty() {
        card.push_str(&format!("\n📛 Name Rating\n{}\n", result.name_rating));
    }

    if !result.competitors.is_empty() {
        let (visible, overflow) = competitor_overflow(&result.competitors, VISIBLE_COMPETITORS);
        let mut chips: Vec<&str> = visible.iter().map(String::as_str).collect();
        if let Some(label) = overflow.as_deref() {
            chips.push(label);
        }
        card.push_str(&format!("\n⚔️ Competitors Found\n{}\n", chips.join("  ")));
    }

    if let Some(advice) = &result.advice {
        card.push_str(&format!("\n💡 Constructive Advice\n{}\n", advice));
    }

    if let Some(market_size) = &result.market_size {
        card.push_str(&format!("\n📊 Market Size\n{}\n", market_size));
    }

    if let Some(originality) = result.originality_score {
        card.push_str(&format!(
            "\n🧠 Originality: {}/10\n",
            format_score(originality)
        ));
    }

    if let Some(difficulty) = &result.execution_difficulty {
        card.push_str(&format!("\n🔧 Execution Difficulty\n{}\n", difficulty));
    }

    card.push_str(&format!("\nShare it:\n{}\n", share_text(result)));

    card
}

/// Inline failure line shown near the submit control.
pub fn render_error(message: &str) -> String {
    format!("⚠️ {}", message)
}

// Text stand-in for the circular progress ring: the filled portion of the bar
// is the arc fraction of the full width.
fn score_ring(score: f64) -> String {
    let filled = (score_arc_fraction(score) * RING_SEGMENTS as f64).round() as usize;
    let mut ring = "█".repeat(filled);
    ring.push_str(&"░".repeat(RING_SEGMENTS - filled));
    ring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    fn trash_result() -> AnalysisResult {
        AnalysisResult {
            verdict: Verdict::Trash,
            score: 2.5,
            roast: "There are literally 47 dog walking apps.".to_string(),
            name_rating: "Cringe".to_string(),
            competitors: vec![
                "Rover".to_string(),
                "Wag".to_string(),
                "Barkly".to_string(),
            ],
            advice: None,
            market_size: None,
            originality_score: None,
            execution_difficulty: None,
        }
    }

    #[test]
    fn test_card_shows_score_and_overflow_chips() {
        let card = render_card(&trash_result());

        assert!(card.contains("🗑️ TRASH"));
        assert!(card.contains("Viability Score: 2.5/10"));
        assert!(card.contains("Rover  Wag  +1"));
    }

    #[test]
    fn test_card_omits_absent_sections() {
        let mut result = trash_result();
        result.competitors.clear();
        result.name_rating.clear();

        let card = render_card(&result);
        assert!(!card.contains("Competitors Found"));
        assert!(!card.contains("Name Rating"));
        assert!(!card.contains("Constructive Advice"));
    }

    #[test]
    fn test_card_renders_optional_sections_when_present() {
        let mut result = trash_result();
        result.advice = Some("Pivot.".to_string());
        result.market_size = Some("Saturated".to_string());
        result.execution_difficulty = Some("Medium".to_string());

        let card = render_card(&result);
        assert!(card.contains("Constructive Advice\nPivot."));
        assert!(card.contains("Market Size\nSaturated"));
        assert!(card.contains("Execution Difficulty\nMedium"));
    }

    #[test]
    fn test_ring_fill_tracks_arc_fraction() {
        assert_eq!(score_ring(0.0), "░".repeat(20));
        assert_eq!(score_ring(10.0), "█".repeat(20));
        assert_eq!(score_ring(12.0), "█".repeat(20));
        assert_eq!(score_ring(5.0), format!("{}{}", "█".repeat(10), "░".repeat(10)));
    }

    #[test]
    fn test_error_line() {
        assert_eq!(render_error("nope"), "⚠️ nope");
    }
}
