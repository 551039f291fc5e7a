//! Whole-game aggregation of move classifications.
//!
//! `GameReview` is an append-only, ordered history of classification
//! records plus the summaries a report needs: per-side accuracy, label
//! distribution, standout best moves, and the worst mistakes.

use chrono::{Local, NaiveDateTime};

use crate::analysis::move_classifier::{ClassificationRecord, MoveClassification};
use crate::game_state::checkers_types::Color;
use crate::utils::notation::move_to_text;

/// Label counts and accuracy for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerStats {
    pub best: usize,
    pub good: usize,
    pub inaccuracy: usize,
    pub blunder: usize,
    pub total_moves: usize,
    /// `(best + good) / total * 100`, or 0 with no moves.
    pub accuracy: f64,
}

/// Label counts and percentages across both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QualityDistribution {
    pub total_moves: usize,
    pub counts: [usize; 4],
    pub percentages: [f64; 4],
}

impl QualityDistribution {
    pub fn count(&self, classification: MoveClassification) -> usize {
        self.counts[label_index(classification)]
    }

    pub fn percentage(&self, classification: MoveClassification) -> f64 {
        self.percentages[label_index(classification)]
    }
}

fn label_index(classification: MoveClassification) -> usize {
    match classification {
        MoveClassification::Best => 0,
        MoveClassification::Good => 1,
        MoveClassification::Inaccuracy => 2,
        MoveClassification::Blunder => 3,
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameReview {
    records: Vec<ClassificationRecord>,
}

impl GameReview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ClassificationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn by_side(&self, side: Color) -> impl Iterator<Item = &ClassificationRecord> + '_ {
        self.records.iter().filter(move |r| r.side == side)
    }

    pub fn player_stats(&self, side: Color) -> PlayerStats {
        let mut stats = PlayerStats::default();
        for record in self.by_side(side) {
            stats.total_moves += 1;
            match record.classification {
                MoveClassification::Best => stats.best += 1,
                MoveClassification::Good => stats.good += 1,
                MoveClassification::Inaccuracy => stats.inaccuracy += 1,
                MoveClassification::Blunder => stats.blunder += 1,
            }
        }
        if stats.total_moves > 0 {
            stats.accuracy = (stats.best + stats.good) as f64 / stats.total_moves as f64 * 100.0;
        }
        stats
    }

    pub fn distribution(&self) -> QualityDistribution {
        let mut dist = QualityDistribution {
            total_moves: self.records.len(),
            ..QualityDistribution::default()
        };
        for record in &self.records {
            dist.counts[label_index(record.classification)] += 1;
        }
        if dist.total_moves > 0 {
            for (pct, count) in dist.percentages.iter_mut().zip(dist.counts) {
                *pct = count as f64 / dist.total_moves as f64 * 100.0;
            }
        }
        dist
    }

    /// `side`'s best-labelled moves in game order.
    pub fn best_moves(&self, side: Color, limit: usize) -> Vec<&ClassificationRecord> {
        let mut picked: Vec<&ClassificationRecord> = self
            .by_side(side)
            .filter(|r| r.classification == MoveClassification::Best)
            .collect();
        picked.sort_by_key(|r| r.move_number);
        picked.truncate(limit);
        picked
    }

    /// `side`'s blunders, largest loss first.
    pub fn blunders(&self, side: Color, limit: usize) -> Vec<&ClassificationRecord> {
        self.worst_of(side, MoveClassification::Blunder, limit)
    }

    /// `side`'s inaccuracies, largest loss first.
    pub fn inaccuracies(&self, side: Color, limit: usize) -> Vec<&ClassificationRecord> {
        self.worst_of(side, MoveClassification::Inaccuracy, limit)
    }

    fn worst_of(
        &self,
        side: Color,
        classification: MoveClassification,
        limit: usize,
    ) -> Vec<&ClassificationRecord> {
        let mut picked: Vec<&ClassificationRecord> = self
            .by_side(side)
            .filter(|r| r.classification == classification)
            .collect();
        picked.sort_by(|a, b| b.loss.cmp(&a.loss));
        picked.truncate(limit);
        picked
    }

    /// Plain-text report stamped with the current local time.
    pub fn render_report(&self, result_line: Option<&str>) -> String {
        self.render_report_at(result_line, Local::now().naive_local())
    }

    pub fn render_report_at(&self, result_line: Option<&str>, generated: NaiveDateTime) -> String {
        if self.records.is_empty() {
            return "No moves to analyze.".to_owned();
        }

        let mut lines = Vec::<String>::new();
        lines.push("MOVE ANALYSIS REPORT".to_owned());
        lines.push("=".repeat(50));
        lines.push(format!("Generated: {}", generated.format("%Y-%m-%d %H:%M:%S")));
        if let Some(result) = result_line {
            lines.push(format!("Result: {result}"));
        }

        let dist = self.distribution();
        lines.push(format!("Total Moves Analyzed: {}", dist.total_moves));
        for (name, classification) in [
            ("Best Moves", MoveClassification::Best),
            ("Good Moves", MoveClassification::Good),
            ("Inaccuracies", MoveClassification::Inaccuracy),
            ("Blunders", MoveClassification::Blunder),
        ] {
            lines.push(format!(
                "{name}: {} ({:.1}%)",
                dist.count(classification),
                dist.percentage(classification)
            ));
        }
        lines.push(String::new());

        for side in [Color::Light, Color::Dark] {
            let stats = self.player_stats(side);
            lines.push(format!("{} PLAYER:", side.name().to_uppercase()));
            lines.push(format!("  Accuracy: {:.1}%", stats.accuracy));
            lines.push(format!("  Best Moves: {}", stats.best));
            lines.push(format!("  Good Moves: {}", stats.good));
            lines.push(format!("  Inaccuracies: {}", stats.inaccuracy));
            lines.push(format!("  Blunders: {}", stats.blunder));

            for record in self.best_moves(side, 3) {
                lines.push(format!(
                    "  + {}. {}",
                    record.move_number,
                    move_to_text(record.played)
                ));
            }
            for record in self.blunders(side, 3) {
                lines.push(format!(
                    "  ! {}. {}  {}",
                    record.move_number,
                    move_to_text(record.played),
                    record.rationale
                ));
            }
            lines.push(String::new());
        }

        lines.push("OVERALL GAME QUALITY:".to_owned());
        lines.push(format!(
            "  Best Move Rate: {:.1}%",
            dist.percentage(MoveClassification::Best)
        ));
        lines.push(format!(
            "  Blunder Rate: {:.1}%",
            dist.percentage(MoveClassification::Blunder)
        ));
        lines.push("=".repeat(50));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::{Move, Square};
    use chrono::NaiveDate;

    fn record(move_number: u32, side: Color, classification: MoveClassification, loss: i32) -> ClassificationRecord {
        ClassificationRecord {
            move_number,
            side,
            played: Move::new(Square::new(5, 2), Square::new(4, 3)),
            classification,
            loss,
            best_score: 0,
            played_score: 0,
            rationale: format!("loss {loss}"),
            top_moves: Vec::new(),
        }
    }

    fn sample() -> GameReview {
        let mut review = GameReview::new();
        review.push(record(1, Color::Light, MoveClassification::Best, 0));
        review.push(record(2, Color::Dark, MoveClassification::Blunder, 200));
        review.push(record(3, Color::Light, MoveClassification::Good, 50));
        review.push(record(4, Color::Dark, MoveClassification::Blunder, 400));
        review.push(record(5, Color::Light, MoveClassification::Inaccuracy, 120));
        review.push(record(6, Color::Dark, MoveClassification::Best, 10));
        review.push(record(7, Color::Light, MoveClassification::Best, 0));
        review
    }

    #[test]
    fn accuracy_counts_best_and_good() {
        let review = sample();
        let light = review.player_stats(Color::Light);
        assert_eq!(light.total_moves, 4);
        assert_eq!((light.best, light.good, light.inaccuracy, light.blunder), (2, 1, 1, 0));
        assert!((light.accuracy - 75.0).abs() < 1e-9);

        let dark = review.player_stats(Color::Dark);
        assert_eq!(dark.total_moves, 3);
        assert!((dark.accuracy - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_review_has_zero_accuracy() {
        let review = GameReview::new();
        assert_eq!(review.player_stats(Color::Light), PlayerStats::default());
        assert_eq!(review.distribution().total_moves, 0);
        assert_eq!(review.render_report(None), "No moves to analyze.");
    }

    #[test]
    fn distribution_sums_to_one_hundred_percent() {
        let dist = sample().distribution();
        assert_eq!(dist.total_moves, 7);
        assert_eq!(dist.count(MoveClassification::Best), 3);
        assert_eq!(dist.count(MoveClassification::Blunder), 2);
        let total: f64 = dist.percentages.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn history_keeps_insertion_order() {
        let review = sample();
        let numbers: Vec<u32> = review.records().iter().map(|r| r.move_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(review.len(), 7);
    }

    #[test]
    fn best_moves_are_in_game_order_and_blunders_worst_first() {
        let review = sample();
        let best: Vec<u32> = review.best_moves(Color::Light, 5).iter().map(|r| r.move_number).collect();
        assert_eq!(best, vec![1, 7]);
        assert_eq!(review.best_moves(Color::Light, 1).len(), 1);

        let blunders: Vec<i32> = review.blunders(Color::Dark, 5).iter().map(|r| r.loss).collect();
        assert_eq!(blunders, vec![400, 200]);
        assert_eq!(review.inaccuracies(Color::Light, 5).len(), 1);
        assert!(review.blunders(Color::Light, 5).is_empty());
    }

    #[test]
    fn report_lists_totals_and_players() {
        let generated = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 0))
            .expect("valid timestamp");
        let report = sample().render_report_at(Some("light wins"), generated);

        assert!(report.starts_with("MOVE ANALYSIS REPORT\n"));
        assert!(report.contains("Generated: 2024-03-09 14:05:00"));
        assert!(report.contains("Result: light wins"));
        assert!(report.contains("Total Moves Analyzed: 7"));
        assert!(report.contains("Blunders: 2 (28.6%)"));
        assert!(report.contains("LIGHT PLAYER:\n  Accuracy: 75.0%"));
        assert!(report.contains("DARK PLAYER:\n  Accuracy: 33.3%"));
        assert!(report.contains("  ! 4. c3-d4  loss 400"));
        assert!(report.contains(
            "OVERALL GAME QUALITY:\n  Best Move Rate: 42.9%\n  Blunder Rate: 28.6%"
        ));
    }
}
