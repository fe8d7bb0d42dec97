//! Presentation payloads for one analysis run.
//!
//! Nothing here draws; it shapes the tally and keyword counts into what a
//! pie chart, a bar chart and a word cloud need.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::keywords::{KeywordCount, TOP_KEYWORDS};
use crate::sentiment::SentimentTally;

/// Slice colours in positive, neutral, negative order
pub const SENTIMENT_COLORS: [&str; 3] = ["#ff9999", "#66b3ff", "#99ff99"];
/// Offset of the first (positive) slice
pub const PIE_EXPLODE: f64 = 0.1;
/// Terms handed to the word cloud
pub const WORD_CLOUD_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub explode: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub video_id: String,
    pub comment_count: usize,
    pub generated_at: DateTime<Utc>,
    /// Raw percentage mapping
    pub sentiment: SentimentTally,
    /// Tally as one line of text
    pub summary: String,
    pub pie_chart: Vec<PieSlice>,
    /// Top keywords, most frequent first
    pub bar_chart: Vec<Bar>,
    /// Frequency mapping for the word cloud
    pub word_cloud: Vec<KeywordCount>,
}

impl AnalysisReport {
    /// `distribution` is the full ordered keyword distribution.
    pub fn build(
        run_id: Uuid,
        video_id: &str,
        comment_count: usize,
        sentiment: SentimentTally,
        mut distribution: Vec<KeywordCount>,
    ) -> Self {
        distribution.truncate(WORD_CLOUD_LIMIT);

        let pie_chart = pie_slices(&sentiment);
        let bar_chart = distribution
            .iter()
            .take(TOP_KEYWORDS)
            .map(|k| Bar {
                label: k.term.clone(),
                value: k.count,
            })
            .collect();

        Self {
            run_id,
            video_id: video_id.to_string(),
            comment_count,
            generated_at: Utc::now(),
            summary: format!("Sentiment analysis results: {}", sentiment.summary()),
            sentiment,
            pie_chart,
            bar_chart,
            word_cloud: distribution,
        }
    }

    /// Plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Video: {} ({} comments)\n", self.video_id, self.comment_count));
        out.push_str(&self.summary);
        out.push_str("\n\nSentiment\n");
        for slice in &self.pie_chart {
            out.push_str(&format!("  {:<10} {:>6.1}%\n", slice.label, slice.value));
        }

        out.push_str("\nTop keywords\n");
        if self.bar_chart.is_empty() {
            out.push_str("  (no keywords left after filtering)\n");
        }
        for bar in &self.bar_chart {
            out.push_str(&format!("  {:<16} {:>5}\n", bar.label, bar.value));
        }

        if !self.word_cloud.is_empty() {
            let cloud: Vec<String> = self
                .word_cloud
                .iter()
                .map(|k| format!("{}({})", k.term, k.count))
                .collect();
            out.push_str("\nWord cloud\n  ");
            out.push_str(&cloud.join(" "));
            out.push('\n');
        }
        out
    }
}

fn pie_slices(tally: &SentimentTally) -> Vec<PieSlice> {
    tally
        .entries()
        .iter()
        .zip(SENTIMENT_COLORS.iter())
        .enumerate()
        .map(|(i, ((sentiment, value), color))| PieSlice {
            label: sentiment.label().to_string(),
            value: *value,
            color: color.to_string(),
            explode: if i == 0 { PIE_EXPLODE } else { 0.0 },
        })
        .collect()
}
