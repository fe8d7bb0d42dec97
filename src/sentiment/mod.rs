//! Sentiment classification of cleaned comments.
//!
//! Each comment gets a compound score from [`SentimentAnalyzer`] and falls
//! into one of three buckets; the buckets are then turned into percentages.

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{PolarityScores, SentimentAnalyzer};
pub use lexicon::Lexicon;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AnalysisError, Result};

/// Compound score at or above which a comment is positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a comment is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bucket a compound score
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// Share of each sentiment bucket over one comment batch, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SentimentTally {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub total: usize,
}

impl SentimentTally {
    /// Build percentages from bucket counts. Fails on an all-zero batch
    /// instead of dividing by zero.
    pub fn from_counts(positive: usize, neutral: usize, negative: usize) -> Result<Self> {
        let total = positive + neutral + negative;
        if total == 0 {
            return Err(AnalysisError::insufficient_data(
                "no comments to compute sentiment percentages from",
            ));
        }

        let pct = |count: usize| count as f64 / total as f64 * 100.0;

        Ok(Self {
            positive: pct(positive),
            neutral: pct(neutral),
            negative: pct(negative),
            positive_count: positive,
            neutral_count: neutral,
            negative_count: negative,
            total,
        })
    }

    /// Percentage for a bucket
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Buckets in display order with their percentages
    pub fn entries(&self) -> [(Sentiment, f64); 3] {
        [
            (Sentiment::Positive, self.positive),
            (Sentiment::Neutral, self.neutral),
            (Sentiment::Negative, self.negative),
        ]
    }

    /// One-line text form of the tally
    pub fn summary(&self) -> String {
        format!(
            "positive: {:.2}%, neutral: {:.2}%, negative: {:.2}% ({} comments)",
            self.positive, self.neutral, self.negative, self.total
        )
    }
}

/// Classify every comment and aggregate the buckets into percentages.
pub fn analyze_sentiment(analyzer: &SentimentAnalyzer, comments: &[String]) -> Result<SentimentTally> {
    let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);

    for comment in comments {
        let scores = analyzer.polarity_scores(comment);
        match Sentiment::from_compound(scores.compound) {
            Sentiment::Positive => positive += 1,
            Sentiment::Neutral => neutral += 1,
            Sentiment::Negative => negative += 1,
        }
    }

    tracing::debug!(
        "🧠 Sentiment buckets: {} positive, {} neutral, {} negative",
        positive,
        neutral,
        negative
    );

    SentimentTally::from_counts(positive, neutral, negative)
}
