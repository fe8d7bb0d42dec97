//! One analysis run: URL → comments → tally + keywords.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cleaner::clean_all;
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::keywords::{frequency_distribution, Stopwords};
use crate::report::AnalysisReport;
use crate::sentiment::{analyze_sentiment, SentimentAnalyzer};
use crate::youtube::{fetch_all_comments, YouTubeClient};

pub const NO_COMMENTS_MESSAGE: &str = "No comments found for this video.";
pub const INSUFFICIENT_DATA_MESSAGE: &str =
    "Not enough text left in the comments to analyze after cleaning.";

/// Take the video id from a watch URL: everything after the first `v=`,
/// up to the next `&` or `#`.
pub fn extract_video_id(url: &str) -> Result<String> {
    let (_, after) = url
        .split_once("v=")
        .ok_or_else(|| AnalysisError::invalid_url(format!("no 'v=' parameter in '{}'", url.trim())))?;

    let video_id = after
        .split(|c: char| c == '&' || c == '#')
        .next()
        .unwrap_or_default()
        .trim();

    if video_id.is_empty() {
        return Err(AnalysisError::invalid_url(format!(
            "empty video id in '{}'",
            url.trim()
        )));
    }
    Ok(video_id.to_string())
}

/// Non-error results of a run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    #[serde(rename = "ok")]
    Report { report: AnalysisReport },
    NoComments { video_id: String, message: String },
    InsufficientData {
        video_id: String,
        comment_count: usize,
        message: String,
    },
}

impl AnalysisOutcome {
    pub fn message(&self) -> String {
        match self {
            AnalysisOutcome::Report { report } => report.summary.clone(),
            AnalysisOutcome::NoComments { message, .. } => message.clone(),
            AnalysisOutcome::InsufficientData { message, .. } => message.clone(),
        }
    }
}

/// Shared, read-only resources for every run. Built once at startup.
#[derive(Debug, Clone)]
pub struct Pipeline {
    client: YouTubeClient,
    analyzer: SentimentAnalyzer,
    stopwords: Stopwords,
    max_pages: usize,
}

impl Pipeline {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let analyzer = SentimentAnalyzer::new();
        let stopwords = Stopwords::english();
        info!(
            "📚 Loaded {} lexicon entries and {} stopwords",
            analyzer.lexicon().len(),
            stopwords.len()
        );

        Ok(Self {
            client: YouTubeClient::new(config)?,
            analyzer,
            stopwords,
            max_pages: config.max_pages,
        })
    }

    /// Run the full pipeline for a submitted URL.
    pub async fn run(&self, url: &str) -> Result<AnalysisOutcome> {
        let run_id = Uuid::new_v4();
        let video_id = extract_video_id(url)?;
        info!("🚀 [{}] Analyzing video {}", run_id, video_id);

        let comments = fetch_all_comments(&self.client, &video_id, self.max_pages).await?;
        Ok(self.analyze(run_id, &video_id, &comments))
    }

    /// Classify and count an already fetched comment batch.
    pub fn analyze(&self, run_id: Uuid, video_id: &str, comments: &[String]) -> AnalysisOutcome {
        if comments.is_empty() {
            info!("📭 [{}] {} has no comments", run_id, video_id);
            return AnalysisOutcome::NoComments {
                video_id: video_id.to_string(),
                message: NO_COMMENTS_MESSAGE.to_string(),
            };
        }

        let cleaned = clean_all(comments);
        let insufficient = || AnalysisOutcome::InsufficientData {
            video_id: video_id.to_string(),
            comment_count: comments.len(),
            message: INSUFFICIENT_DATA_MESSAGE.to_string(),
        };

        if cleaned.iter().all(|c| c.is_empty()) {
            warn!("⚠️ [{}] All {} comments are empty after cleaning", run_id, comments.len());
            return insufficient();
        }

        let tally = match analyze_sentiment(&self.analyzer, &cleaned) {
            Ok(tally) => tally,
            Err(e) => {
                warn!("⚠️ [{}] {}", run_id, e);
                return insufficient();
            }
        };

        let distribution = frequency_distribution(comments, &self.stopwords);
        let report = AnalysisReport::build(run_id, video_id, comments.len(), tally, distribution);
        info!("✅ [{}] {}", run_id, report.summary);

        AnalysisOutcome::Report { report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> Pipeline {
        Pipeline::new(&Config::default()).unwrap()
    }

    fn comments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_video_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://m.youtube.com/watch?feature=share&v=abc123#comments").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_url_without_v_is_input_error() {
        let err = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl(_)));
        assert_eq!(err.kind(), "input");
        assert!(err.to_string().contains("no 'v=' parameter"));

        assert!(matches!(extract_video_id(""), Err(AnalysisError::InvalidUrl(_))));
        assert!(matches!(
            extract_video_id("https://www.youtube.com/watch?v="),
            Err(AnalysisError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_run_rejects_bad_url_without_fetching() {
        let err = pipeline().run("not a url").await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_run_without_api_key_is_auth_error() {
        let err = pipeline()
            .run("https://www.youtube.com/watch?v=abc")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Auth(_)));
    }

    #[test]
    fn test_no_comments() {
        let outcome = pipeline().analyze(Uuid::new_v4(), "abc", &[]);
        assert!(matches!(outcome, AnalysisOutcome::NoComments { .. }));
        assert_eq!(outcome.message(), NO_COMMENTS_MESSAGE);
    }

    #[test]
    fn test_all_empty_after_cleaning() {
        let batch = comments(&["😀😀", "123 456", "https://spam.example"]);
        let outcome = pipeline().analyze(Uuid::new_v4(), "abc", &batch);
        match outcome {
            AnalysisOutcome::InsufficientData { comment_count, .. } => assert_eq!(comment_count, 3),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_full_report() {
        let batch = comments(&["I love this!", "I hate this.", "This is a video."]);
        let outcome = pipeline().analyze(Uuid::new_v4(), "abc", &batch);
        let report = match outcome {
            AnalysisOutcome::Report { report } => report,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert_eq!(report.comment_count, 3);
        assert!((report.sentiment.positive - 33.33).abs() < 0.1);
        assert!((report.sentiment.neutral - 33.33).abs() < 0.1);
        assert!((report.sentiment.negative - 33.33).abs() < 0.1);

        let terms: Vec<_> = report.bar_chart.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(terms, vec!["love", "hate", "video"]);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = pipeline().analyze(Uuid::new_v4(), "abc", &[]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "no_comments");
        assert_eq!(json["message"], NO_COMMENTS_MESSAGE);
    }
}
