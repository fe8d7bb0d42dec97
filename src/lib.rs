//! YouTube comment sentiment analysis.
//!
//! Fetches the top-level comments of a video, cleans them, buckets each into
//! positive / neutral / negative and counts the most frequent keywords.

pub mod api;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod proxy;
pub mod report;
pub mod sentiment;
pub mod youtube;

pub use error::{AnalysisError, Result};
pub use pipeline::{AnalysisOutcome, Pipeline};
