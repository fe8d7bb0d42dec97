//! YouTube Data API v3 comment retrieval
//!
//! `commentThreads.list` is paged with `nextPageToken`; pages are requested
//! one after another until a response comes back without a token.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AnalysisError, Result};

/// Largest page size the API accepts
pub const MAX_RESULTS_PER_PAGE: u32 = 100;

/// Error reasons that mean the API key itself was refused
const AUTH_REASONS: &[&str] = &[
    "keyInvalid",
    "keyExpired",
    "accessNotConfigured",
    "ipRefererBlocked",
    "authError",
    "API_KEY_INVALID",
    "API_KEY_SERVICE_BLOCKED",
];

/// Error reasons that mean "this video has no retrievable comments"
const UNAVAILABLE_REASONS: &[&str] = &["commentsDisabled", "videoNotFound"];

// ============================================================================
// Response Schema
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    items: Vec<CommentThread>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_original: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorReason>,
    #[serde(default)]
    details: Vec<ApiErrorReason>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorReason {
    #[serde(default)]
    reason: Option<String>,
}

// ============================================================================
// Pages
// ============================================================================

/// One page of top-level comment texts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentPage {
    pub comments: Vec<String>,
    pub next_page_token: Option<String>,
}

/// What a single page request produced
#[derive(Debug, Clone, PartialEq)]
pub enum PageResponse {
    Page(CommentPage),
    /// Comments are disabled or the video does not exist
    Unavailable(String),
}

/// Anything that can serve comment pages for a video.
#[allow(async_fn_in_trait)]
pub trait CommentPageSource {
    async fn fetch_page(&self, video_id: &str, page_token: Option<&str>) -> Result<PageResponse>;
}

/// Collect every top-level comment of a video, in API order.
///
/// Stops when a page has no continuation token or after `max_pages` pages.
/// An unavailable video yields an empty list. Any failure discards the pages
/// collected so far.
pub async fn fetch_all_comments<S: CommentPageSource>(
    source: &S,
    video_id: &str,
    max_pages: usize,
) -> Result<Vec<String>> {
    let mut comments = Vec::new();
    let mut page_token: Option<String> = None;

    for page_number in 1..=max_pages {
        let page = match source.fetch_page(video_id, page_token.as_deref()).await? {
            PageResponse::Page(page) => page,
            PageResponse::Unavailable(reason) => {
                info!("📭 No comments available for {}: {}", video_id, reason);
                return Ok(Vec::new());
            }
        };

        debug!(
            "📄 Page {} for {}: {} comments (more: {})",
            page_number,
            video_id,
            page.comments.len(),
            page.next_page_token.is_some()
        );
        comments.extend(page.comments);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => {
                info!("✅ Fetched {} comments for {} in {} pages", comments.len(), video_id, page_number);
                return Ok(comments);
            }
        }
    }

    warn!(
        "⚠️ Stopped after {} pages for {} ({} comments); more pages remain",
        max_pages,
        video_id,
        comments.len()
    );
    Ok(comments)
}

// ============================================================================
// HTTP Client
// ============================================================================

/// `commentThreads` client over reqwest
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

impl YouTubeClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout);

        if let Some(proxy) = &config.proxy {
            info!("📡 Routing API requests through proxy {}", proxy.url());
            builder = builder.proxy(proxy.to_reqwest()?);
        }

        Ok(Self {
            http: builder.build()?,
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl CommentPageSource for YouTubeClient {
    async fn fetch_page(&self, video_id: &str, page_token: Option<&str>) -> Result<PageResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AnalysisError::auth("YOUTUBE_API_KEY is not set"))?;

        let url = format!("{}/commentThreads", self.api_base);
        let max_results = MAX_RESULTS_PER_PAGE.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            parse_page(&body).map(PageResponse::Page)
        } else {
            interpret_error(status.as_u16(), &body)
        }
    }
}

/// Validate a success body against the response schema.
fn parse_page(body: &str) -> Result<CommentPage> {
    let response: CommentThreadListResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisError::fetch(format!("unexpected response shape: {}", e)))?;

    Ok(CommentPage {
        comments: response
            .items
            .into_iter()
            .map(|item| item.snippet.top_level_comment.snippet.text_original)
            .collect(),
        next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
    })
}

/// Map a non-success response onto the error taxonomy.
fn interpret_error(status: u16, body: &str) -> Result<PageResponse> {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();

    let reasons: Vec<String> = parsed
        .as_ref()
        .map(|r| {
            r.error
                .errors
                .iter()
                .chain(r.error.details.iter())
                .filter_map(|e| e.reason.clone())
                .collect()
        })
        .unwrap_or_default();

    let message = parsed
        .as_ref()
        .map(|r| r.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status));

    if status == 401 || reasons.iter().any(|r| AUTH_REASONS.contains(&r.as_str())) {
        return Err(AnalysisError::auth(message));
    }

    if let Some(reason) = reasons.iter().find(|r| UNAVAILABLE_REASONS.contains(&r.as_str())) {
        return Ok(PageResponse::Unavailable(reason.clone()));
    }

    if status == 404 {
        return Ok(PageResponse::Unavailable("videoNotFound".to_string()));
    }

    Err(AnalysisError::fetch(format!("HTTP {}: {}", status, message)))
}
