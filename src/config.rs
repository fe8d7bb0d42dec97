//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::time::Duration;

use crate::proxy::Proxy;

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_PAGES: usize = 50;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// YouTube Data API key; `None` makes every fetch fail with an auth error
    pub api_key: Option<String>,
    pub api_base: String,
    pub request_timeout: Duration,
    /// Upper bound on comment pages requested per run
    pub max_pages: usize,
    pub bind_addr: String,
    pub proxy: Option<Proxy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            proxy: None,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; malformed numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup("YOUTUBE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_base = lookup("YOUTUBE_API_BASE")
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or(defaults.api_base);

        let request_timeout = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let max_pages = lookup("MAX_COMMENT_PAGES")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|pages| *pages > 0)
            .unwrap_or(defaults.max_pages);

        let bind_addr = lookup("BIND_ADDR")
            .filter(|a| !a.trim().is_empty())
            .unwrap_or(defaults.bind_addr);

        let proxy = lookup("PROXY_URL")
            .filter(|p| !p.trim().is_empty())
            .and_then(|p| match Proxy::parse(&p) {
                Ok(proxy) => Some(proxy),
                Err(e) => {
                    tracing::warn!("⚠️ Ignoring PROXY_URL: {}", e);
                    None
                }
            });

        Self {
            api_key,
            api_base,
            request_timeout,
            max_pages,
            bind_addr,
            proxy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert!(config.api_key.is_none());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_pages, 50);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("YOUTUBE_API_KEY", " abc123 "),
            ("YOUTUBE_API_BASE", "http://localhost:9000/v3/"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("MAX_COMMENT_PAGES", "3"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("PROXY_URL", "user:pass@proxy.local:3128"),
        ]);
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.api_base, "http://localhost:9000/v3");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.proxy.unwrap().host, "proxy.local");
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = config_from(&[
            ("YOUTUBE_API_KEY", "   "),
            ("REQUEST_TIMEOUT_SECS", "soon"),
            ("MAX_COMMENT_PAGES", "0"),
            ("PROXY_URL", "no-port-here"),
        ]);
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
        assert!(config.proxy.is_none());
    }
}
