use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;

use crate::config::FetchConfig;
use crate::error::Result;
use crate::yt::search::{self, SearchOptions};
use crate::yt::types::{SearchResultItem, VideoDetail};
use crate::yt::videos;

/// Fetches pages and hands the body to the extractors. Holds no state beyond
/// the HTTP client, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct YouTube {
    http: reqwest::Client,
}

impl YouTube {
    pub fn new() -> Result<Self> {
        Self::with_config(&FetchConfig::default())
    }

    pub fn with_config(config: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&config.accept_language) {
            Ok(lang) => {
                headers.insert(ACCEPT_LANGUAGE, lang);
            }
            Err(err) => log::warn!(
                "dropping Accept-Language {:?}: {err}",
                config.accept_language
            ),
        }
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(Policy::limited(config.max_redirects))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http })
    }

    pub async fn search(&self, options: &SearchOptions) -> Result<Vec<SearchResultItem>> {
        let url = search::search_url(&options.search_terms)?;
        let body = self.page(&url).await?;
        search::parse_search(&body, options.limit)
    }

    pub async fn video_info(&self, url: &str) -> Result<VideoDetail> {
        let id = videos::validate_video_url(url)?;
        let body = self.page(&videos::watch_url(id)).await?;
        videos::parse_video_detail(&body)
    }

    /// Raw page body. Non-success statuses and redirect-limit overruns surface
    /// as `Error::Http`.
    pub async fn page(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }
}
