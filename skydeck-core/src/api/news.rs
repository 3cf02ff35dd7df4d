//! News fetcher: recent headlines mentioning a place
//!
//! GNews search endpoint. Best-effort by contract - callers log failures
//! and fall back to an empty list; nothing here ever reaches the
//! user-facing error state.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::ApiError;
use crate::state::NewsArticle;

/// Production endpoint.
pub const GNEWS_API_URL: &str = "https://gnews.io/api/v4";

/// Headline cap, mirrored in the request's `max` parameter.
pub const MAX_ARTICLES: usize = 5;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<ArticleBody>,
}

#[derive(Debug, Deserialize)]
struct ArticleBody {
    title: String,
    url: String,
    source: SourceBody,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SourceBody {
    name: String,
}

pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: GNEWS_API_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different server (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch up to [`MAX_ARTICLES`] recent articles mentioning `city`.
    pub async fn headlines(&self, city: &str) -> Result<Vec<NewsArticle>, ApiError> {
        let url = format!(
            "{}/search?q={}&lang=en&max={}&token={}",
            self.base_url,
            urlencoding::encode(city),
            MAX_ARTICLES,
            self.api_key
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let body: NewsResponse = response.json().await?;
        let articles: Vec<NewsArticle> = body
            .articles
            .into_iter()
            .take(MAX_ARTICLES)
            .map(|a| NewsArticle {
                title: a.title,
                url: a.url,
                source: a.source.name,
                published_at: a.published_at,
            })
            .collect();
        debug!(city, count = articles.len(), "news fetched");
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_response() {
        let raw = r#"{
            "totalArticles": 2,
            "articles": [
                {
                    "title": "Storm warning issued",
                    "description": "ignored",
                    "url": "https://news.example/storm",
                    "publishedAt": "2024-09-17T08:30:00Z",
                    "source": {"name": "Example News", "url": "https://news.example"}
                },
                {
                    "title": "Transit strike continues",
                    "url": "https://news.example/strike",
                    "publishedAt": "2024-09-16T19:05:00Z",
                    "source": {"name": "Wire"}
                }
            ]
        }"#;

        let body: NewsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.articles.len(), 2);
        assert_eq!(body.articles[0].title, "Storm warning issued");
        assert_eq!(body.articles[1].source.name, "Wire");
    }

    #[test]
    fn test_parse_tolerates_missing_articles() {
        let body: NewsResponse = serde_json::from_str(r#"{"totalArticles":0}"#).unwrap();
        assert!(body.articles.is_empty());
    }
}
