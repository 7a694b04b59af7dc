//! HTTP client for the static posts document.

use std::time::Duration;

use url::Url;

use crate::{types::Post, Error};

/// Path of the posts document relative to the site root.
pub const DEFAULT_DOCUMENT_PATH: &str = "/posts.json";

/// Fetches the posts document with a single GET. No pagination, no
/// conditional requests: every call downloads and replaces the whole array.
pub struct Client {
    document_url: String,
    timeout: Option<Duration>,
}

impl Client {
    /// Creates a client for a fully qualified document URL.
    pub fn new(document_url: &str) -> Self {
        Self {
            document_url: document_url.to_string(),
            timeout: None,
        }
    }

    /// Creates a client for `{base_url}/posts.json`. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(&format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            DEFAULT_DOCUMENT_PATH
        ))
    }

    /// Bounds the whole request. A request that runs past it fails like any
    /// other network error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn document_url(&self) -> &str {
        &self.document_url
    }

    fn get_url(&self) -> Result<Url, Error> {
        Url::parse(&self.document_url).map_err(|e| {
            tracing::warn!("Invalid document URL {}: {}", self.document_url, e);
            Error::InvalidUrl(self.document_url.clone())
        })
    }

    /// Downloads and decodes the posts document.
    pub async fn get_posts(&self) -> Result<Vec<Post>, Error> {
        let url = self.get_url()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            tracing::warn!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to get posts document: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::warn!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        parse_document(&body)
    }
}

/// Decodes a posts document: a JSON array of [`Post`] objects.
pub fn parse_document(body: &str) -> Result<Vec<Post>, Error> {
    serde_json::from_str::<Vec<Post>>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::warn!("Failed to parse posts document: {} | body: {}", e, snippet);
        Error::MalformedDocument(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_joins_document_path() {
        let client = Client::with_base_url("http://127.0.0.1:9000/");
        assert_eq!(client.document_url(), "http://127.0.0.1:9000/posts.json");
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_document("{\"posts\": []}").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn parse_accepts_empty_array() {
        assert!(parse_document("[]").unwrap().is_empty());
    }
}
