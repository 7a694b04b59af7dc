//! The post repository: the loaded collection and what is derived from it.
//!
//! Loading degrades silently. Any failure (network, HTTP status, unreadable
//! file, malformed JSON, a body that is not an array of posts) leaves the
//! repository empty and is only logged at `warn`. Callers never see an error
//! and the load is never retried.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use breakdowns_api::types::Post;
use breakdowns_api::{parse_document, Client, ALL, METHOD_OPTIONS};

use crate::error::BreakdownsError;

/// Where the posts document comes from.
pub enum PostSource {
    /// Fetched with a single HTTP GET.
    Remote(Client),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl PostSource {
    /// `http://` and `https://` locations are fetched, whatever the scheme's
    /// case; anything else is a path.
    pub fn from_location(location: &str, timeout: Duration) -> Self {
        if has_scheme(location, "http://") || has_scheme(location, "https://") {
            PostSource::Remote(Client::new(location).with_timeout(timeout))
        } else {
            PostSource::File(PathBuf::from(location))
        }
    }

    /// Fetches and decodes the document, reporting failures.
    pub async fn fetch(&self) -> Result<Vec<Post>, BreakdownsError> {
        match self {
            PostSource::Remote(client) => Ok(client.get_posts().await?),
            PostSource::File(path) => {
                let body = tokio::fs::read_to_string(path).await?;
                Ok(parse_document(&body)?)
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            PostSource::Remote(client) => client.document_url().to_string(),
            PostSource::File(path) => path.display().to_string(),
        }
    }
}

fn has_scheme(location: &str, scheme: &str) -> bool {
    location
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// Owns the loaded posts. Replaced wholesale on reload, never edited in place.
#[derive(Clone, Debug, Default)]
pub struct PostRepository {
    posts: Vec<Arc<Post>>,
}

impl PostRepository {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: posts.into_iter().map(Arc::new).collect(),
        }
    }

    /// Loads the collection from `source`, or returns an empty repository
    /// if anything goes wrong.
    pub async fn load(source: &PostSource) -> Self {
        match source.fetch().await {
            Ok(posts) => {
                tracing::debug!("Loaded {} posts from {}", posts.len(), source.describe());
                Self::from_posts(posts)
            }
            Err(e) => {
                tracing::warn!("Loading posts from {} failed: {}", source.describe(), e);
                Self::empty()
            }
        }
    }

    /// Replaces the whole collection with a fresh load.
    pub async fn reload(&mut self, source: &PostSource) {
        *self = Self::load(source).await;
    }

    pub fn posts(&self) -> &[Arc<Post>] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Looks a post up by its identity key.
    pub fn find(&self, id: &str) -> Option<&Arc<Post>> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// `"All"` followed by each sector present, in first-occurrence order.
    pub fn distinct_sectors(&self) -> Vec<String> {
        distinct_sectors(&self.posts)
    }

    /// The fixed method options. Not derived from the loaded posts.
    pub fn method_options() -> &'static [&'static str] {
        &METHOD_OPTIONS
    }
}

/// `"All"` followed by every distinct `sector`, first occurrence first.
pub fn distinct_sectors<P: AsRef<Post>>(posts: &[P]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut sectors = vec![ALL.to_string()];
    for p in posts {
        let post: &Post = AsRef::<Post>::as_ref(p);
        if seen.insert(post.sector.as_str()) {
            sectors.push(post.sector.clone());
        }
    }
    sectors
}
