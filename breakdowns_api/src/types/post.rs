use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Content, Valuation};

pub type PostID = String;

/// One equity-research write-up. Immutable once loaded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostID,

    pub title: String,

    pub ticker: String,

    pub company: String,

    pub sector: String,

    /// ISO calendar date as authored, e.g. `2025-03-14`.
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    pub summary: String,

    pub valuation: Valuation,

    pub content: Content,
}

impl Post {
    /// Parses `date` as a calendar date. `None` when the document carries
    /// something other than `YYYY-MM-DD`.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// The text the free-text query is matched against.
    pub fn search_haystack(&self) -> String {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.ticker.as_str(),
            self.summary.as_str(),
            self.tags.join(" ").as_str(),
            self.sector.as_str(),
        ]
        .join(" ")
    }
}

impl AsRef<Post> for Post {
    fn as_ref(&self) -> &Post {
        self
    }
}
