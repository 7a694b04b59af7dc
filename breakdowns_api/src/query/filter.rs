//! The filter engine: three independent predicates over a post, combined by AND.

use crate::types::Post;

use super::{MethodChoice, SectorChoice};

/// A pure yes/no test on a single post.
pub trait PostPredicate {
    fn matches(&self, post: &Post) -> bool;
}

/// Case-insensitive substring match over title, company, ticker, summary,
/// tags and sector. The empty query matches every post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl PostPredicate for TextQuery {
    fn matches(&self, post: &Post) -> bool {
        self.is_empty() || post.search_haystack().to_lowercase().contains(&self.needle)
    }
}

impl PostPredicate for SectorChoice {
    fn matches(&self, post: &Post) -> bool {
        match self {
            SectorChoice::All => true,
            SectorChoice::Sector(sector) => post.sector == *sector,
        }
    }
}

impl PostPredicate for MethodChoice {
    fn matches(&self, post: &Post) -> bool {
        match self {
            MethodChoice::All => true,
            MethodChoice::Method(method) => {
                method.is_recognized() && post.valuation.method == *method
            }
        }
    }
}

/// The user's current narrowing criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text as typed. Lowercased at match time.
    pub query: String,
    pub sector: SectorChoice,
    pub method: MethodChoice,
}

impl FilterState {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_sector(mut self, sector: SectorChoice) -> Self {
        self.sector = sector;
        self
    }

    pub fn with_method(mut self, method: MethodChoice) -> Self {
        self.method = method;
        self
    }

    /// True when no criterion narrows the collection.
    pub fn is_neutral(&self) -> bool {
        self.query.is_empty()
            && self.sector == SectorChoice::All
            && self.method == MethodChoice::All
    }
}

impl PostPredicate for FilterState {
    fn matches(&self, post: &Post) -> bool {
        TextQuery::new(&self.query).matches(post)
            && self.sector.matches(post)
            && self.method.matches(post)
    }
}

/// Returns the posts satisfying `state`, in their original order.
///
/// Accepts anything that can be viewed as a [`Post`] so callers holding
/// `Arc<Post>` get references to their own handles back.
pub fn filter_posts<'a, P: AsRef<Post>>(posts: &'a [P], state: &FilterState) -> Vec<&'a P> {
    let text = TextQuery::new(&state.query);
    posts
        .iter()
        .filter(|p| {
            let post: &Post = AsRef::<Post>::as_ref(*p);
            text.matches(post) && state.sector.matches(post) && state.method.matches(post)
        })
        .collect()
}
