//! Reader selection: which single post, if any, is open for detail viewing.

use std::sync::Arc;

use breakdowns_api::types::Post;

/// At most one open post, held by shared handle rather than by copy.
///
/// Opening always replaces whatever was open. There is no history.
#[derive(Clone, Debug, Default)]
pub enum Reader {
    #[default]
    Closed,
    Open(Arc<Post>),
}

impl Reader {
    pub fn open(&mut self, post: Arc<Post>) {
        *self = Reader::Open(post);
    }

    /// No-op when already closed.
    pub fn close(&mut self) {
        *self = Reader::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Reader::Open(_))
    }

    pub fn current(&self) -> Option<&Arc<Post>> {
        match self {
            Reader::Closed => None,
            Reader::Open(post) => Some(post),
        }
    }
}

/// Two readers are equal when both are closed or both hold the same handle.
impl PartialEq for Reader {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Reader::Closed, Reader::Closed) => true,
            (Reader::Open(a), Reader::Open(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
