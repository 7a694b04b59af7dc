mod valuation;
pub use self::valuation::{Valuation, ValuationMethod};

mod content;
pub use self::content::{Content, DcfSnapshot, Link, Multiples, PeerMultiple, QuickMetric};

mod post;
pub use self::post::{Post, PostID};
