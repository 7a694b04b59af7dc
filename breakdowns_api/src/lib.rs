mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{parse_document, Client, DEFAULT_DOCUMENT_PATH};
pub use self::errors::Error;
pub use self::query::{
    filter_posts, FilterState, MethodChoice, PostPredicate, SectorChoice, TextQuery, ALL,
    METHOD_OPTIONS,
};
