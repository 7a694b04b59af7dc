//! Library layer for Company Breakdowns: the post repository, the reader
//! selection state, the interactive session and display derivations.
//!
//! Wraps the `breakdowns_api` crate, which owns the wire types, the posts
//! client and the pure filter engine.

pub mod config;
pub mod display;
pub mod error;
pub mod reader;
pub mod repository;
pub mod selection;
pub mod session;
pub mod validation;

pub use breakdowns_api;
pub use breakdowns_api::types;
pub use breakdowns_api::{
    filter_posts, FilterState, MethodChoice, PostPredicate, SectorChoice, ALL, METHOD_OPTIONS,
};

pub use config::CatalogConfig;
pub use display::UpsideBand;
pub use error::BreakdownsError;
pub use reader::ReaderView;
pub use repository::{distinct_sectors, PostRepository, PostSource};
pub use selection::Reader;
pub use session::{Intent, Session, Theme};
