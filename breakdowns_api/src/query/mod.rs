mod choice;
pub use self::choice::{MethodChoice, SectorChoice, ALL, METHOD_OPTIONS};

mod filter;
pub use self::filter::{filter_posts, FilterState, PostPredicate, TextQuery};
