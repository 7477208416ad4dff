pub mod catalog;
pub mod listing;
pub mod query;
pub mod rating;

pub use catalog::{ListingCatalog, ListingSource};
pub use listing::{BadgeColor, Listing, ListingOwner, SkillLevel};
pub use query::{CategoryFilter, LevelFilter, QueryState, SortMode};
pub use rating::StarBreakdown;
