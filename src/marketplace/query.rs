use std::cmp::Ordering;
use std::str::FromStr;

use strum::Display;
use tracing::trace;

use super::catalog::ListingCatalog;
use super::listing::{Listing, SkillLevel};
use crate::error::QueryError;

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SortMode {
    /// Output equals filtered order; no reordering.
    #[default]
    Recommended,
    /// Descending by owner rating; ties keep filtered order.
    Rating,
    /// Ascending by title, natural collation.
    Alphabetical,
}

impl FromStr for SortMode {
    type Err = QueryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "recommended" => Ok(Self::Recommended),
            "rating" => Ok(Self::Rating),
            "alphabetical" => Ok(Self::Alphabetical),
            other => Err(QueryError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Category constraint; `All` matches every listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses the boundary token; the `"all"` sentinel clears the filter.
    /// Any other token is taken verbatim as a category label.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token == "all" {
            Self::All
        } else {
            Self::Only(token.to_string())
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => listing.category == *category,
        }
    }
}

/// Level constraint; `All` matches every listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Only(SkillLevel),
}

impl LevelFilter {
    /// Parses the boundary token; the `"all"` sentinel clears the filter,
    /// anything else must name a known level.
    pub fn parse(token: &str) -> Result<Self, QueryError> {
        if token == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(token.parse()?))
        }
    }

    fn matches(self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Only(level) => listing.level == level,
        }
    }
}

/// Live marketplace filter/sort configuration.
///
/// Defaults match the untouched search bar: empty text, every category,
/// every level, recommended order. Mutations are plain field updates
/// observed by the next [`QueryState::derive`] call; there is no terminal
/// state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    search_text: String,
    category: CategoryFilter,
    level: LevelFilter,
    sort_mode: SortMode,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_level(&mut self, level: LevelFilter) {
        self.level = level;
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.sort_mode = sort_mode;
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    #[must_use]
    pub fn level(&self) -> LevelFilter {
        self.level
    }

    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Derives the filtered, sorted view over `catalog`.
    ///
    /// Pure and idempotent: repeated calls with unchanged state and
    /// catalog return the same sequence. The filter predicates are
    /// conjunctive and side-effect free, so their evaluation order is
    /// irrelevant.
    #[must_use]
    pub fn derive<'a>(&self, catalog: &'a ListingCatalog) -> Vec<&'a Listing> {
        let needle = self.search_text.to_lowercase();

        let mut results: Vec<&Listing> = catalog
            .all()
            .iter()
            .filter(|listing| {
                matches_search(listing, &needle)
                    && self.category.matches(listing)
                    && self.level.matches(listing)
            })
            .collect();

        match self.sort_mode {
            SortMode::Recommended => {}
            SortMode::Rating => {
                // Stable: equal ratings keep their filtered order.
                results.sort_by(|a, b| {
                    b.owner
                        .rating()
                        .partial_cmp(&a.owner.rating())
                        .unwrap_or(Ordering::Equal)
                });
            }
            SortMode::Alphabetical => {
                // Caseless compare first, original case as tiebreak.
                results.sort_by(|a, b| {
                    a.title
                        .to_lowercase()
                        .cmp(&b.title.to_lowercase())
                        .then_with(|| a.title.cmp(&b.title))
                });
            }
        }

        trace!(
            matched = results.len(),
            sort = %self.sort_mode,
            "marketplace query derived"
        );
        results
    }
}

fn matches_search(listing: &Listing, needle: &str) -> bool {
    needle.is_empty()
        || listing.title.to_lowercase().contains(needle)
        || listing.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(results: &[&'a Listing]) -> Vec<&'a str> {
        results.iter().map(|l| l.title.as_str()).collect()
    }

    #[test]
    fn default_query_returns_catalog_order() {
        let catalog = ListingCatalog::seeded();
        let results = QueryState::new().derive(&catalog);
        assert_eq!(results.len(), 8);
        assert_eq!(results[0].title, "JavaScript Programming");
        assert_eq!(results[7].title, "Public Speaking");
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_search_text("java");
        assert_eq!(titles(&query.derive(&catalog)), ["JavaScript Programming"]);
    }

    #[test]
    fn search_matches_description_too() {
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_search_text("breathing");
        assert_eq!(titles(&query.derive(&catalog)), ["Yoga Instruction"]);
    }

    #[test]
    fn category_and_level_filters_are_conjunctive() {
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_category(CategoryFilter::parse("Programming"));
        query.set_level(LevelFilter::Only(SkillLevel::Expert));
        assert_eq!(titles(&query.derive(&catalog)), ["Data Science"]);
    }

    #[test]
    fn filter_application_order_is_irrelevant() {
        let catalog = ListingCatalog::seeded();

        let mut category_first = QueryState::new();
        category_first.set_category(CategoryFilter::parse("Arts"));
        category_first.set_level(LevelFilter::Only(SkillLevel::Intermediate));

        let mut level_first = QueryState::new();
        level_first.set_level(LevelFilter::Only(SkillLevel::Intermediate));
        level_first.set_category(CategoryFilter::parse("Arts"));

        assert_eq!(
            titles(&category_first.derive(&catalog)),
            titles(&level_first.derive(&catalog))
        );
    }

    #[test]
    fn rating_sort_is_descending() {
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_sort_mode(SortMode::Rating);
        let results = query.derive(&catalog);
        assert_eq!(results[0].title, "Yoga Instruction");
        for pair in results.windows(2) {
            assert!(pair[0].owner.rating() >= pair[1].owner.rating());
        }
    }

    #[test]
    fn rating_sort_keeps_filtered_order_on_ties() {
        // French Language and Data Science both carry 4.9.
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_sort_mode(SortMode::Rating);
        let results = titles(&query.derive(&catalog));
        let french = results.iter().position(|t| *t == "French Language").unwrap();
        let data = results.iter().position(|t| *t == "Data Science").unwrap();
        assert!(french < data);
    }

    #[test]
    fn alphabetical_sort_orders_by_title() {
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_category(CategoryFilter::parse("Arts"));
        query.set_sort_mode(SortMode::Alphabetical);
        assert_eq!(
            titles(&query.derive(&catalog)),
            ["Digital Photography", "Graphic Design"]
        );
    }

    #[test]
    fn derive_is_idempotent_for_unchanged_state() {
        let catalog = ListingCatalog::seeded();
        let mut query = QueryState::new();
        query.set_search_text("design");
        let first = titles(&query.derive(&catalog));
        let second = titles(&query.derive(&catalog));
        assert_eq!(first, second);
    }

    #[test]
    fn empty_catalog_derives_to_empty_results() {
        let catalog = ListingCatalog::default();
        assert!(QueryState::new().derive(&catalog).is_empty());
    }

    #[test]
    fn sort_mode_parses_boundary_tokens() {
        assert_eq!("recommended".parse::<SortMode>().unwrap(), SortMode::Recommended);
        assert_eq!("rating".parse::<SortMode>().unwrap(), SortMode::Rating);
        assert_eq!(
            "alphabetical".parse::<SortMode>().unwrap(),
            SortMode::Alphabetical
        );
        assert!("newest".parse::<SortMode>().is_err());
    }

    #[test]
    fn level_filter_parses_the_all_sentinel() {
        assert_eq!(LevelFilter::parse("all").unwrap(), LevelFilter::All);
        assert_eq!(
            LevelFilter::parse("Expert").unwrap(),
            LevelFilter::Only(SkillLevel::Expert)
        );
        assert!(LevelFilter::parse("Guru").is_err());
    }

    #[test]
    fn category_filter_takes_unknown_tokens_verbatim() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Underwater Basket Weaving"),
            CategoryFilter::Only("Underwater Basket Weaving".into())
        );
    }
}
