use serde::{Deserialize, Serialize};

use super::listing::{Listing, ListingOwner, SkillLevel};
use crate::error::CatalogError;
use crate::profile::AvatarRef;

/// Supplies the marketplace listing collection.
///
/// An empty result is a valid, non-error state; the grid simply renders
/// its "no skills found" placeholder.
pub trait ListingSource {
    fn fetch_listings(&self) -> Vec<Listing>;
}

/// Read-only collection of marketplace listings.
///
/// Population happens outside the core — from a supplier, a document, or
/// the seeded demo data. Once built, the catalog only serves reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    #[must_use]
    pub fn from_source(source: &dyn ListingSource) -> Self {
        Self::new(source.fetch_listings())
    }

    /// Builds a catalog from a JSON array of listings.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let listings = serde_json::from_str(document)?;
        Ok(Self::new(listings))
    }

    /// The full ordered sequence of listings.
    #[must_use]
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct category labels in first-appearance order, for the filter
    /// chips.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for listing in &self.listings {
            if !seen.contains(&listing.category.as_str()) {
                seen.push(listing.category.as_str());
            }
        }
        seen
    }

    /// The demo catalog standing in for a future listing service.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            seed(
                "1",
                "JavaScript Programming",
                "Programming",
                SkillLevel::Intermediate,
                "Learn modern JavaScript with practical examples and real-world applications.",
                "user1",
                "Alex Johnson",
                4.8,
            ),
            seed(
                "2",
                "Digital Photography",
                "Arts",
                SkillLevel::Beginner,
                "Master the basics of composition, lighting, and editing for stunning photos.",
                "user2",
                "Sarah Williams",
                4.5,
            ),
            seed(
                "3",
                "French Language",
                "Languages",
                SkillLevel::Advanced,
                "Conversational French with focus on pronunciation and everyday vocabulary.",
                "user3",
                "Michel Dubois",
                4.9,
            ),
            seed(
                "4",
                "Yoga Instruction",
                "Fitness",
                SkillLevel::Intermediate,
                "Learn to teach yoga flows with proper alignment and breathing techniques.",
                "user4",
                "Priya Patel",
                5.0,
            ),
            seed(
                "5",
                "Piano Lessons",
                "Music",
                SkillLevel::Beginner,
                "Start your piano journey with fundamentals of music theory and practice.",
                "user5",
                "David Chen",
                4.7,
            ),
            seed(
                "6",
                "Data Science",
                "Programming",
                SkillLevel::Expert,
                "Advanced data analysis techniques using Python, R, and visualization tools.",
                "user6",
                "Emma Watson",
                4.9,
            ),
            seed(
                "7",
                "Graphic Design",
                "Arts",
                SkillLevel::Intermediate,
                "Create stunning visual designs using industry-standard tools and techniques.",
                "user7",
                "Marcus Lee",
                4.6,
            ),
            seed(
                "8",
                "Public Speaking",
                "Professional",
                SkillLevel::Advanced,
                "Master the art of engaging presentations and confident public speaking.",
                "user8",
                "Olivia Martinez",
                4.8,
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    title: &str,
    category: &str,
    level: SkillLevel,
    description: &str,
    owner_id: &str,
    owner_name: &str,
    rating: f32,
) -> Listing {
    let handle = owner_name.split_whitespace().next().unwrap_or(owner_name);
    Listing {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        level,
        description: description.into(),
        owner: ListingOwner::new(
            owner_id,
            owner_name,
            AvatarRef::new(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={handle}"
            )),
            rating,
        ),
    }
}
