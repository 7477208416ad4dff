use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum::Display;

use crate::error::QueryError;
use crate::profile::AvatarRef;

/// Proficiency level attached to a listing, ordered novice to master.
///
/// The ordering exists for display concerns (badge tint, level pickers);
/// it carries no numeric semantics.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Badge tint used by the card renderer.
    #[must_use]
    pub fn badge_color(self) -> BadgeColor {
        match self {
            Self::Beginner => BadgeColor::Blue,
            Self::Intermediate => BadgeColor::Green,
            Self::Advanced => BadgeColor::Purple,
            Self::Expert => BadgeColor::Orange,
        }
    }
}

impl FromStr for SkillLevel {
    type Err = QueryError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            "Expert" => Ok(Self::Expert),
            other => Err(QueryError::UnknownLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Green,
    Purple,
    Orange,
}

/// The member offering a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingOwner {
    pub id: String,
    pub name: String,
    pub avatar: AvatarRef,
    #[serde(deserialize_with = "clamp_rating")]
    rating: f32,
}

impl ListingOwner {
    /// `rating` is clamped into `[0, 5]`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        avatar: AvatarRef,
        rating: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar,
            rating: rating.clamp(0.0, 5.0),
        }
    }

    #[must_use]
    pub fn rating(&self) -> f32 {
        self.rating
    }
}

fn clamp_rating<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f32::deserialize(deserializer)?;
    Ok(raw.clamp(0.0, 5.0))
}

/// A single teachable/learnable skill offering shown in the marketplace.
///
/// Immutable for the lifetime of the core; creating and retiring listings
/// is the catalog supplier's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub category: String,
    pub level: SkillLevel,
    pub description: String,
    pub owner: ListingOwner,
}
