use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::profile::AvatarRef;

/// A skill the member teaches or is learning, as tracked on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSkill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub level: String,
    /// Learning progress percent; teaching skills carry none.
    #[serde(default)]
    pub progress: Option<u8>,
}

impl TrackedSkill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            level: level.into(),
            progress: None,
        }
    }

    /// Attaches a progress percent, clamped to 100.
    #[must_use]
    pub fn with_progress(mut self, percent: u8) -> Self {
        self.progress = Some(percent.min(100));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Active,
    Completed,
}

/// A skill-exchange pairing with another member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeMatch {
    pub id: String,
    pub partner_name: String,
    pub partner_avatar: AvatarRef,
    pub skill_offered: String,
    pub skill_requested: String,
    pub status: MatchStatus,
    #[serde(default)]
    pub next_session: Option<NaiveDateTime>,
}

/// One scheduled exchange session on the agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSlot {
    pub id: String,
    pub partner: String,
    pub skill: String,
    pub starts_at: NaiveDateTime,
}

/// An achievement earned by the member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementBadge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub earned_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    Match,
    Message,
    Reminder,
    Achievement,
}

/// A dashboard notification; `read` flips once the member opens it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub content: String,
    pub posted_at: NaiveDateTime,
    pub read: bool,
}
