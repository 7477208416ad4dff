pub mod overview;
pub mod types;

pub use overview::{DashboardOverview, DashboardStats};
pub use types::{
    AchievementBadge, ExchangeMatch, MatchStatus, Notification, NotificationKind, SessionSlot,
    TrackedSkill,
};
