use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{
    AchievementBadge, ExchangeMatch, MatchStatus, Notification, NotificationKind, SessionSlot,
    TrackedSkill,
};
use crate::profile::AvatarRef;

/// Aggregated activity for the signed-in member.
///
/// Pure data plus derivations; the rendering layer re-reads after each
/// mutation. One overview per UI session, never shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub user_name: String,
    pub avatar: AvatarRef,
    pub teaching: Vec<TrackedSkill>,
    pub learning: Vec<TrackedSkill>,
    pub matches: Vec<ExchangeMatch>,
    pub badges: Vec<AchievementBadge>,
    pub notifications: Vec<Notification>,
    pub sessions: Vec<SessionSlot>,
}

/// Headline counts for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub teaching: usize,
    pub learning: usize,
    pub matches: usize,
}

impl DashboardOverview {
    pub fn new(user_name: impl Into<String>, avatar: AvatarRef) -> Self {
        Self {
            user_name: user_name.into(),
            avatar,
            teaching: Vec::new(),
            learning: Vec::new(),
            matches: Vec::new(),
            badges: Vec::new(),
            notifications: Vec::new(),
            sessions: Vec::new(),
        }
    }

    /// Number shown on the notification bell.
    #[must_use]
    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Marks one notification as read. Returns `false` when the id is
    /// unknown or the notification was already read.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                debug!(id, "notification marked read");
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            teaching: self.teaching.len(),
            learning: self.learning.len(),
            matches: self.matches.len(),
        }
    }

    /// Session slots ordered by start time ascending; equal starts keep
    /// their stored order.
    #[must_use]
    pub fn upcoming_sessions(&self) -> Vec<&SessionSlot> {
        let mut ordered: Vec<&SessionSlot> = self.sessions.iter().collect();
        ordered.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
        ordered
    }

    /// The demo dataset standing in for a future activity service.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn seeded() -> Self {
        let avatar = |handle: &str| {
            AvatarRef::new(format!(
                "https://api.dicebear.com/7.x/avataaars/svg?seed={handle}"
            ))
        };

        Self {
            user_name: "Alex Johnson".into(),
            avatar: avatar("Alex"),
            teaching: vec![
                TrackedSkill::new("1", "JavaScript", "Programming", "Expert"),
                TrackedSkill::new("2", "UI Design", "Design", "Intermediate"),
                TrackedSkill::new("3", "Guitar", "Music", "Advanced"),
            ],
            learning: vec![
                TrackedSkill::new("4", "Spanish", "Language", "Beginner").with_progress(35),
                TrackedSkill::new("5", "Photography", "Arts", "Intermediate").with_progress(68),
                TrackedSkill::new("6", "Cooking", "Lifestyle", "Beginner").with_progress(20),
            ],
            matches: vec![
                ExchangeMatch {
                    id: "1".into(),
                    partner_name: "Sarah Miller".into(),
                    partner_avatar: avatar("Sarah"),
                    skill_offered: "Spanish".into(),
                    skill_requested: "JavaScript".into(),
                    status: MatchStatus::Active,
                    next_session: Some(at(2023, 5, 15, 15, 0)),
                },
                ExchangeMatch {
                    id: "2".into(),
                    partner_name: "Michael Chen".into(),
                    partner_avatar: avatar("Michael"),
                    skill_offered: "Photography".into(),
                    skill_requested: "UI Design".into(),
                    status: MatchStatus::Pending,
                    next_session: None,
                },
                ExchangeMatch {
                    id: "3".into(),
                    partner_name: "Emma Wilson".into(),
                    partner_avatar: avatar("Emma"),
                    skill_offered: "Cooking".into(),
                    skill_requested: "Guitar".into(),
                    status: MatchStatus::Active,
                    next_session: Some(at(2023, 5, 18, 17, 30)),
                },
            ],
            badges: vec![
                AchievementBadge {
                    id: "1".into(),
                    name: "Teaching Star".into(),
                    icon: "⭐".into(),
                    description: "Completed 5 teaching sessions with 5-star ratings".into(),
                    earned_on: day(2023, 5, 10),
                },
                AchievementBadge {
                    id: "2".into(),
                    name: "Quick Learner".into(),
                    icon: "🚀".into(),
                    description: "Made exceptional progress in a skill within a month".into(),
                    earned_on: day(2023, 5, 5),
                },
                AchievementBadge {
                    id: "3".into(),
                    name: "Community Builder".into(),
                    icon: "🤝".into(),
                    description: "Successfully matched with 10 different users".into(),
                    earned_on: day(2023, 4, 28),
                },
            ],
            notifications: vec![
                Notification {
                    id: "1".into(),
                    kind: NotificationKind::Match,
                    content: "New match request from Michael Chen for UI Design".into(),
                    posted_at: at(2023, 5, 14, 10, 0),
                    read: false,
                },
                Notification {
                    id: "2".into(),
                    kind: NotificationKind::Message,
                    content: "Sarah Miller sent you a message about your upcoming session".into(),
                    posted_at: at(2023, 5, 14, 7, 0),
                    read: false,
                },
                Notification {
                    id: "3".into(),
                    kind: NotificationKind::Reminder,
                    content: "Upcoming session with Emma Wilson tomorrow at 5:30 PM".into(),
                    posted_at: at(2023, 5, 13, 12, 0),
                    read: true,
                },
                Notification {
                    id: "4".into(),
                    kind: NotificationKind::Achievement,
                    content: "You earned the Teaching Star badge!".into(),
                    posted_at: at(2023, 5, 11, 12, 0),
                    read: true,
                },
            ],
            sessions: vec![
                SessionSlot {
                    id: "1".into(),
                    partner: "Sarah Miller".into(),
                    skill: "JavaScript".into(),
                    starts_at: at(2023, 5, 15, 15, 0),
                },
                SessionSlot {
                    id: "2".into(),
                    partner: "Emma Wilson".into(),
                    skill: "Guitar".into(),
                    starts_at: at(2023, 5, 18, 17, 30),
                },
            ],
        }
    }
}

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap_or_default()
}

fn at(year: i32, month: u32, dom: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(year, month, dom)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}
