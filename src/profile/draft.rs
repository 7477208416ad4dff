use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::skills::SkillSet;

/// Opaque handle to an uploaded avatar image.
///
/// The core never interprets the contents; an `AvatarStore` collaborator
/// produces it and the rendering layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarRef(String);

impl AvatarRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolves a user-selected image to an opaque reference.
///
/// Stands in for real upload I/O, hence the fallible signature. The result
/// is applied to the draft later via [`ProfileDraft::set_field`] with
/// [`ProfileField::Avatar`].
pub trait AvatarStore {
    fn upload_avatar(&mut self, image: &[u8]) -> anyhow::Result<AvatarRef>;
}

/// Scalar draft fields addressable by the input-handling boundary.
///
/// The boundary passes the edited value as an explicit argument; the draft
/// is never read back from ambient UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Bio,
    Location,
    Goals,
    Avatar,
}

/// In-progress profile accumulated by the onboarding wizard.
///
/// Created empty at wizard start and mutated in place by field edits and
/// skill operations. No field is validated — a completely blank draft may
/// finish onboarding; any completeness policy belongs to the consumer.
#[derive(Debug, Clone)]
pub struct ProfileDraft {
    id: Uuid,
    name: String,
    bio: String,
    location: String,
    goals: String,
    avatar: Option<AvatarRef>,
    teach_skills: SkillSet,
    learn_skills: SkillSet,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            bio: String::new(),
            location: String::new(),
            goals: String::new(),
            avatar: None,
            teach_skills: SkillSet::new(),
            learn_skills: SkillSet::new(),
        }
    }

    /// Identifies the wizard session that produced this draft.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Assigns a scalar field. Always succeeds.
    ///
    /// An empty value for [`ProfileField::Avatar`] clears the reference;
    /// every other field simply stores what it is given.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Bio => self.bio = value,
            ProfileField::Location => self.location = value,
            ProfileField::Goals => self.goals = value,
            ProfileField::Avatar => {
                self.avatar = if value.is_empty() {
                    None
                } else {
                    Some(AvatarRef::new(value))
                };
            }
        }
    }

    pub fn set_avatar(&mut self, avatar: AvatarRef) {
        self.set_field(ProfileField::Avatar, avatar.0);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn goals(&self) -> &str {
        &self.goals
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&AvatarRef> {
        self.avatar.as_ref()
    }

    /// Single-character fallback shown when no avatar image is set: the
    /// first character of the name uppercased, `?` for a blank name.
    #[must_use]
    pub fn avatar_initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    // ── Skill delegation ────────────────────────────────────────────────

    pub fn add_teach_skill(&mut self, label: impl Into<String>) {
        self.teach_skills.add(label);
    }

    pub fn remove_teach_skill(&mut self, label: &str) {
        self.teach_skills.remove(label);
    }

    pub fn toggle_teach_skill(&mut self, label: impl Into<String>) {
        self.teach_skills.toggle(label);
    }

    pub fn add_learn_skill(&mut self, label: impl Into<String>) {
        self.learn_skills.add(label);
    }

    pub fn remove_learn_skill(&mut self, label: &str) {
        self.learn_skills.remove(label);
    }

    pub fn toggle_learn_skill(&mut self, label: impl Into<String>) {
        self.learn_skills.toggle(label);
    }

    #[must_use]
    pub fn teach_skills(&self) -> &SkillSet {
        &self.teach_skills
    }

    #[must_use]
    pub fn learn_skills(&self) -> &SkillSet {
        &self.learn_skills
    }

    /// Read-only projection consumed by the Review step. Never mutates.
    #[must_use]
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            name: self.name.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
            goals: self.goals.clone(),
            teach_skills: self.teach_skills.iter().map(String::from).collect(),
            learn_skills: self.learn_skills.iter().map(String::from).collect(),
            has_avatar: self.avatar.is_some(),
        }
    }
}

/// Snapshot of a draft for the Review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub location: String,
    pub bio: String,
    pub goals: String,
    pub teach_skills: Vec<String>,
    pub learn_skills: Vec<String>,
    pub has_avatar: bool,
}
