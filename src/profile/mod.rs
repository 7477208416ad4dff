pub mod draft;
pub mod skills;
pub mod suggestions;

pub use draft::{AvatarRef, AvatarStore, ProfileDraft, ProfileField, ProfileSummary};
pub use skills::SkillSet;
