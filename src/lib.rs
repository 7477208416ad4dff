#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod dashboard;
pub mod error;
pub mod marketplace;
pub mod onboard;
pub mod profile;

pub use error::{Result, SwapError};
pub use marketplace::{Listing, ListingCatalog, ListingSource, QueryState, SkillLevel, SortMode};
pub use onboard::{CompletionSink, OnboardingWizard, WizardStep};
pub use profile::{AvatarRef, ProfileDraft, ProfileField, SkillSet};
