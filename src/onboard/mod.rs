pub mod wizard;

pub use wizard::{CompletionSink, OnboardingWizard, WizardStep};
