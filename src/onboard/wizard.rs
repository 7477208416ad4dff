use tracing::debug;

use crate::profile::ProfileDraft;

/// Fixed onboarding steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    PersonalInfo,
    TeachSkills,
    LearnSkills,
    Goals,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::PersonalInfo,
        Self::TeachSkills,
        Self::LearnSkills,
        Self::Goals,
        Self::Review,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&step| step == self).unwrap_or(0)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::TeachSkills => "Skills to Teach",
            Self::LearnSkills => "Skills to Learn",
            Self::Goals => "Goals & Preferences",
            Self::Review => "Review",
        }
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::ALL.len()
    }
}

/// Receives the finished draft when the wizard completes.
///
/// The consumer decides what happens to the profile; the core makes no
/// guarantee about it afterwards.
pub trait CompletionSink {
    fn on_complete(&mut self, draft: &ProfileDraft);
}

/// Finite-state sequencer over the fixed step list.
///
/// Every step is optional: no field validation gates a transition, and a
/// completely blank draft may finish the flow. Completion is a side effect
/// fired from the last step, not a state — the wizard stays on Review and
/// never resets.
pub struct OnboardingWizard {
    step: WizardStep,
    draft: ProfileDraft,
    sink: Box<dyn CompletionSink>,
}

impl OnboardingWizard {
    pub fn new(sink: Box<dyn CompletionSink>) -> Self {
        Self {
            step: WizardStep::PersonalInfo,
            draft: ProfileDraft::new(),
            sink,
        }
    }

    #[must_use]
    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Mutable access for the field-edit and skill-pick handlers.
    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    /// Progress fraction for the step indicator: `(index + 1) / count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.step.index() + 1) as f64 / WizardStep::ALL.len() as f64
    }

    /// Moves to the next step, or hands the draft to the completion sink
    /// when already on the last step. The step index never changes past
    /// Review; invoking `advance` there again fires the sink again.
    pub fn advance(&mut self) {
        let idx = self.step.index();
        if idx + 1 < WizardStep::ALL.len() {
            self.step = WizardStep::ALL[idx + 1];
            debug!(step = self.step.label(), "wizard advanced");
        } else {
            debug!("wizard finished, handing draft to sink");
            self.sink.on_complete(&self.draft);
        }
    }

    /// Moves to the previous step; no-op on the first step.
    pub fn retreat(&mut self) {
        let idx = self.step.index();
        if idx > 0 {
            self.step = WizardStep::ALL[idx - 1];
            debug!(step = self.step.label(), "wizard retreated");
        }
    }
}
