//! Submission state machine shared by every create and edit form.
//!
//! DESIGN
//! ======
//! A form is idle, submitting, succeeded or failed. Only an explicit submit
//! leaves idle, and a second submit while one is in flight is refused, which
//! is the only duplicate-request guard the UI has. Failure keeps the draft so
//! the user can retry without retyping; success is the caller's cue to
//! navigate or reset.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub phase: FormPhase,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl<D: Clone> FormState<D> {
    pub fn new(draft: D) -> Self {
        Self { draft, phase: FormPhase::Idle, error: None, notice: None }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Apply a field edit. A failed form returns to idle on the next edit.
    pub fn edit(&mut self, apply: impl FnOnce(&mut D)) {
        apply(&mut self.draft);
        if self.phase == FormPhase::Failed {
            self.phase = FormPhase::Idle;
        }
    }

    /// Enter `Submitting` and hand out a snapshot of the draft to send.
    ///
    /// Returns `None` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<D> {
        if self.is_busy() {
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.error = None;
        self.notice = None;
        Some(self.draft.clone())
    }

    pub fn finish_ok(&mut self, notice: Option<String>) {
        self.phase = FormPhase::Succeeded;
        self.error = None;
        self.notice = notice;
    }

    /// Record a failure. The draft is left exactly as it was.
    pub fn finish_err(&mut self, message: String) {
        self.phase = FormPhase::Failed;
        self.error = Some(message);
    }

    /// Start over with a fresh draft, keeping any success notice.
    pub fn reset(&mut self, draft: D) {
        self.draft = draft;
        self.phase = FormPhase::Idle;
        self.error = None;
    }
}
