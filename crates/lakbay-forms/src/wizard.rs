//! The step wizard: gated navigation over a form session.
//!
//! A [`FormWizard`] owns a [`FormSession`] and the 1-based active step.
//! Forward navigation validates the active step first; backward navigation
//! is always allowed. A single `navigating` guard makes rapid repeated
//! next/previous requests and in-flight submits no-ops instead of skipped
//! or doubled transitions.
//!
//! Submission is split-phase: [`FormWizard::begin_submit`] produces the
//! payload and engages the guard, the caller hands the payload to the
//! persistence collaborator, and [`FormWizard::finish_submit`] releases the
//! guard. Values and step are untouched either way, so a failed save leaves
//! the form intact for correction and resubmit. [`FormWizard::submit`]
//! wraps all three against a [`ListingStore`].

use lakbay_core::error::{Error, Result, ValidationFailure};
use lakbay_listings::record::{BusinessRecord, ListingPayload};
use lakbay_listings::store::ListingStore;

use crate::listing_form;
use crate::session::{FormSession, SessionMode};

/// The result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The active step changed by one.
    Moved,
    /// The current step failed validation; the step did not change.
    Invalid,
    /// Already at the first or last step; nothing to do.
    AtBoundary,
    /// A navigation or submit is already in flight; request ignored.
    Busy,
}

/// A finite-state controller over the steps of a form session.
pub struct FormWizard<'s> {
    session: FormSession<'s>,
    active_step: usize,
    navigating: bool,
    on_discard: Box<dyn Fn() + Send + Sync>,
}

impl<'s> FormWizard<'s> {
    /// Creates a wizard at step 1 over the given session.
    ///
    /// `on_discard` is the external collaborator invoked by
    /// [`cancel`](Self::cancel), typically a navigation callback.
    pub fn new(session: FormSession<'s>, on_discard: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            session,
            active_step: 1,
            navigating: false,
            on_discard: Box::new(on_discard),
        }
    }

    /// Returns the 1-based active step.
    pub const fn active_step(&self) -> usize {
        self.active_step
    }

    /// Returns the total number of steps.
    pub fn step_count(&self) -> usize {
        self.session.schema().step_count()
    }

    /// Returns `true` while a navigation or submit is in flight.
    pub const fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// Returns the underlying session.
    pub const fn session(&self) -> &FormSession<'s> {
        &self.session
    }

    /// Returns the underlying session mutably, for field edits.
    pub fn session_mut(&mut self) -> &mut FormSession<'s> {
        &mut self.session
    }

    /// Validates the active step and advances by one if it is clean.
    ///
    /// No-op (`Busy`) while the guard is engaged; no-op (`AtBoundary`) at
    /// the last step. A failed validation leaves the step unchanged and
    /// stores the field errors on the session.
    pub fn next(&mut self) -> NavOutcome {
        if self.navigating {
            return NavOutcome::Busy;
        }
        self.navigating = true;
        let outcome = if self.session.validate_step(self.active_step) {
            if self.active_step < self.step_count() {
                self.active_step += 1;
                tracing::debug!(step = self.active_step, "advanced to next step");
                NavOutcome::Moved
            } else {
                NavOutcome::AtBoundary
            }
        } else {
            tracing::debug!(step = self.active_step, "step failed validation");
            NavOutcome::Invalid
        };
        self.navigating = false;
        outcome
    }

    /// Retreats by one step. Never validates: users may always go back.
    pub fn previous(&mut self) -> NavOutcome {
        if self.navigating {
            return NavOutcome::Busy;
        }
        self.navigating = true;
        let outcome = if self.active_step > 1 {
            self.active_step -= 1;
            tracing::debug!(step = self.active_step, "returned to previous step");
            NavOutcome::Moved
        } else {
            NavOutcome::AtBoundary
        };
        self.navigating = false;
        outcome
    }

    /// Returns `true` if the submit action should be enabled: on the final
    /// step, final step clean, and no navigation in flight.
    pub fn can_submit(&self) -> bool {
        !self.navigating
            && self.active_step == self.step_count()
            && self.session.check_step(self.active_step)
    }

    /// Starts a submission: validates the whole form, builds the payload,
    /// and engages the navigation guard.
    ///
    /// The caller hands the payload to the persistence collaborator and
    /// then calls [`finish_submit`](Self::finish_submit), success or not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubmissionBlocked`] if a navigation is in flight,
    /// the wizard is not on the final step, or any field in any step holds
    /// an error. Reaching those states through the UI is a caller bug: the
    /// submit action is only exposed when [`can_submit`](Self::can_submit)
    /// is `true`.
    pub fn begin_submit(&mut self) -> Result<ListingPayload> {
        if self.navigating {
            return Err(Error::SubmissionBlocked(ValidationFailure::new(
                "a navigation or submit is already in flight",
            )));
        }
        if self.active_step != self.step_count() {
            return Err(Error::SubmissionBlocked(ValidationFailure::new(format!(
                "submit requested on step {} of {}",
                self.active_step,
                self.step_count()
            ))));
        }
        let payload = listing_form::build_payload(&mut self.session)?;
        self.navigating = true;
        tracing::debug!("submission started");
        Ok(payload)
    }

    /// Ends a submission, releasing the navigation guard.
    ///
    /// Values and the active step are untouched; after a failed save the
    /// user corrects and resubmits, and after a successful create the
    /// caller may keep using the wizard for another record.
    pub fn finish_submit(&mut self) {
        self.navigating = false;
        tracing::debug!("submission finished");
    }

    /// Submits through a [`ListingStore`], creating or updating according
    /// to the session mode.
    ///
    /// The store's result is forwarded unchanged; the active step never
    /// moves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubmissionBlocked`] as for
    /// [`begin_submit`](Self::begin_submit), or the store's own error.
    pub async fn submit(&mut self, store: &dyn ListingStore) -> Result<BusinessRecord> {
        let payload = self.begin_submit()?;
        let result = match self.session.mode() {
            SessionMode::Create => store.create(payload).await,
            SessionMode::Edit { id } => store.update(id, payload).await,
        };
        self.finish_submit();
        match &result {
            Ok(record) => tracing::info!(id = %record.id, "listing saved"),
            Err(error) => tracing::warn!(%error, "listing save failed"),
        }
        result
    }

    /// Invokes the discard collaborator, unconditionally and exactly once
    /// per call. Mutates nothing: cancel means "stop", not "reset".
    pub fn cancel(&self) {
        (self.on_discard)();
    }
}
