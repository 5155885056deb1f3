use std::sync::Arc;

use greview_core::types::ChangeInfo;
use greview_core::{format_outcome, ReviewPreset};

use crate::collaborators::{AuthGate, Notifier, RevisionSelector};
use crate::error::SubmissionError;
use crate::service::{CascadeStatus, ReviewOutcome, ReviewSubmissionService, SubmitOptions};

const TITLE_POSTED: &str = "Review posted";
const TITLE_FAILED: &str = "Review failed";
const TITLE_SUBMIT_FAILED: &str = "Submit failed";

/// A preset bound to the collaborators it runs against. One instance per
/// entry in the vote table.
pub struct ReviewAction {
    preset: ReviewPreset,
    service: Arc<ReviewSubmissionService>,
    selector: Arc<dyn RevisionSelector>,
    notifier: Arc<dyn Notifier>,
    gate: Arc<dyn AuthGate>,
    defaults: SubmitOptions,
}

impl ReviewAction {
    pub fn new(
        preset: ReviewPreset,
        service: Arc<ReviewSubmissionService>,
        selector: Arc<dyn RevisionSelector>,
        notifier: Arc<dyn Notifier>,
        gate: Arc<dyn AuthGate>,
    ) -> Self {
        Self {
            preset,
            service,
            selector,
            notifier,
            gate,
            defaults: SubmitOptions::default(),
        }
    }

    /// Message, notify and cascade defaults for every run. The confirmation
    /// flag always comes from the preset.
    pub fn with_defaults(mut self, defaults: SubmitOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn preset(&self) -> &ReviewPreset {
        &self.preset
    }

    pub fn is_enabled(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub async fn perform(&self, change: &ChangeInfo) -> Result<ReviewOutcome, SubmissionError> {
        if !self.is_enabled() {
            let err = SubmissionError::NotAuthenticated;
            self.notifier.notify_error(TITLE_FAILED, &err.to_string());
            return Err(err);
        }

        let revision = self.selector.selected_revision(change);
        let options = SubmitOptions {
            show_confirmation: self.preset.show_dialog,
            ..self.defaults.clone()
        };

        let outcome = self
            .service
            .submit(
                &change.id,
                &revision,
                &self.preset.label,
                self.preset.rating,
                options,
            )
            .await;

        match &outcome {
            Ok(ReviewOutcome::Posted(posted)) => {
                self.notifier
                    .notify_information(TITLE_POSTED, &format_outcome(&change.subject, &posted.review));
                if let CascadeStatus::Failed(err) = &posted.cascade {
                    self.notifier.notify_error(TITLE_SUBMIT_FAILED, &err.to_string());
                }
            }
            Ok(ReviewOutcome::Cancelled) => {}
            Err(err) => self.notifier.notify_error(TITLE_FAILED, &err.to_string()),
        }

        outcome
    }
}
