use chrono::NaiveDate;

use super::capacity::CapacityTable;
use super::form::{FieldError, FieldSpec, ReservationForm};
use super::transport::{FieldMap, SubmissionTransport, TransportError};
use super::validate;

pub const LABEL_IDLE: &str = "Odoslať rezerváciu";
pub const LABEL_BUSY: &str = "Odosielam...";

/// Lifecycle of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why `begin_submit` refused to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A submission is already on its way.
    InFlight,
    /// Validation failed; no transport attempt was made.
    Invalid(Vec<FieldError>),
}

/// Result of a finished submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub succeeded: bool,
    pub message: String,
    /// Success clears the form; failure keeps the visitor's input.
    pub reset_form: bool,
}

/// Owns validation and the submission lifecycle for the reservation form.
/// Pure logic: no HTTP types, so it tests without a server.
pub struct FormController {
    capacities: CapacityTable,
    state: SubmissionState,
}

impl FormController {
    pub fn new(capacities: CapacityTable) -> Self {
        Self {
            capacities,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn capacities(&self) -> &CapacityTable {
        &self.capacities
    }

    /// Submit-button label for the current state.
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Submitting => LABEL_BUSY,
            _ => LABEL_IDLE,
        }
    }

    /// Whether the submit control accepts a click.
    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::Submitting
    }

    /// A finished outcome reverts to Idle on the next interaction.
    fn touch(&mut self) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Validate a single field, as on blur.
    pub fn validate_field(
        &mut self,
        spec: &FieldSpec,
        form: &ReservationForm,
        today: NaiveDate,
    ) -> Option<String> {
        self.touch();
        validate::validate_field(spec, form, &self.capacities, today)
    }

    /// Validate every field plus the date-range rule.
    pub fn validate_all(&mut self, form: &ReservationForm, today: NaiveDate) -> Vec<FieldError> {
        self.touch();
        validate::validate_all(form, &self.capacities, today)
    }

    /// First half of a submission: enforce the single-in-flight rule, run the
    /// full-form validation, and serialize the fields for the transport.
    pub fn begin_submit(
        &mut self,
        form: &ReservationForm,
        today: NaiveDate,
    ) -> Result<FieldMap, SubmitRejection> {
        if self.state == SubmissionState::Submitting {
            return Err(SubmitRejection::InFlight);
        }
        self.touch();
        let errors = validate::validate_all(form, &self.capacities, today);
        if !errors.is_empty() {
            return Err(SubmitRejection::Invalid(errors));
        }
        self.state = SubmissionState::Submitting;
        Ok(form.to_field_map())
    }

    /// Second half: record the transport result and produce the banner
    /// outcome. The submit control is usable again either way.
    pub fn finish_submit(&mut self, result: Result<(), TransportError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                SubmitOutcome {
                    succeeded: true,
                    message: "Vaša rezervácia bola úspešne odoslaná! Čoskoro vás budeme kontaktovať."
                        .to_string(),
                    reset_form: true,
                }
            }
            Err(err) => {
                log::error!("reservation submission failed: {err}");
                self.state = SubmissionState::Failed;
                SubmitOutcome {
                    succeeded: false,
                    message: "Niečo sa pokazilo. Skúste to prosím znova.".to_string(),
                    reset_form: false,
                }
            }
        }
    }

    /// Full round trip against a transport.
    pub async fn submit<T: SubmissionTransport>(
        &mut self,
        form: &ReservationForm,
        today: NaiveDate,
        transport: &T,
    ) -> Result<SubmitOutcome, SubmitRejection> {
        let fields = self.begin_submit(form, today)?;
        let result = transport.send(&fields).await;
        Ok(self.finish_submit(result))
    }
}
