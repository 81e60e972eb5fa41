// File: src/form.rs
// Purpose: Booking form interaction flow and the submission hand-off

use crate::item::BookableItem;
use crate::pricing::PriceBreakdown;
use crate::request::{BookingRequest, BookingRequestBuilder};
use crate::schema::fields;
use aqua_forms::state::submit_message;
use aqua_forms::{FieldValue, FormState, FormValues, SubmitOutcome, ValidationResult};
use async_trait::async_trait;

/// External booking submission collaborator (HTTP client, API boundary)
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> anyhow::Result<()>;
}

/// Booking form for one item
///
/// Holds no rendering state; a view reads [`BookingForm::state`],
/// [`BookingForm::total`] and [`BookingForm::can_submit`] and renders them.
#[derive(Debug, Clone)]
pub struct BookingForm<'a> {
    builder: BookingRequestBuilder<'a>,
    state: FormState,
}

impl<'a> BookingForm<'a> {
    /// Starts with one participant and the configured default payment method
    pub fn new(builder: BookingRequestBuilder<'a>) -> Self {
        let mut values = FormValues::new()
            .with(fields::DATE, "")
            .with(fields::START_TIME, "")
            .with(fields::SPECIAL_REQUESTS, "")
            .with(
                fields::PAYMENT_METHOD,
                builder.booking_config().default_payment_method.as_str(),
            );

        match builder.item() {
            BookableItem::Experience(_) => {
                values.set(fields::PARTICIPANTS, 1);
            }
            BookableItem::Equipment(_) => {
                values.set(fields::END_TIME, "");
            }
        }

        Self {
            builder,
            state: FormState::new(values),
        }
    }

    pub fn item(&self) -> &BookableItem {
        self.builder.item()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> bool {
        self.state.set(field, value)
    }

    /// Live total for the summary; 0 while not computable
    pub fn total(&self) -> f64 {
        self.builder.total(self.state.values())
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        let (span, participants) = self.builder.pricing_inputs(self.state.values());
        self.builder
            .calculator()
            .breakdown(self.builder.item(), &span, participants)
    }

    /// Submit stays disabled while a submit is running or the total is 0
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && self.total() > 0.0
    }

    /// Builds the request and hands it to `submitter`
    pub async fn submit<S: BookingSubmitter>(&mut self, submitter: &S) -> SubmitOutcome {
        let request = match self.builder.build(self.state.values()) {
            Ok(request) => request,
            Err(validation) => {
                self.state.set_validation(validation);
                return SubmitOutcome::Invalid;
            }
        };
        self.state.set_validation(ValidationResult::success());

        self.state.begin_submit();
        match submitter.submit(&request).await {
            Ok(()) => {
                self.state.finish_submit();
                tracing::info!(request = %request.id(), "booking submitted");
                SubmitOutcome::Submitted
            }
            Err(err) => {
                let message = submit_message(&err, "Failed to process booking");
                tracing::warn!(request = %request.id(), error = %message, "booking submission failed");
                self.state.fail_submit(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}
