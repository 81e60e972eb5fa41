// File: src/request.rs
// Purpose: Validated, priced booking requests and the builder that makes them

use crate::config::{BookingConfig, Config};
use crate::item::{BookableItem, BookingKind};
use crate::pricing::{PriceCalculator, TimeSpan};
use crate::schema::{booking_schema, fields};
use aqua_forms::{FormSchema, FormValues, ValidationResult};
use aqua_validation::{parse_date, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Transfer => "transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "paypal" => Ok(PaymentMethod::Paypal),
            "transfer" => Ok(PaymentMethod::Transfer),
            other => anyhow::bail!("unknown payment method: {other}"),
        }
    }
}

/// A validated, priced intent to reserve an item
///
/// Only [`BookingRequestBuilder::build`] creates one, and only from input
/// that passed validation; the fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    id: Uuid,
    item_id: String,
    kind: BookingKind,
    date: NaiveDate,
    start_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
    payment_method: PaymentMethod,
    total: f64,
}

impl BookingRequest {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn kind(&self) -> BookingKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Set for equipment rentals only
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.end_time
    }

    /// Set for experiences only
    pub fn participants(&self) -> Option<u32> {
        self.participants
    }

    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

/// Turns raw booking form values into a [`BookingRequest`]
#[derive(Debug, Clone)]
pub struct BookingRequestBuilder<'a> {
    item: &'a BookableItem,
    today: NaiveDate,
    calculator: PriceCalculator,
    booking: BookingConfig,
}

impl<'a> BookingRequestBuilder<'a> {
    /// Builder with default settings; "today" is the local calendar day
    pub fn new(item: &'a BookableItem) -> Self {
        Self {
            item,
            today: Local::now().date_naive(),
            calculator: PriceCalculator::default(),
            booking: BookingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.calculator = PriceCalculator::new(&config.pricing);
        self.booking = config.booking.clone();
        self
    }

    /// Fixes the day that "not in the past" is measured against
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn item(&self) -> &BookableItem {
        self.item
    }

    pub fn calculator(&self) -> &PriceCalculator {
        &self.calculator
    }

    pub fn booking_config(&self) -> &BookingConfig {
        &self.booking
    }

    /// Form rules for this item
    pub fn schema(&self) -> FormSchema {
        booking_schema(self.item, self.today, &self.booking.payment_methods)
    }

    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        self.schema().validate(values)
    }

    /// Live total for the values entered so far; 0 when not computable
    pub fn total(&self, values: &FormValues) -> f64 {
        let (span, participants) = self.pricing_inputs(values);
        self.calculator.compute_total(self.item, &span, participants)
    }

    /// Validates `values` and, on success, prices them into a request
    ///
    /// A form that validates but still prices at 0 is refused with an error
    /// on the `total` field.
    pub fn build(&self, values: &FormValues) -> Result<BookingRequest, ValidationResult> {
        let validation = self.validate(values);
        if !validation.is_valid() {
            return Err(validation);
        }

        let date = parse_date(&values.text(fields::DATE))
            .ok_or_else(|| ValidationResult::field_error(fields::DATE, "Enter a valid date"))?;
        let start_time = parse_time(&values.text(fields::START_TIME))
            .ok_or_else(|| ValidationResult::field_error(fields::START_TIME, "Enter a valid time"))?;
        let payment_method = values
            .text(fields::PAYMENT_METHOD)
            .parse::<PaymentMethod>()
            .map_err(|_| {
                ValidationResult::field_error(fields::PAYMENT_METHOD, "Choose a valid payment method")
            })?;

        let (span, participants) = self.pricing_inputs(values);
        let total = self.calculator.compute_total(self.item, &span, participants);
        if total <= 0.0 {
            tracing::debug!(item = self.item.id(), "booking total not computable");
            return Err(ValidationResult::field_error(
                fields::TOTAL,
                "The total price could not be calculated",
            ));
        }

        let special_requests = values.text(fields::SPECIAL_REQUESTS).trim().to_string();
        let request = BookingRequest {
            id: Uuid::new_v4(),
            item_id: self.item.id().to_string(),
            kind: self.item.kind(),
            date,
            start_time,
            end_time: span.end,
            participants,
            special_requests: (!special_requests.is_empty()).then_some(special_requests),
            payment_method,
            total,
        };

        tracing::info!(
            request = %request.id,
            item = %request.item_id,
            kind = %request.kind,
            total = request.total,
            "booking request finalized"
        );

        Ok(request)
    }

    /// Time span and participant count as each variant reads them
    pub(crate) fn pricing_inputs(&self, values: &FormValues) -> (TimeSpan, Option<u32>) {
        let start = parse_time(&values.text(fields::START_TIME));
        match self.item {
            BookableItem::Experience(_) => {
                let participants = values
                    .number(fields::PARTICIPANTS)
                    .filter(|n| *n >= 1.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
                    .map(|n| n as u32);
                (TimeSpan::new(start, None), participants)
            }
            BookableItem::Equipment(_) => {
                let end = parse_time(&values.text(fields::END_TIME));
                (TimeSpan::new(start, end), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::{kayak, surf_lesson};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, 15).unwrap()
    }

    fn rental() -> FormValues {
        FormValues::new()
            .with(fields::DATE, "2026-07-16")
            .with(fields::START_TIME, "10:00")
            .with(fields::END_TIME, "12:30")
            .with(fields::PAYMENT_METHOD, "paypal")
    }

    #[test]
    fn test_equipment_request() {
        let item = kayak(15.0, 80.0);
        let request = BookingRequestBuilder::new(&item)
            .with_today(today())
            .build(&rental())
            .unwrap();

        assert_eq!(request.kind(), BookingKind::Equipment);
        assert_eq!(request.total(), 45.0);
        assert_eq!(request.end_time(), NaiveTime::from_hms_opt(12, 30, 0));
        assert_eq!(request.participants(), None);
        assert_eq!(request.payment_method(), PaymentMethod::Paypal);
        assert_eq!(request.special_requests(), None);
    }

    #[test]
    fn test_experience_request_drops_end_time() {
        let item = surf_lesson();
        let values = rental()
            .with(fields::PARTICIPANTS, "3")
            .with(fields::SPECIAL_REQUESTS, "  vegetarian lunch ");
        let request = BookingRequestBuilder::new(&item)
            .with_today(today())
            .build(&values)
            .unwrap();

        assert_eq!(request.total(), 135.0);
        assert_eq!(request.participants(), Some(3));
        assert_eq!(request.end_time(), None);
        assert_eq!(request.special_requests(), Some("vegetarian lunch"));
    }

    #[test]
    fn test_invalid_form_returns_validation() {
        let item = kayak(15.0, 80.0);
        let values = rental().with(fields::DATE, "2026-07-14");
        let err = BookingRequestBuilder::new(&item)
            .with_today(today())
            .build(&values)
            .unwrap_err();

        assert!(!err.is_valid());
        assert_eq!(err.get_error(fields::DATE), Some("Date cannot be earlier than today"));
    }

    #[test]
    fn test_zero_priced_item_refused() {
        let item = kayak(0.0, 0.0);
        let err = BookingRequestBuilder::new(&item)
            .with_today(today())
            .build(&rental())
            .unwrap_err();

        assert!(err.get_error(fields::TOTAL).is_some());
    }

    #[test]
    fn test_live_total_before_end_time() {
        let item = kayak(15.0, 80.0);
        let builder = BookingRequestBuilder::new(&item).with_today(today());
        let values = FormValues::new().with(fields::START_TIME, "10:00");
        assert_eq!(builder.total(&values), 15.0);
    }

    #[test]
    fn test_serialized_request_shape() {
        let item = kayak(15.0, 80.0);
        let request = BookingRequestBuilder::new(&item)
            .with_today(today())
            .build(&rental())
            .unwrap();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["itemId"], "eq-1");
        assert_eq!(json["kind"], "equipment");
        assert_eq!(json["startTime"], "10:00:00");
        assert_eq!(json["paymentMethod"], "paypal");
        assert!(json.get("participants").is_none());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("transfer".parse::<PaymentMethod>().unwrap(), PaymentMethod::Transfer);
        assert!("cash".parse::<PaymentMethod>().is_err());
    }
}
