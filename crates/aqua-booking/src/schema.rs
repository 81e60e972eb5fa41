// File: src/schema.rs
// Purpose: Booking form rules per item type

use crate::item::BookableItem;
use crate::request::PaymentMethod;
use aqua_forms::{FieldRule, FormSchema};
use aqua_validation::{parse_time, validate_not_in_past, validate_participants};
use chrono::NaiveDate;

/// Field names shared with the view layer
pub mod fields {
    pub const DATE: &str = "date";
    pub const START_TIME: &str = "startTime";
    pub const END_TIME: &str = "endTime";
    pub const PARTICIPANTS: &str = "participants";
    pub const SPECIAL_REQUESTS: &str = "specialRequests";
    pub const PAYMENT_METHOD: &str = "paymentMethod";
    pub const TOTAL: &str = "total";
}

/// Rules for booking `item` on or after `today`
///
/// Experiences cap participants at the item's maximum; equipment requires an
/// end time after the start time instead.
pub fn booking_schema(item: &BookableItem, today: NaiveDate, payment_methods: &[PaymentMethod]) -> FormSchema {
    let schema = FormSchema::new(format!("booking:{}", item.kind()))
        .required(fields::DATE, "Select a date")
        .check(fields::DATE, move |value| validate_not_in_past(value, today))
        .required(fields::START_TIME, "Select a start time")
        .check(fields::START_TIME, valid_time);

    let schema = match item {
        BookableItem::Experience(experience) => {
            let max = experience.max_participants;
            schema.rule(FieldRule::with_check(fields::PARTICIPANTS, move |value, _| {
                let count = value
                    .as_number()
                    .filter(|n| n.fract() == 0.0)
                    .ok_or_else(|| "Enter a whole number of participants".to_string())?;
                validate_participants(count as i64, Some(max))
            }))
        }
        BookableItem::Equipment(_) => schema
            .required(fields::END_TIME, "Select an end time for the rental")
            .check(fields::END_TIME, valid_time)
            .rule(FieldRule::across(
                fields::END_TIME,
                "End time must be after the start time",
                |value, form| {
                    let start = parse_time(&form.text(fields::START_TIME));
                    let end = parse_time(&value.to_text());
                    match (start, end) {
                        (Some(start), Some(end)) => end > start,
                        // unparseable times are reported by the rules above
                        _ => true,
                    }
                },
            )),
    };

    let allowed: Vec<&str> = payment_methods.iter().map(|method| method.as_str()).collect();
    schema
        .required(fields::PAYMENT_METHOD, "Select a payment method")
        .one_of(fields::PAYMENT_METHOD, &allowed, "Choose a valid payment method")
}

fn valid_time(value: &str) -> Result<(), String> {
    parse_time(value)
        .map(|_| ())
        .ok_or_else(|| "Enter a valid time".to_string())
}
