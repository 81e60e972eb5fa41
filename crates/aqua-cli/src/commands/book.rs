use anyhow::{anyhow, Context as _, Result};
use aqua_booking::schema::fields;
use aqua_booking::BookingRequestBuilder;
use aqua_forms::FormValues;
use colored::Colorize;

use super::print_errors;
use crate::Context;

pub struct BookArgs {
    pub item: String,
    pub date: String,
    pub start: String,
    pub end: Option<String>,
    pub participants: Option<u32>,
    pub payment: Option<String>,
    pub requests: Option<String>,
}

pub fn execute(ctx: &Context, args: BookArgs) -> Result<bool> {
    let catalog = ctx.catalog()?;
    let item = catalog
        .find(&args.item)
        .ok_or_else(|| anyhow!("No item with id '{}' in the catalog", args.item))?;

    let payment = args
        .payment
        .unwrap_or_else(|| ctx.config.booking.default_payment_method.to_string());

    let values = FormValues::new()
        .with(fields::DATE, args.date)
        .with(fields::START_TIME, args.start)
        .with(fields::END_TIME, args.end)
        .with(fields::PARTICIPANTS, args.participants)
        .with(fields::PAYMENT_METHOD, payment)
        .with(fields::SPECIAL_REQUESTS, args.requests);

    let builder = BookingRequestBuilder::new(item).with_config(&ctx.config);
    match builder.build(&values) {
        Ok(request) => {
            println!("{}", "✓ Booking request ready".green().bold());
            let json = serde_json::to_string_pretty(&request).context("Failed to serialize booking request")?;
            println!("{}", json);
            Ok(true)
        }
        Err(result) => {
            print_errors(&result);
            Ok(false)
        }
    }
}
