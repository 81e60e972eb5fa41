use anyhow::{anyhow, Result};
use aqua_booking::{PriceBreakdown, PriceCalculator, TimeSpan};
use aqua_validation::parse_time;
use colored::Colorize;

use super::format_price;
use crate::Context;

pub fn execute(
    ctx: &Context,
    item_id: &str,
    start: Option<&str>,
    end: Option<&str>,
    participants: Option<u32>,
) -> Result<bool> {
    let catalog = ctx.catalog()?;
    let item = catalog
        .find(item_id)
        .ok_or_else(|| anyhow!("No item with id '{}' in the catalog", item_id))?;

    let span = TimeSpan::new(parse_opt_time(start)?, parse_opt_time(end)?);
    let calculator = PriceCalculator::new(&ctx.config.pricing);
    let breakdown = calculator.breakdown(item, &span, participants);
    let currency = &ctx.config.pricing.currency;

    println!("{}", item.display_name().cyan().bold());
    match &breakdown {
        PriceBreakdown::Experience {
            unit_price,
            participants,
            ..
        } => {
            println!("  {} x {} participant(s)", format_price(*unit_price, currency), participants);
        }
        PriceBreakdown::Equipment {
            hourly_rate,
            billed_hours,
            daily_rate_applied,
            ..
        } => {
            println!("  Base rate: {}/hour", format_price(*hourly_rate, currency));
            if let Some(hours) = billed_hours {
                println!("  Duration: {} hour(s)", hours);
            }
            if *daily_rate_applied {
                println!("  Daily rate applied");
            }
        }
    }

    let total = breakdown.total();
    if total > 0.0 {
        println!("  Total: {}", format_price(total, currency).green().bold());
    } else {
        println!("  Total: {}", "not computable yet".yellow());
    }

    Ok(true)
}

fn parse_opt_time(value: Option<&str>) -> Result<Option<chrono::NaiveTime>> {
    value
        .map(|v| parse_time(v).ok_or_else(|| anyhow!("Invalid time '{}', expected HH:MM", v)))
        .transpose()
}
