use anyhow::Result;
use aqua_booking::{BookableItem, PriceRange, SearchFilters};
use colored::Colorize;

use super::format_price;
use crate::Context;

#[allow(clippy::too_many_arguments)]
pub fn filters(
    query: Option<String>,
    category: Option<String>,
    location: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    difficulty: Option<String>,
    min_rating: Option<f32>,
    participants: Option<u32>,
) -> SearchFilters {
    let price_range = match (min_price, max_price) {
        (None, None) => None,
        (min, max) => Some(PriceRange {
            min: min.unwrap_or(0.0),
            max: max.unwrap_or(f64::MAX),
        }),
    };

    SearchFilters {
        query,
        category,
        location,
        price_range,
        difficulty,
        min_rating,
        participants,
    }
}

pub fn execute(ctx: &Context, filters: &SearchFilters) -> Result<bool> {
    let catalog = ctx.catalog()?;
    let results = catalog.search(filters);
    let currency = &ctx.config.pricing.currency;

    if results.is_empty() {
        println!("{}", "No matching items".yellow());
        return Ok(true);
    }

    for item in results {
        let price = match item {
            BookableItem::Experience(e) => format!("{} / person", format_price(e.price_per_participant, currency)),
            BookableItem::Equipment(e) => format!(
                "{} / hour, {} / day",
                format_price(e.price_per_hour, currency),
                format_price(e.price_per_day, currency)
            ),
        };
        println!(
            "{} {} [{}] {} ★{:.1}",
            item.id().dimmed(),
            item.display_name().cyan(),
            item.category(),
            price,
            item.rating()
        );
    }

    Ok(true)
}
