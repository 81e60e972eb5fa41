// File: src/pricing.rs
// Purpose: Booking total computation

use crate::config::PricingConfig;
use crate::item::BookableItem;
use chrono::NaiveTime;
use serde::Serialize;

/// Requested time window on a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSpan {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl TimeSpan {
    pub fn new(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveTime, end: NaiveTime) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// Hours from start to end, when both are known
    ///
    /// Negative when `end` precedes `start`; no wrap past midnight.
    pub fn elapsed_hours(&self) -> Option<f64> {
        let (start, end) = (self.start?, self.end?);
        Some((end - start).num_seconds() as f64 / 3600.0)
    }
}

/// Line items behind a total, for the summary panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PriceBreakdown {
    Experience {
        unit_price: f64,
        participants: u32,
        total: f64,
    },
    Equipment {
        hourly_rate: f64,
        /// Rounded-up hours, once both times are known
        billed_hours: Option<u32>,
        daily_rate_applied: bool,
        total: f64,
    },
}

impl PriceBreakdown {
    pub fn total(&self) -> f64 {
        match self {
            PriceBreakdown::Experience { total, .. } | PriceBreakdown::Equipment { total, .. } => {
                *total
            }
        }
    }
}

/// Computes booking totals
///
/// A total of 0 means "not computable yet" (missing participants, an empty
/// or inverted time span), never a free booking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCalculator {
    daily_rate_threshold_hours: f64,
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(&PricingConfig::default())
    }
}

impl PriceCalculator {
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            daily_rate_threshold_hours: config.daily_rate_threshold_hours,
        }
    }

    pub fn daily_rate_threshold_hours(&self) -> f64 {
        self.daily_rate_threshold_hours
    }

    /// Booking total for `item`
    ///
    /// `participants` is read for experiences only. Equipment without both
    /// times falls back to the bare hourly rate as a provisional figure.
    pub fn compute_total(&self, item: &BookableItem, span: &TimeSpan, participants: Option<u32>) -> f64 {
        self.breakdown(item, span, participants).total()
    }

    pub fn breakdown(&self, item: &BookableItem, span: &TimeSpan, participants: Option<u32>) -> PriceBreakdown {
        let breakdown = match item {
            BookableItem::Experience(experience) => {
                let participants = participants.unwrap_or(0);
                PriceBreakdown::Experience {
                    unit_price: experience.price_per_participant,
                    participants,
                    total: non_negative(experience.price_per_participant * f64::from(participants)),
                }
            }
            BookableItem::Equipment(equipment) => match span.elapsed_hours() {
                None => PriceBreakdown::Equipment {
                    hourly_rate: equipment.price_per_hour,
                    billed_hours: None,
                    daily_rate_applied: false,
                    total: non_negative(equipment.price_per_hour),
                },
                Some(hours) if hours <= 0.0 => PriceBreakdown::Equipment {
                    hourly_rate: equipment.price_per_hour,
                    billed_hours: Some(0),
                    daily_rate_applied: false,
                    total: 0.0,
                },
                Some(hours) if hours >= self.daily_rate_threshold_hours => PriceBreakdown::Equipment {
                    hourly_rate: equipment.price_per_hour,
                    billed_hours: Some(hours.ceil() as u32),
                    daily_rate_applied: true,
                    total: non_negative(equipment.price_per_day),
                },
                Some(hours) => {
                    // partial hours always round up
                    let billed = hours.ceil();
                    PriceBreakdown::Equipment {
                        hourly_rate: equipment.price_per_hour,
                        billed_hours: Some(billed as u32),
                        daily_rate_applied: false,
                        total: non_negative(equipment.price_per_hour * billed),
                    }
                }
            },
        };

        tracing::debug!(item = item.id(), total = breakdown.total(), "computed price");
        breakdown
    }
}

/// Total with the default pricing rules
pub fn compute_total(item: &BookableItem, span: &TimeSpan, participants: Option<u32>) -> f64 {
    PriceCalculator::default().compute_total(item, span, participants)
}

fn non_negative(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::fixtures::{kayak, surf_lesson};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_experience_per_participant() {
        assert_eq!(compute_total(&surf_lesson(), &TimeSpan::default(), Some(3)), 135.0);
    }

    #[test]
    fn test_experience_without_participants_not_computable() {
        assert_eq!(compute_total(&surf_lesson(), &TimeSpan::default(), None), 0.0);
        assert_eq!(compute_total(&surf_lesson(), &TimeSpan::default(), Some(0)), 0.0);
    }

    #[rstest]
    #[case(at(9, 0), at(13, 0), 40.0)]
    #[case(at(9, 0), at(9, 1), 10.0)]
    #[case(at(9, 0), at(16, 59), 80.0)]
    #[case(at(9, 0), at(17, 0), 60.0)]
    #[case(at(8, 0), at(18, 0), 60.0)]
    fn test_equipment_hourly_or_daily(#[case] start: NaiveTime, #[case] end: NaiveTime, #[case] expected: f64) {
        let total = compute_total(&kayak(10.0, 60.0), &TimeSpan::between(start, end), None);
        assert_eq!(total, expected);
    }

    #[test]
    fn test_partial_hours_round_up() {
        let total = compute_total(&kayak(15.0, 80.0), &TimeSpan::between(at(10, 0), at(12, 30)), None);
        assert_eq!(total, 45.0);
    }

    #[test]
    fn test_equipment_missing_times_is_hourly_rate() {
        let span = TimeSpan::new(Some(at(10, 0)), None);
        assert_eq!(compute_total(&kayak(15.0, 80.0), &span, None), 15.0);
    }

    #[test]
    fn test_equipment_ignores_participants() {
        let span = TimeSpan::between(at(10, 0), at(11, 0));
        assert_eq!(compute_total(&kayak(15.0, 80.0), &span, Some(4)), 15.0);
    }

    #[test]
    fn test_empty_or_inverted_span_not_computable() {
        let item = kayak(15.0, 80.0);
        assert_eq!(compute_total(&item, &TimeSpan::between(at(10, 0), at(10, 0)), None), 0.0);
        assert_eq!(compute_total(&item, &TimeSpan::between(at(12, 0), at(10, 0)), None), 0.0);
    }

    #[test]
    fn test_configured_threshold() {
        let calculator = PriceCalculator::new(&PricingConfig {
            daily_rate_threshold_hours: 4.0,
            ..PricingConfig::default()
        });
        let span = TimeSpan::between(at(9, 0), at(13, 0));
        assert_eq!(calculator.compute_total(&kayak(10.0, 35.0), &span, None), 35.0);
    }

    #[test]
    fn test_breakdown_reports_billed_hours() {
        let breakdown = PriceCalculator::default().breakdown(
            &kayak(15.0, 80.0),
            &TimeSpan::between(at(10, 0), at(12, 30)),
            None,
        );
        assert_eq!(
            breakdown,
            PriceBreakdown::Equipment {
                hourly_rate: 15.0,
                billed_hours: Some(3),
                daily_rate_applied: false,
                total: 45.0,
            }
        );
    }
}
