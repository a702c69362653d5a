use chrono::{DateTime, Utc};

use crate::models::activity::Activity;
use crate::models::room::Room;

const MS_PER_DAY: i64 = 86_400_000;

/// Live totals for the booking in progress. Values are unrounded;
/// rounding happens once, when a figure is displayed or recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub nights: i64,
    /// Discounted nightly room rate (0 when no room is selected).
    pub room_rate: f64,
    pub room_total: f64,
    pub activity_total: f64,
    pub grand_total: f64,
}

pub struct PricingService;

impl PricingService {
    /// Price after applying a percent discount. `discount_percent` is 0..=100.
    pub fn discounted_price(base_price: f64, discount_percent: f64) -> f64 {
        base_price * (1.0 - discount_percent / 100.0)
    }

    /// Whole nights between check-in and check-out, rounding partial days up.
    /// Returns `None` when the range is empty or inverted; callers must treat
    /// that as a validation failure, never as zero nights.
    pub fn nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Option<i64> {
        let ms = (check_out - check_in).num_milliseconds();
        if ms <= 0 {
            return None;
        }
        Some((ms + MS_PER_DAY - 1) / MS_PER_DAY)
    }

    /// Round to cents for display and for the persisted snapshot.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Totals for a room stay plus one-time activity add-ons. Activities are
    /// charged once per booking regardless of the night count.
    pub fn quote(
        room: Option<&Room>,
        activities: &[&Activity],
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> Option<PriceQuote> {
        let nights = Self::nights(check_in, check_out)?;

        let room_rate = room
            .map(|r| Self::discounted_price(r.price, r.discount))
            .unwrap_or(0.0);
        let room_total = room_rate * nights as f64;

        let activity_total: f64 = activities
            .iter()
            .map(|a| Self::discounted_price(a.price, a.discount))
            .sum();

        Some(PriceQuote {
            nights,
            room_rate,
            room_total,
            activity_total,
            grand_total: room_total + activity_total,
        })
    }
}
