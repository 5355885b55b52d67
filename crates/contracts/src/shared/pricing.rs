//! Weekly price derivation.
//!
//! Weekly price and discount amount are rounded independently, so their sum
//! may differ from the rounded undiscounted week by one unit.

use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: f64 = 7.0;

/// How the discount percentage is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountFormat {
    /// `10`
    #[default]
    Integer,
    /// `10.0`
    OneDecimal,
}

/// Цены, вычисленные из дневной цены и доли скидки
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPricing {
    pub daily_price: f64,
    pub discount_fraction: f64,
    pub weekly_price: i64,
    pub discount_amount: i64,
    pub discount_percent: i64,
}

impl DerivedPricing {
    /// `round(daily × 7)`
    pub fn undiscounted_weekly(&self) -> i64 {
        round_to_int(self.daily_price * DAYS_PER_WEEK)
    }

    pub fn discount_percent_text(&self, format: DiscountFormat) -> String {
        match format {
            DiscountFormat::Integer => self.discount_percent.to_string(),
            DiscountFormat::OneDecimal => format!("{:.1}", self.discount_fraction * 100.0),
        }
    }
}

/// Callers guarantee `daily_price >= 0` and `0 <= discount_fraction < 1`;
/// the loader rejects anything else before it gets here.
pub fn compute(daily_price: f64, discount_fraction: f64) -> DerivedPricing {
    let undiscounted = daily_price * DAYS_PER_WEEK;

    DerivedPricing {
        daily_price,
        discount_fraction,
        weekly_price: round_to_int(undiscounted * (1.0 - discount_fraction)),
        discount_amount: round_to_int(undiscounted * discount_fraction),
        discount_percent: round_to_int(discount_fraction * 100.0),
    }
}

/// Half away from zero; same as half-up on the non-negative domain.
fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}
