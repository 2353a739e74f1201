use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::YearMonth;

/// Percent change from `last_month` to `current_month`; 0 when nothing was spent last
/// month.
pub fn spending_trend(current_month: f64, last_month: f64) -> f64 {
    if last_month > 0.0 {
        (current_month - last_month) / last_month * 100.0
    } else {
        0.0
    }
}

/// Month-to-date spending rate and where it leads by month end.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendingPace {
    pub average_daily: f64,
    pub projected_monthly: f64,
}

/// Extrapolates month-to-date spending using the day of month of `today`.
pub fn spending_pace(month_to_date: f64, today: NaiveDate) -> SpendingPace {
    let elapsed = today.day().max(1) as f64;
    let average_daily = month_to_date / elapsed;
    SpendingPace {
        average_daily,
        projected_monthly: average_daily * YearMonth::of(today).days() as f64,
    }
}
