use chrono::{DateTime, Duration, Local, Months, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

/// Reporting window for company statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsFilter {
    All,
    Today,
    Week,
    Month,
}

impl StatsFilter {
    /// Inclusive lower bound of the window, `None` when unbounded.
    /// "Today" starts at local midnight relative to `now`.
    pub fn window_start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            StatsFilter::All => None,
            StatsFilter::Today => now
                .with_timezone(&Local)
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
                .map(|dt| dt.with_timezone(&Utc)),
            StatsFilter::Week => Some(now - Duration::days(7)),
            StatsFilter::Month => now.checked_sub_months(Months::new(1)),
        }
    }
}

impl FromStr for StatsFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatsFilter::All),
            "today" => Ok(StatsFilter::Today),
            "week" => Ok(StatsFilter::Week),
            "month" => Ok(StatsFilter::Month),
            other => Err(CoreError::ValidationError(format!(
                "unknown stats filter: {}",
                other
            ))),
        }
    }
}

/// Company-level metrics over a reporting window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub total_flights: usize,
    pub upcoming_flights: usize,
    pub completed_flights: usize,
    pub total_passengers: usize,
    pub total_revenue: i64,
}
