use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seat::SeatClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// Per-class price in minor currency units
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FareSchedule {
    pub economy: i64,
    pub comfort: i64,
    pub business: i64,
}

impl FareSchedule {
    pub fn price_for(&self, class: SeatClass) -> i64 {
        match class {
            SeatClass::Economy => self.economy,
            SeatClass::Comfort => self.comfort,
            SeatClass::Business => self.business,
        }
    }
}

/// Seat counters for a single fare class
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeatBlock {
    pub total: u32,
    pub available: u32,
}

impl SeatBlock {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            available: total,
        }
    }
}

/// One seat block per fare class
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CabinLayout {
    pub economy: SeatBlock,
    pub comfort: SeatBlock,
    pub business: SeatBlock,
}

impl CabinLayout {
    pub fn block(&self, class: SeatClass) -> &SeatBlock {
        match class {
            SeatClass::Economy => &self.economy,
            SeatClass::Comfort => &self.comfort,
            SeatClass::Business => &self.business,
        }
    }

    pub fn block_mut(&mut self, class: SeatClass) -> &mut SeatBlock {
        match class {
            SeatClass::Economy => &mut self.economy,
            SeatClass::Comfort => &mut self.comfort,
            SeatClass::Business => &mut self.business,
        }
    }

    /// True when every class holds `available <= total`
    pub fn is_consistent(&self) -> bool {
        SeatClass::ALL
            .iter()
            .all(|class| self.block(*class).available <= self.block(*class).total)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub company_id: Uuid,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub fares: FareSchedule,
    pub cabin: CabinLayout,
    pub status: FlightStatus,
}

impl Flight {
    pub fn has_departed(&self, now: DateTime<Utc>) -> bool {
        self.departure < now
    }
}
