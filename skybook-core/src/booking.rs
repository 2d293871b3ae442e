use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seat::SeatClass;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Refunded,
}

impl BookingStatus {
    /// Terminal statuses permit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Refunded)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Refunded => "refunded",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub email: String,
}

impl PassengerDetails {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "passenger name must not be empty".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(CoreError::ValidationError(format!(
                "malformed passenger email: {}",
                self.email
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub flight_id: Uuid,
    pub confirmation_code: String,
    pub passenger: PassengerDetails,
    pub seat_class: SeatClass,
    pub price: i64,
    pub booked_at: DateTime<Utc>,
    pub status: BookingStatus,
}

impl Booking {
    pub fn new(
        user_id: Uuid,
        flight_id: Uuid,
        confirmation_code: String,
        passenger: PassengerDetails,
        seat_class: SeatClass,
        price: i64,
        booked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            flight_id,
            confirmation_code,
            passenger,
            seat_class,
            price,
            booked_at,
            status: BookingStatus::Confirmed,
        }
    }
}
