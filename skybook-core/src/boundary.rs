use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::{Booking, BookingStatus, PassengerDetails};
use crate::flight::Flight;
use crate::identity::Identity;
use crate::seat::SeatClass;
use crate::stats::{CompanyStats, StatsFilter};

/// Outcome of a cancellation request. A booking already in a terminal
/// status is reported as `AlreadyTerminal`, which is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelOutcome {
    Refunded,
    Cancelled,
    AlreadyTerminal(BookingStatus),
}

/// Service boundary exposed to collaborators (HTTP adapters, schedulers).
/// These four operations are the only entry points that may touch seat
/// counters or booking state.
#[async_trait]
pub trait ReservationService: Send + Sync {
    async fn create_booking(
        &self,
        identity: &Identity,
        flight_id: Uuid,
        seat_class: SeatClass,
        passenger: PassengerDetails,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>>;

    async fn cancel_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<CancelOutcome, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_flight(
        &self,
        flight_id: Uuid,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_stats(
        &self,
        company_id: Uuid,
        filter: StatsFilter,
    ) -> Result<CompanyStats, Box<dyn std::error::Error + Send + Sync>>;
}
