pub mod booking;
pub mod boundary;
pub mod flight;
pub mod identity;
pub mod seat;
pub mod stats;

pub use booking::{Booking, BookingStatus, PassengerDetails};
pub use boundary::{CancelOutcome, ReservationService};
pub use flight::{CabinLayout, FareSchedule, Flight, FlightStatus, SeatBlock};
pub use identity::{Identity, UserRole};
pub use seat::SeatClass;
pub use stats::{CompanyStats, StatsFilter};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
