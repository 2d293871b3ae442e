pub mod app_config;
pub mod seed;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use skybook_core::{
    Booking, CancelOutcome, CompanyStats, Flight, Identity, PassengerDetails, ReservationService,
    SeatClass, StatsFilter,
};
use skybook_inventory::{FlightInventory, InventoryError};
use skybook_ledger::{BookingLedger, CancellationPolicy, ConfirmationCodes, LedgerError};
use skybook_stats::StatsAggregator;

pub use app_config::{BusinessRules, Config};
pub use seed::SeedData;

/// Wires inventory, ledger and stats into one service with an explicit
/// lifecycle: construct, seed, serve, shut down. There is no ambient
/// global state; dropping the engine drops everything it owns.
pub struct Engine {
    inventory: Arc<FlightInventory>,
    ledger: Arc<BookingLedger>,
    stats: StatsAggregator,
}

impl Engine {
    pub fn new(rules: &BusinessRules) -> Self {
        let inventory = Arc::new(FlightInventory::new());
        let ledger = Arc::new(BookingLedger::new(
            inventory.clone(),
            CancellationPolicy::new(rules.refund_window_hours),
            ConfirmationCodes::new(rules.confirmation_prefix.clone()),
        ));
        let stats = StatsAggregator::new(inventory.clone(), ledger.clone());
        Self {
            inventory,
            ledger,
            stats,
        }
    }

    /// Register seed flights. Returns how many were accepted.
    pub async fn seed(&self, flights: Vec<Flight>) -> Result<usize, EngineError> {
        let mut accepted = 0;
        for flight in flights {
            self.inventory.add_flight(flight).await?;
            accepted += 1;
        }
        tracing::info!(flights = accepted, "seed data loaded");
        Ok(accepted)
    }

    pub async fn seed_from_file(&self, path: impl AsRef<Path>) -> Result<usize, EngineError> {
        let data = SeedData::from_file(path)?;
        self.seed(data.flights).await
    }

    pub async fn flights(&self) -> Vec<Flight> {
        self.inventory.snapshot().await
    }

    /// Explicit teardown. State is dropped with the engine; this exists so
    /// callers shut the core down deliberately rather than by leak.
    pub async fn shutdown(self) {
        let flights = self.inventory.flight_count().await;
        let bookings = self.ledger.booking_count().await;
        tracing::info!(flights, bookings, "engine shut down");
    }
}

#[async_trait]
impl ReservationService for Engine {
    async fn create_booking(
        &self,
        identity: &Identity,
        flight_id: Uuid,
        seat_class: SeatClass,
        passenger: PassengerDetails,
    ) -> Result<Booking, Box<dyn std::error::Error + Send + Sync>> {
        let booking = self
            .ledger
            .create_booking(identity.user_id, flight_id, seat_class, passenger)
            .await?;
        Ok(booking)
    }

    async fn cancel_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<CancelOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let outcome = self.ledger.cancel_booking(booking_id).await?;
        Ok(outcome)
    }

    async fn get_flight(
        &self,
        flight_id: Uuid,
    ) -> Result<Option<Flight>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.inventory.flight(flight_id).await)
    }

    async fn get_stats(
        &self,
        company_id: Uuid,
        filter: StatsFilter,
    ) -> Result<CompanyStats, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.stats.company_stats(company_id, filter).await)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Seed file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed data malformed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
