use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use skybook_core::{Flight, SeatClass};

/// Single writer for per-class seat counters. Every `reserve`/`release`
/// takes the write lock, so calls against the same flight/class never race.
/// No other component mutates availability.
pub struct FlightInventory {
    flights: RwLock<HashMap<Uuid, Flight>>,
}

impl FlightInventory {
    pub fn new() -> Self {
        Self {
            flights: RwLock::new(HashMap::new()),
        }
    }

    /// Register a flight created by the flight-management collaborator.
    /// Seat counters become this component's property from here on.
    pub async fn add_flight(&self, flight: Flight) -> Result<(), InventoryError> {
        if !flight.cabin.is_consistent() {
            return Err(InventoryError::InvalidLayout(flight.id.to_string()));
        }
        let mut flights = self.flights.write().await;
        if flights.contains_key(&flight.id) {
            return Err(InventoryError::DuplicateFlight(flight.id.to_string()));
        }
        tracing::info!(flight_id = %flight.id, number = %flight.flight_number, "flight registered");
        flights.insert(flight.id, flight);
        Ok(())
    }

    /// Take one seat of `class`. Fails with `SeatUnavailable` when the
    /// class is sold out; the counter is untouched on failure.
    pub async fn reserve(&self, flight_id: Uuid, class: SeatClass) -> Result<(), InventoryError> {
        let mut flights = self.flights.write().await;
        let flight = flights
            .get_mut(&flight_id)
            .ok_or_else(|| InventoryError::FlightNotFound(flight_id.to_string()))?;

        let block = flight.cabin.block_mut(class);
        if block.available == 0 {
            return Err(InventoryError::SeatUnavailable {
                flight_id: flight_id.to_string(),
                class,
            });
        }
        block.available -= 1;
        tracing::debug!(flight_id = %flight_id, class = %class, available = block.available, "seat reserved");
        Ok(())
    }

    /// Return one seat of `class`. Pushing `available` past `total` means a
    /// release with no matching reservation; that is a bug elsewhere and is
    /// surfaced as `Corruption`, never clamped.
    pub async fn release(&self, flight_id: Uuid, class: SeatClass) -> Result<(), InventoryError> {
        let mut flights = self.flights.write().await;
        let flight = flights
            .get_mut(&flight_id)
            .ok_or_else(|| InventoryError::FlightNotFound(flight_id.to_string()))?;

        let block = flight.cabin.block_mut(class);
        if block.available >= block.total {
            tracing::error!(
                flight_id = %flight_id,
                class = %class,
                available = block.available,
                total = block.total,
                "release would exceed total capacity"
            );
            return Err(InventoryError::Corruption {
                flight_id: flight_id.to_string(),
                class,
            });
        }
        block.available += 1;
        tracing::debug!(flight_id = %flight_id, class = %class, available = block.available, "seat released");
        Ok(())
    }

    /// Snapshot of a single flight
    pub async fn flight(&self, flight_id: Uuid) -> Option<Flight> {
        self.flights.read().await.get(&flight_id).cloned()
    }

    /// Snapshot of all flights owned by a company
    pub async fn company_flights(&self, company_id: Uuid) -> Vec<Flight> {
        self.flights
            .read()
            .await
            .values()
            .filter(|f| f.company_id == company_id)
            .cloned()
            .collect()
    }

    /// Snapshot of every registered flight
    pub async fn snapshot(&self) -> Vec<Flight> {
        self.flights.read().await.values().cloned().collect()
    }

    pub async fn flight_count(&self) -> usize {
        self.flights.read().await.len()
    }
}

impl Default for FlightInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("No {class} seat available on flight {flight_id}")]
    SeatUnavailable { flight_id: String, class: SeatClass },

    #[error("Inventory corruption on flight {flight_id} ({class}): release exceeds capacity")]
    Corruption { flight_id: String, class: SeatClass },

    #[error("Flight already registered: {0}")]
    DuplicateFlight(String),

    #[error("Seat layout inconsistent for flight {0}")]
    InvalidLayout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use skybook_core::{CabinLayout, FareSchedule, FlightStatus, SeatBlock};

    fn test_flight(economy_total: u32) -> Flight {
        let departure = Utc::now() + Duration::days(3);
        Flight {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            flight_number: "SB-101".to_string(),
            origin: "FRU".to_string(),
            destination: "OSS".to_string(),
            departure,
            arrival: departure + Duration::hours(1),
            fares: FareSchedule {
                economy: 8_000,
                comfort: 15_000,
                business: 40_000,
            },
            cabin: CabinLayout {
                economy: SeatBlock::new(economy_total),
                comfort: SeatBlock::new(10),
                business: SeatBlock::new(4),
            },
            status: FlightStatus::Upcoming,
        }
    }

    #[tokio::test]
    async fn test_reserve_release_lifecycle() {
        let inventory = FlightInventory::new();
        let flight = test_flight(2);
        let id = flight.id;
        inventory.add_flight(flight).await.unwrap();

        inventory.reserve(id, SeatClass::Economy).await.unwrap();
        let snap = inventory.flight(id).await.unwrap();
        assert_eq!(snap.cabin.economy.available, 1);

        inventory.release(id, SeatClass::Economy).await.unwrap();
        let snap = inventory.flight(id).await.unwrap();
        assert_eq!(snap.cabin.economy.available, 2);
    }

    #[tokio::test]
    async fn test_reserve_sold_out_class() {
        let inventory = FlightInventory::new();
        let flight = test_flight(1);
        let id = flight.id;
        inventory.add_flight(flight).await.unwrap();

        inventory.reserve(id, SeatClass::Economy).await.unwrap();
        let err = inventory.reserve(id, SeatClass::Economy).await;
        assert!(matches!(err, Err(InventoryError::SeatUnavailable { .. })));

        // Other classes are independent
        inventory.reserve(id, SeatClass::Business).await.unwrap();
        let snap = inventory.flight(id).await.unwrap();
        assert_eq!(snap.cabin.economy.available, 0);
        assert_eq!(snap.cabin.business.available, 3);
    }

    #[tokio::test]
    async fn test_release_past_total_is_corruption() {
        let inventory = FlightInventory::new();
        let flight = test_flight(2);
        let id = flight.id;
        inventory.add_flight(flight).await.unwrap();

        let err = inventory.release(id, SeatClass::Economy).await;
        assert!(matches!(err, Err(InventoryError::Corruption { .. })));

        // Counter untouched
        let snap = inventory.flight(id).await.unwrap();
        assert_eq!(snap.cabin.economy.available, 2);
    }

    #[tokio::test]
    async fn test_duplicate_and_unknown_flights() {
        let inventory = FlightInventory::new();
        let flight = test_flight(2);
        let id = flight.id;
        inventory.add_flight(flight.clone()).await.unwrap();

        let dup = inventory.add_flight(flight).await;
        assert!(matches!(dup, Err(InventoryError::DuplicateFlight(_))));

        let missing = inventory.reserve(Uuid::new_v4(), SeatClass::Economy).await;
        assert!(matches!(missing, Err(InventoryError::FlightNotFound(_))));
        assert_eq!(inventory.flight_count().await, 1);
        assert_eq!(inventory.flight(id).await.unwrap().cabin.economy.available, 2);
    }

    #[tokio::test]
    async fn test_invalid_layout_rejected() {
        let inventory = FlightInventory::new();
        let mut flight = test_flight(2);
        flight.cabin.economy.available = 5;
        let err = inventory.add_flight(flight).await;
        assert!(matches!(err, Err(InventoryError::InvalidLayout(_))));
    }
}
