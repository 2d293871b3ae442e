use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Datelike, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use skybook_core::{Booking, BookingStatus, CancelOutcome, PassengerDetails, SeatClass};
use skybook_inventory::{FlightInventory, InventoryError};

use crate::confirmation::ConfirmationCodes;
use crate::policy::{CancellationOutcome, CancellationPolicy};

struct LedgerState {
    bookings: HashMap<Uuid, Booking>,
    issued_codes: HashSet<String>,
}

/// Owns booking records and their lifecycle. Composes FlightInventory for
/// seat mutation and CancellationPolicy for the refund decision.
///
/// Both mutation paths run under the ledger write lock, so the
/// reserve-then-append unit of `create_booking` and the
/// release-then-transition unit of `cancel_booking` are serialized against
/// each other: no observer sees a moved counter without its matching record.
pub struct BookingLedger {
    inventory: Arc<FlightInventory>,
    policy: CancellationPolicy,
    codes: ConfirmationCodes,
    state: RwLock<LedgerState>,
}

impl BookingLedger {
    pub fn new(
        inventory: Arc<FlightInventory>,
        policy: CancellationPolicy,
        codes: ConfirmationCodes,
    ) -> Self {
        Self {
            inventory,
            policy,
            codes,
            state: RwLock::new(LedgerState {
                bookings: HashMap::new(),
                issued_codes: HashSet::new(),
            }),
        }
    }

    /// Reserve a seat and append the booking record as one unit. A failed
    /// reserve propagates with zero trace; after a successful reserve no
    /// fallible step remains before the append.
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        flight_id: Uuid,
        seat_class: SeatClass,
        passenger: PassengerDetails,
    ) -> Result<Booking, LedgerError> {
        passenger
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let flight = self
            .inventory
            .flight(flight_id)
            .await
            .ok_or_else(|| InventoryError::FlightNotFound(flight_id.to_string()))?;
        let price = flight.fares.price_for(seat_class);

        let mut state = self.state.write().await;

        // Timestamp read and code generation complete before the
        // inventory mutation, never interleaved with it.
        let booked_at = Utc::now();
        let code = self.codes.issue(booked_at.year(), &state.issued_codes);

        self.inventory.reserve(flight_id, seat_class).await?;

        let booking = Booking::new(
            user_id,
            flight_id,
            code.clone(),
            passenger,
            seat_class,
            price,
            booked_at,
        );
        state.issued_codes.insert(code);
        state.bookings.insert(booking.id, booking.clone());

        tracing::info!(
            booking_id = %booking.id,
            flight_id = %flight_id,
            class = %seat_class,
            code = %booking.confirmation_code,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Transition a confirmed booking out of `Confirmed`, releasing its
    /// seat exactly once. Terminal bookings are an idempotent no-op. The
    /// status moves only after a successful release, so a failed cancel
    /// leaves booking and inventory unchanged.
    pub async fn cancel_booking(&self, booking_id: Uuid) -> Result<CancelOutcome, LedgerError> {
        let mut state = self.state.write().await;

        let (flight_id, seat_class, status) = {
            let booking = state
                .bookings
                .get(&booking_id)
                .ok_or_else(|| LedgerError::BookingNotFound(booking_id.to_string()))?;
            (booking.flight_id, booking.seat_class, booking.status)
        };

        if status.is_terminal() {
            tracing::debug!(booking_id = %booking_id, status = %status, "cancel is a no-op");
            return Ok(CancelOutcome::AlreadyTerminal(status));
        }

        let flight = self
            .inventory
            .flight(flight_id)
            .await
            .ok_or_else(|| InventoryError::FlightNotFound(flight_id.to_string()))?;
        let time_to_departure = flight.departure - Utc::now();
        let outcome = self.policy.classify(time_to_departure);

        self.inventory.release(flight_id, seat_class).await?;

        let new_status = match outcome {
            CancellationOutcome::Refunded => BookingStatus::Refunded,
            CancellationOutcome::Cancelled => BookingStatus::Cancelled,
        };
        if let Some(booking) = state.bookings.get_mut(&booking_id) {
            booking.status = new_status;
        }

        tracing::info!(booking_id = %booking_id, status = %new_status, "booking closed");
        Ok(match outcome {
            CancellationOutcome::Refunded => CancelOutcome::Refunded,
            CancellationOutcome::Cancelled => CancelOutcome::Cancelled,
        })
    }

    pub async fn booking(&self, booking_id: Uuid) -> Option<Booking> {
        self.state.read().await.bookings.get(&booking_id).cloned()
    }

    /// Snapshot of all booking records, for read-side projections
    pub async fn snapshot(&self) -> Vec<Booking> {
        self.state.read().await.bookings.values().cloned().collect()
    }

    pub async fn booking_count(&self) -> usize {
        self.state.read().await.bookings.len()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
