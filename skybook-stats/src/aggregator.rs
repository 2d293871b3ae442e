use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use skybook_core::{Booking, BookingStatus, CompanyStats, Flight, FlightStatus, StatsFilter};
use skybook_inventory::FlightInventory;
use skybook_ledger::BookingLedger;

/// Read-only projection of company metrics from inventory and ledger
/// snapshots. Never mutates either side; informational, so it aggregates
/// over a recent consistent snapshot rather than a linearized view.
pub struct StatsAggregator {
    inventory: Arc<FlightInventory>,
    ledger: Arc<BookingLedger>,
}

impl StatsAggregator {
    pub fn new(inventory: Arc<FlightInventory>, ledger: Arc<BookingLedger>) -> Self {
        Self { inventory, ledger }
    }

    pub async fn company_stats(&self, company_id: Uuid, filter: StatsFilter) -> CompanyStats {
        let flights = self.inventory.company_flights(company_id).await;
        let bookings = self.ledger.snapshot().await;
        project(&flights, &bookings, filter, Utc::now())
    }
}

/// Aggregate metrics for one company's flights. Passenger and revenue
/// totals cover confirmed bookings on those flights whose booking
/// timestamp falls inside the filter window.
pub fn project(
    flights: &[Flight],
    bookings: &[Booking],
    filter: StatsFilter,
    now: DateTime<Utc>,
) -> CompanyStats {
    let window_start = filter.window_start(now);
    let flight_ids: HashSet<Uuid> = flights.iter().map(|f| f.id).collect();

    let upcoming_flights = flights
        .iter()
        .filter(|f| f.status == FlightStatus::Upcoming && f.departure > now)
        .count();
    let completed_flights = flights
        .iter()
        .filter(|f| f.status == FlightStatus::Completed || f.has_departed(now))
        .count();

    let selected = bookings.iter().filter(|b| {
        b.status == BookingStatus::Confirmed
            && flight_ids.contains(&b.flight_id)
            && window_start.map_or(true, |start| b.booked_at >= start)
    });

    let mut total_passengers = 0;
    let mut total_revenue = 0;
    for booking in selected {
        total_passengers += 1;
        total_revenue += booking.price;
    }

    CompanyStats {
        total_flights: flights.len(),
        upcoming_flights,
        completed_flights,
        total_passengers,
        total_revenue,
    }
}
