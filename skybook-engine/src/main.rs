use skybook_core::{Identity, PassengerDetails, ReservationService, SeatClass, StatsFilter};
use skybook_engine::{Config, Engine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!(
        refund_window_hours = config.business_rules.refund_window_hours,
        "starting skybook engine"
    );

    let engine = Engine::new(&config.business_rules);

    if let Some(path) = &config.seed.file {
        let count = engine
            .seed_from_file(path)
            .await
            .expect("Failed to load seed data");
        tracing::info!(count, path = %path, "flights seeded");
    }

    // Walk one booking through its lifecycle as a smoke check
    let flights = engine.flights().await;
    if let Some(flight) = flights.first() {
        let identity = Identity::customer(Uuid::new_v4());
        let passenger = PassengerDetails {
            name: "Demo Passenger".to_string(),
            email: "demo@example.com".to_string(),
        };

        let booking = engine
            .create_booking(&identity, flight.id, SeatClass::Economy, passenger)
            .await
            .expect("Demo booking failed");
        tracing::info!(code = %booking.confirmation_code, "demo booking confirmed");

        let outcome = engine
            .cancel_booking(booking.id)
            .await
            .expect("Demo cancel failed");
        tracing::info!(?outcome, "demo booking cancelled");

        let stats = engine
            .get_stats(flight.company_id, StatsFilter::Today)
            .await
            .expect("Stats failed");
        tracing::info!(?stats, "company stats");
    }

    engine.shutdown().await;
}
