use chrono::Duration;

/// Default refund window. Deployments override it through configuration;
/// BookingLedger never reads the raw number.
pub const DEFAULT_REFUND_WINDOW_HOURS: i64 = 24;

/// What a cancellation resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationOutcome {
    Refunded,
    Cancelled,
}

/// Pure classification of a cancellation by time to departure. Strictly
/// more than the window left means the fare is refunded; exactly at the
/// window or inside it (including past departure) forfeits the fare.
#[derive(Debug, Clone, Copy)]
pub struct CancellationPolicy {
    refund_window: Duration,
}

impl CancellationPolicy {
    pub fn new(refund_window_hours: i64) -> Self {
        Self {
            refund_window: Duration::hours(refund_window_hours),
        }
    }

    pub fn classify(&self, time_to_departure: Duration) -> CancellationOutcome {
        if time_to_departure > self.refund_window {
            CancellationOutcome::Refunded
        } else {
            CancellationOutcome::Cancelled
        }
    }
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_REFUND_WINDOW_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_boundary() {
        let policy = CancellationPolicy::default();

        assert_eq!(
            policy.classify(Duration::hours(25)),
            CancellationOutcome::Refunded
        );
        assert_eq!(
            policy.classify(Duration::hours(23)),
            CancellationOutcome::Cancelled
        );
        // Exactly at the window is not strictly greater
        assert_eq!(
            policy.classify(Duration::hours(24)),
            CancellationOutcome::Cancelled
        );
    }

    #[test]
    fn test_past_departure_forfeits() {
        let policy = CancellationPolicy::default();
        assert_eq!(
            policy.classify(Duration::hours(-2)),
            CancellationOutcome::Cancelled
        );
    }

    #[test]
    fn test_configurable_window() {
        let policy = CancellationPolicy::new(48);
        assert_eq!(
            policy.classify(Duration::hours(25)),
            CancellationOutcome::Cancelled
        );
        assert_eq!(
            policy.classify(Duration::hours(49)),
            CancellationOutcome::Refunded
        );
    }
}
