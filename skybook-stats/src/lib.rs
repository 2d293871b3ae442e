pub mod aggregator;

pub use aggregator::StatsAggregator;
