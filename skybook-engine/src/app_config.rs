use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Cancelling strictly more than this many hours before departure
    /// refunds the fare; at or inside it the fare is forfeited.
    #[serde(default = "default_refund_window")]
    pub refund_window_hours: i64,
    #[serde(default = "default_confirmation_prefix")]
    pub confirmation_prefix: String,
}

fn default_refund_window() -> i64 {
    skybook_ledger::DEFAULT_REFUND_WINDOW_HOURS
}

fn default_confirmation_prefix() -> String {
    "OSH".to_string()
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            refund_window_hours: default_refund_window(),
            confirmation_prefix: default_confirmation_prefix(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    pub file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // `SKYBOOK__BUSINESS_RULES__REFUND_WINDOW_HOURS=48` etc.
            .add_source(config::Environment::with_prefix("SKYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = BusinessRules::default();
        assert_eq!(rules.refund_window_hours, 24);
        assert_eq!(rules.confirmation_prefix, "OSH");
    }
}
