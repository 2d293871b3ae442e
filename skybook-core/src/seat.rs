use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

/// Fare tier with independent price and inventory on every flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    Economy,
    Comfort,
    Business,
}

impl SeatClass {
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Comfort, SeatClass::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::Economy => "economy",
            SeatClass::Comfort => "comfort",
            SeatClass::Business => "business",
        }
    }
}

impl FromStr for SeatClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(SeatClass::Economy),
            "comfort" => Ok(SeatClass::Comfort),
            "business" => Ok(SeatClass::Business),
            other => Err(CoreError::ValidationError(format!(
                "unknown seat class: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SeatClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_classes() {
        assert_eq!("economy".parse::<SeatClass>().unwrap(), SeatClass::Economy);
        assert_eq!("comfort".parse::<SeatClass>().unwrap(), SeatClass::Comfort);
        assert_eq!(
            "business".parse::<SeatClass>().unwrap(),
            SeatClass::Business
        );
    }

    #[test]
    fn test_parse_unknown_class_is_validation_error() {
        let err = "first".parse::<SeatClass>();
        assert!(matches!(err, Err(CoreError::ValidationError(_))));
    }
}
