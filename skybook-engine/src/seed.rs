use std::path::Path;

use skybook_core::Flight;

use crate::EngineError;

/// Seed flights are plain JSON produced by the flight-management
/// collaborator; the engine loads them once at startup.
#[derive(Debug, serde::Deserialize)]
pub struct SeedData {
    pub flights: Vec<Flight>,
}

impl SeedData {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        let data: SeedData = serde_json::from_str(&raw)?;
        Ok(data)
    }
}
