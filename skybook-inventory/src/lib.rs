pub mod inventory;

pub use inventory::{FlightInventory, InventoryError};
