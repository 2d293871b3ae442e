use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role granted by the authentication boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    CompanyManager,
    Admin,
}

/// Authenticated caller, verified upstream. The core records who acted
/// but never checks credentials itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl Identity {
    pub fn customer(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: UserRole::Customer,
        }
    }
}
