use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::constants::{DEMO_TRANSPORTER_ID, DEMO_TRANSPORTER_NAME};

/// Pickup state of a collection record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CollectionStatus {
    Scheduled,
    PickedUp,
    Other(String),
}

impl CollectionStatus {
    pub fn code(&self) -> &str {
        match self {
            CollectionStatus::Scheduled => "programada",
            CollectionStatus::PickedUp => "recogida",
            CollectionStatus::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CollectionStatus::Scheduled => "Programada",
            CollectionStatus::PickedUp => "Recogida",
            CollectionStatus::Other(code) => code,
        }
    }
}

impl From<String> for CollectionStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "programada" | "scheduled" => CollectionStatus::Scheduled,
            "recogida" | "picked_up" => CollectionStatus::PickedUp,
            _ => CollectionStatus::Other(code),
        }
    }
}

impl From<CollectionStatus> for String {
    fn from(status: CollectionStatus) -> Self {
        match status {
            CollectionStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transporter {
    pub id: String,
    pub name: String,
}

impl Transporter {
    /// The single transporter used by the simulated logistics
    pub fn demo() -> Self {
        Self {
            id: DEMO_TRANSPORTER_ID.to_string(),
            name: DEMO_TRANSPORTER_NAME.to_string(),
        }
    }
}

/// Persisted pickup/transport record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRecord {
    pub id: String,
    /// Id of the waste item this pickup is for; may dangle after removal
    pub waste_id: String,
    pub transporter: Transporter,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub picked_at: Option<DateTime<Utc>>,
    pub status: CollectionStatus,
}
