use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Physical condition of a registered item.
///
/// Stored with the prototype's wire codes; English names are accepted on
/// input. Unknown codes survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WasteCondition {
    Functional,
    NonFunctional,
    Partial,
    Other(String),
}

impl WasteCondition {
    pub fn code(&self) -> &str {
        match self {
            WasteCondition::Functional => "funciona",
            WasteCondition::NonFunctional => "no_funciona",
            WasteCondition::Partial => "parcial",
            WasteCondition::Other(code) => code,
        }
    }

    /// Display label, falling back to the raw code
    pub fn label(&self) -> &str {
        match self {
            WasteCondition::Functional => "Funciona",
            WasteCondition::NonFunctional => "No funciona",
            WasteCondition::Partial => "Parcial",
            WasteCondition::Other(code) => code,
        }
    }
}

impl From<String> for WasteCondition {
    fn from(code: String) -> Self {
        match code.as_str() {
            "funciona" | "functional" => WasteCondition::Functional,
            "no_funciona" | "non_functional" => WasteCondition::NonFunctional,
            "parcial" | "partial" => WasteCondition::Partial,
            _ => WasteCondition::Other(code),
        }
    }
}

impl From<WasteCondition> for String {
    fn from(condition: WasteCondition) -> Self {
        match condition {
            WasteCondition::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for WasteCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Lifecycle stage of a waste item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WasteStatus {
    Pending,
    Assigned,
    InTransit,
    Received,
    Processed,
    Other(String),
}

impl WasteStatus {
    pub fn code(&self) -> &str {
        match self {
            WasteStatus::Pending => "pendiente",
            WasteStatus::Assigned => "asignado",
            WasteStatus::InTransit => "en_transito",
            WasteStatus::Received => "recibido",
            WasteStatus::Processed => "procesado",
            WasteStatus::Other(code) => code,
        }
    }

    /// Display label, falling back to the raw code
    pub fn label(&self) -> &str {
        match self {
            WasteStatus::Pending => "Pendiente",
            WasteStatus::Assigned => "Asignado",
            WasteStatus::InTransit => "En tránsito",
            WasteStatus::Received => "Recibido",
            WasteStatus::Processed => "Procesado",
            WasteStatus::Other(code) => code,
        }
    }

    /// Transitions reachable through the status endpoint.
    ///
    /// `pending -> assigned` and `assigned -> in_transit` are owned by
    /// assignment and pickup completion and are not listed here.
    pub fn can_advance_to(&self, target: &WasteStatus) -> bool {
        matches!(
            (self, target),
            (WasteStatus::InTransit, WasteStatus::Received)
                | (WasteStatus::Received, WasteStatus::Processed)
        )
    }
}

impl From<String> for WasteStatus {
    fn from(code: String) -> Self {
        match code.as_str() {
            "pendiente" | "pending" => WasteStatus::Pending,
            "asignado" | "assigned" => WasteStatus::Assigned,
            "en_transito" | "in_transit" => WasteStatus::InTransit,
            "recibido" | "received" => WasteStatus::Received,
            "procesado" | "processed" => WasteStatus::Processed,
            _ => WasteStatus::Other(code),
        }
    }
}

impl From<WasteStatus> for String {
    fn from(status: WasteStatus) -> Self {
        match status {
            WasteStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for WasteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteOwner {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupPoint {
    pub address: String,
}

/// Persisted waste item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteItem {
    pub id: String,
    pub user: WasteOwner,
    #[serde(rename = "type")]
    pub waste_type: String,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub condition: Option<WasteCondition>,
    pub pickup_point: PickupPoint,
    #[serde(default)]
    pub description: String,
    pub status: WasteStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new waste item
#[derive(Debug, Clone)]
pub struct NewWaste {
    pub name: String,
    pub email: String,
    pub waste_type: String,
    pub weight_kg: f64,
    pub condition: Option<WasteCondition>,
    pub address: String,
    pub description: String,
}
