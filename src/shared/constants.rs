/// Storage key of the waste item collection
pub const WASTES_KEY: &str = "ecotech_wastes_v1";

/// Storage key of the collection record collection
pub const COLLECTIONS_KEY: &str = "ecotech_collections_v1";

// =============================================================================
// DEMO DATA
// =============================================================================

/// Transporter assigned to every simulated collection
pub const DEMO_TRANSPORTER_ID: &str = "trans_001";
pub const DEMO_TRANSPORTER_NAME: &str = "Transportadora Demo";

/// Disclaimer embedded in every generated certificate
pub const CERTIFICATE_NOTE: &str =
    "Certificado generado por prototipo ECO-TECH (no válido legalmente).";

/// Maximum number of description characters shown on a dashboard row
pub const DESCRIPTION_LABEL_MAX_CHARS: usize = 40;

/// Placeholder for data that is no longer available (e.g. a removed waste item)
pub const NOT_AVAILABLE: &str = "N/D";

/// Where clients should go after a successful registration
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where clients go to register a new item
pub const REGISTER_PATH: &str = "/register";

// =============================================================================
// ID PREFIXES
// =============================================================================

pub const WASTE_ID_PREFIX: &str = "w";
pub const COLLECTION_ID_PREFIX: &str = "c";
pub const CERTIFICATE_ID_PREFIX: &str = "cert";
