mod waste_service;

pub use waste_service::{waste_not_found, RemoveOutcome, WasteService, REQUIRED_FIELDS_MESSAGE};
