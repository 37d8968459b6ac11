mod collection_service;

pub use collection_service::{CollectionService, PickupOutcome, ALREADY_ASSIGNED_MESSAGE};
