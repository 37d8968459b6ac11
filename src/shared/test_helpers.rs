use std::sync::Arc;

use fake::{
    faker::{address::en::StreetName, internet::en::SafeEmail, name::en::Name},
    Fake,
};

use crate::features::wastes::dtos::{RegisterWasteDto, WeightInput};
use crate::modules::storage::{MemoryKvStore, Storage};

/// Storage over a fresh in-memory key-value store
pub fn memory_storage() -> Arc<Storage> {
    Arc::new(Storage::new(Arc::new(MemoryKvStore::new())))
}

/// A complete registration with random owner data
pub fn fake_registration(waste_type: &str) -> RegisterWasteDto {
    RegisterWasteDto {
        name: Some(Name().fake()),
        email: Some(SafeEmail().fake()),
        waste_type: Some(waste_type.to_string()),
        weight: Some(WeightInput::Number((0.1..30.0).fake())),
        condition: Some("funciona".to_string()),
        address: Some(StreetName().fake()),
        description: Some(String::new()),
    }
}

/// The registration used in the end-to-end walkthrough
pub fn ana_registration() -> RegisterWasteDto {
    RegisterWasteDto {
        name: Some("Ana".to_string()),
        email: Some("a@x.com".to_string()),
        waste_type: Some("laptop".to_string()),
        weight: Some(WeightInput::Number(2.5)),
        condition: Some("partial".to_string()),
        address: Some("Calle 1".to_string()),
        description: None,
    }
}
