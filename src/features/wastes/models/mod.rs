mod waste;

pub use waste::{NewWaste, PickupPoint, WasteCondition, WasteItem, WasteOwner, WasteStatus};
