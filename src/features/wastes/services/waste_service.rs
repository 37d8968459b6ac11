use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::core::config::DeletePolicy;
use crate::core::error::{AppError, Result};
use crate::features::collections::models::CollectionRecord;
use crate::features::wastes::dtos::{RegisterWasteCommand, RegisterWasteDto};
use crate::features::wastes::models::{
    NewWaste, PickupPoint, WasteItem, WasteOwner, WasteStatus,
};
use crate::modules::storage::{JsonCollection, Storage};
use crate::shared::constants::{COLLECTIONS_KEY, WASTES_KEY, WASTE_ID_PREFIX};
use crate::shared::format::generate_id;

/// Message shown when a required registration field is missing
pub const REQUIRED_FIELDS_MESSAGE: &str = "Completa los campos obligatorios";

pub fn waste_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Residuo '{}' no encontrado", id))
}

/// Result of a removal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub removed: bool,
    pub removed_collections: usize,
}

/// Registry of waste items
pub struct WasteService {
    storage: Arc<Storage>,
    delete_policy: DeletePolicy,
}

impl WasteService {
    pub fn new(storage: Arc<Storage>, delete_policy: DeletePolicy) -> Self {
        Self {
            storage,
            delete_policy,
        }
    }

    fn wastes(&self) -> JsonCollection<WasteItem> {
        self.storage.collection(WASTES_KEY)
    }

    fn collections(&self) -> JsonCollection<CollectionRecord> {
        self.storage.collection(COLLECTIONS_KEY)
    }

    /// Validate and store a new item at the front of the registry
    pub async fn register(&self, dto: RegisterWasteDto) -> Result<WasteItem> {
        let command = RegisterWasteCommand::from(dto);
        command
            .validate()
            .map_err(|e| AppError::from_validation(REQUIRED_FIELDS_MESSAGE, e))?;

        let new = NewWaste::from(command);
        let waste = WasteItem {
            id: generate_id(WASTE_ID_PREFIX),
            user: WasteOwner {
                name: new.name,
                email: new.email,
            },
            waste_type: new.waste_type,
            weight_kg: new.weight_kg,
            condition: new.condition,
            pickup_point: PickupPoint {
                address: new.address,
            },
            description: new.description,
            status: WasteStatus::Pending,
            created_at: Utc::now(),
        };

        let _guard = self.storage.lock().await;
        let store = self.wastes();
        let mut items = store.load().await?;
        items.insert(0, waste.clone());
        store.save(&items).await?;

        tracing::info!(
            "Waste registered: id={}, type={}, weight_kg={}",
            waste.id,
            waste.waste_type,
            waste.weight_kg
        );

        Ok(waste)
    }

    /// All items, newest first
    pub async fn list(&self) -> Result<Vec<WasteItem>> {
        Ok(self.wastes().load().await?)
    }

    pub async fn get(&self, id: &str) -> Result<WasteItem> {
        self.wastes()
            .load()
            .await?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or_else(|| waste_not_found(id))
    }

    /// Remove an item by id; absent ids are a no-op.
    ///
    /// Linked collection records are kept, removed, or block the removal
    /// depending on the configured [`DeletePolicy`].
    pub async fn remove(&self, id: &str) -> Result<RemoveOutcome> {
        let _guard = self.storage.lock().await;
        let store = self.wastes();
        let mut items = store.load().await?;

        let Some(pos) = items.iter().position(|w| w.id == id) else {
            tracing::debug!("Remove requested for unknown waste id={}", id);
            return Ok(RemoveOutcome {
                removed: false,
                removed_collections: 0,
            });
        };

        let collections = self.collections();
        let mut linked = collections.load().await?;
        let linked_count = linked.iter().filter(|c| c.waste_id == id).count();
        let mut removed_collections = 0;

        match self.delete_policy {
            DeletePolicy::Keep => {
                if linked_count > 0 {
                    tracing::warn!(
                        "Waste id={} removed, leaving {} orphaned collection record(s)",
                        id,
                        linked_count
                    );
                }
            }
            DeletePolicy::Block => {
                if linked_count > 0 {
                    return Err(AppError::Conflict(format!(
                        "El residuo tiene {} recolección(es) asociada(s) y no puede eliminarse",
                        linked_count
                    )));
                }
            }
            DeletePolicy::Cascade => {
                if linked_count > 0 {
                    linked.retain(|c| c.waste_id != id);
                    collections.save(&linked).await?;
                    removed_collections = linked_count;
                }
            }
        }

        items.remove(pos);
        store.save(&items).await?;

        tracing::info!(
            "Waste removed: id={}, removed_collections={}",
            id,
            removed_collections
        );

        Ok(RemoveOutcome {
            removed: true,
            removed_collections,
        })
    }

    /// Move a delivered item along `en_transito -> recibido -> procesado`
    pub async fn advance_status(&self, id: &str, target: &str) -> Result<WasteItem> {
        let target = WasteStatus::from(target.trim().to_string());

        let _guard = self.storage.lock().await;
        let store = self.wastes();
        let mut items = store.load().await?;
        let waste = items
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| waste_not_found(id))?;

        if !waste.status.can_advance_to(&target) {
            return Err(AppError::InvalidState(format!(
                "No se puede pasar de '{}' a '{}'",
                waste.status.label(),
                target.label()
            )));
        }

        let previous = std::mem::replace(&mut waste.status, target);
        let updated = waste.clone();
        store.save(&items).await?;

        tracing::info!(
            "Waste status advanced: id={}, {} -> {}",
            id,
            previous,
            updated.status
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::collections::models::{CollectionStatus, Transporter};
    use crate::shared::test_helpers::{fake_registration, memory_storage};

    fn service(policy: DeletePolicy) -> (Arc<Storage>, WasteService) {
        let storage = memory_storage();
        (storage.clone(), WasteService::new(storage, policy))
    }

    async fn link_collection(storage: &Storage, waste_id: &str) {
        let collections = storage.collection::<CollectionRecord>(COLLECTIONS_KEY);
        let mut records = collections.load().await.unwrap();
        records.insert(
            0,
            CollectionRecord {
                id: generate_id("c"),
                waste_id: waste_id.to_string(),
                transporter: Transporter::demo(),
                scheduled_at: Utc::now(),
                picked_at: None,
                status: CollectionStatus::Scheduled,
            },
        );
        collections.save(&records).await.unwrap();
    }

    #[tokio::test]
    async fn test_register_prepends_pending_item() {
        let (_, service) = service(DeletePolicy::Keep);

        let first = service.register(fake_registration("laptop")).await.unwrap();
        let second = service.register(fake_registration("celular")).await.unwrap();

        assert_eq!(first.status, WasteStatus::Pending);
        assert_eq!(second.status, WasteStatus::Pending);

        let items = service.list().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, second.id);
        assert_eq!(items[1].id, first.id);
    }

    #[tokio::test]
    async fn test_register_with_blank_field_stores_nothing() {
        let (_, service) = service(DeletePolicy::Keep);

        for field in ["name", "email", "type", "address"] {
            let mut dto = fake_registration("laptop");
            match field {
                "name" => dto.name = Some("   ".to_string()),
                "email" => dto.email = None,
                "type" => dto.waste_type = Some(String::new()),
                _ => dto.address = Some("\t".to_string()),
            }

            let err = service.register(dto).await.unwrap_err();
            match err {
                AppError::Validation { message, fields } => {
                    assert_eq!(message, REQUIRED_FIELDS_MESSAGE);
                    assert_eq!(fields.len(), 1);
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_defaults_unparsable_weight() {
        let (_, service) = service(DeletePolicy::Keep);
        let mut dto = fake_registration("monitor");
        dto.weight = Some(crate::features::wastes::dtos::WeightInput::Text(
            "pesado".to_string(),
        ));

        let waste = service.register(dto).await.unwrap();
        assert_eq!(waste.weight_kg, 0.0);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let (_, service) = service(DeletePolicy::Keep);
        assert!(matches!(
            service.get("w_missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let (_, service) = service(DeletePolicy::Keep);
        let kept = service.register(fake_registration("laptop")).await.unwrap();

        let outcome = service.remove("w_missing").await.unwrap();
        assert!(!outcome.removed);
        assert_eq!(service.list().await.unwrap()[0].id, kept.id);
    }

    #[tokio::test]
    async fn test_remove_keep_policy_leaves_orphans() {
        let (storage, service) = service(DeletePolicy::Keep);
        let waste = service.register(fake_registration("laptop")).await.unwrap();
        link_collection(&storage, &waste.id).await;

        let outcome = service.remove(&waste.id).await.unwrap();
        assert!(outcome.removed);
        assert_eq!(outcome.removed_collections, 0);

        let records = storage
            .collection::<CollectionRecord>(COLLECTIONS_KEY)
            .load()
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_cascade_policy_drops_linked_collections() {
        let (storage, service) = service(DeletePolicy::Cascade);
        let waste = service.register(fake_registration("laptop")).await.unwrap();
        let other = service.register(fake_registration("tablet")).await.unwrap();
        link_collection(&storage, &waste.id).await;
        link_collection(&storage, &other.id).await;

        let outcome = service.remove(&waste.id).await.unwrap();
        assert_eq!(outcome.removed_collections, 1);

        let records = storage
            .collection::<CollectionRecord>(COLLECTIONS_KEY)
            .load()
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].waste_id, other.id);
    }

    #[tokio::test]
    async fn test_remove_block_policy_refuses() {
        let (storage, service) = service(DeletePolicy::Block);
        let waste = service.register(fake_registration("laptop")).await.unwrap();
        link_collection(&storage, &waste.id).await;

        assert!(matches!(
            service.remove(&waste.id).await,
            Err(AppError::Conflict(_))
        ));
        assert_eq!(service.list().await.unwrap().len(), 1);

        // without collections the item goes away
        let free = service.register(fake_registration("mouse")).await.unwrap();
        assert!(service.remove(&free.id).await.unwrap().removed);
    }

    #[tokio::test]
    async fn test_advance_status_rejects_pending_item() {
        let (_, service) = service(DeletePolicy::Keep);
        let waste = service.register(fake_registration("laptop")).await.unwrap();

        let err = service
            .advance_status(&waste.id, "recibido")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(
            service.get(&waste.id).await.unwrap().status,
            WasteStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_advance_status_through_processing() {
        let (storage, service) = service(DeletePolicy::Keep);
        let waste = service.register(fake_registration("laptop")).await.unwrap();

        // put the item in transit directly
        let store = storage.collection::<WasteItem>(WASTES_KEY);
        let mut items = store.load().await.unwrap();
        items[0].status = WasteStatus::InTransit;
        store.save(&items).await.unwrap();

        let received = service.advance_status(&waste.id, "received").await.unwrap();
        assert_eq!(received.status, WasteStatus::Received);

        let processed = service
            .advance_status(&waste.id, "procesado")
            .await
            .unwrap();
        assert_eq!(processed.status, WasteStatus::Processed);

        assert!(service
            .advance_status(&waste.id, "recibido")
            .await
            .is_err());
    }
}
