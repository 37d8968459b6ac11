use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::core::error::{AppError, Result};
use crate::features::collections::dtos::CollectionRowDto;
use crate::features::collections::models::{CollectionRecord, CollectionStatus, Transporter};
use crate::features::wastes::models::{WasteItem, WasteStatus};
use crate::features::wastes::services::waste_not_found;
use crate::modules::storage::{JsonCollection, Storage};
use crate::shared::constants::{COLLECTIONS_KEY, COLLECTION_ID_PREFIX, WASTES_KEY};
use crate::shared::format::generate_id;

/// Message shown when a non-pending item is assigned again
pub const ALREADY_ASSIGNED_MESSAGE: &str = "Ya fue asignado u otro estado.";

/// Collection record after pickup, plus its waste item if it still exists
#[derive(Debug, Clone)]
pub struct PickupOutcome {
    pub collection: CollectionRecord,
    pub waste: Option<WasteItem>,
}

/// Assignment and pickup of collections
pub struct CollectionService {
    storage: Arc<Storage>,
    pickup_lead_time: Duration,
}

impl CollectionService {
    pub fn new(storage: Arc<Storage>, pickup_lead_time_hours: i64) -> Self {
        Self {
            storage,
            pickup_lead_time: Duration::try_hours(pickup_lead_time_hours)
                .unwrap_or(Duration::MAX),
        }
    }

    fn wastes(&self) -> JsonCollection<WasteItem> {
        self.storage.collection(WASTES_KEY)
    }

    fn collections(&self) -> JsonCollection<CollectionRecord> {
        self.storage.collection(COLLECTIONS_KEY)
    }

    /// Schedule a pickup for a pending waste item and mark it assigned
    pub async fn assign(&self, waste_id: &str) -> Result<CollectionRecord> {
        let _guard = self.storage.lock().await;
        let wastes = self.wastes();
        let mut items = wastes.load().await?;

        let waste = items
            .iter_mut()
            .find(|w| w.id == waste_id)
            .ok_or_else(|| waste_not_found(waste_id))?;

        if waste.status != WasteStatus::Pending {
            return Err(AppError::InvalidState(ALREADY_ASSIGNED_MESSAGE.to_string()));
        }

        let scheduled_at = Utc::now()
            .checked_add_signed(self.pickup_lead_time)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Pickup lead time of {}h is out of range",
                    self.pickup_lead_time.num_hours()
                ))
            })?;

        let record = CollectionRecord {
            id: generate_id(COLLECTION_ID_PREFIX),
            waste_id: waste.id.clone(),
            transporter: Transporter::demo(),
            scheduled_at,
            picked_at: None,
            status: CollectionStatus::Scheduled,
        };

        let collections = self.collections();
        let mut records = collections.load().await?;
        records.insert(0, record.clone());
        collections.save(&records).await?;

        waste.status = WasteStatus::Assigned;
        wastes.save(&items).await?;

        tracing::info!(
            "Collection assigned: id={}, waste_id={}, scheduled_at={}",
            record.id,
            record.waste_id,
            record.scheduled_at
        );

        Ok(record)
    }

    /// Stamp a collection as picked up and put its waste item in transit.
    ///
    /// No precondition on the collection status: repeating the call re-stamps
    /// `picked_at`. The waste item only moves when it is assigned or already
    /// in transit; a missing item, or one already received or processed, is
    /// left untouched.
    pub async fn mark_picked_up(&self, collection_id: &str) -> Result<PickupOutcome> {
        let _guard = self.storage.lock().await;
        let collections = self.collections();
        let mut records = collections.load().await?;

        let record = records
            .iter_mut()
            .find(|c| c.id == collection_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Recolección '{}' no encontrada", collection_id))
            })?;

        record.picked_at = Some(Utc::now());
        record.status = CollectionStatus::PickedUp;
        let collection = record.clone();
        collections.save(&records).await?;

        let wastes = self.wastes();
        let mut items = wastes.load().await?;
        let position = items.iter().position(|w| w.id == collection.waste_id);

        let waste = match position {
            Some(i)
                if matches!(
                    items[i].status,
                    WasteStatus::Assigned | WasteStatus::InTransit
                ) =>
            {
                items[i].status = WasteStatus::InTransit;
                wastes.save(&items).await?;
                Some(items[i].clone())
            }
            Some(i) => {
                tracing::warn!(
                    "Waste id={} is '{}', pickup of collection id={} leaves it unchanged",
                    items[i].id,
                    items[i].status,
                    collection.id
                );
                Some(items[i].clone())
            }
            None => {
                tracing::warn!(
                    "Collection id={} points at missing waste id={}, skipping status cascade",
                    collection.id,
                    collection.waste_id
                );
                None
            }
        };

        tracing::info!(
            "Collection picked up: id={}, waste_id={}",
            collection.id,
            collection.waste_id
        );

        Ok(PickupOutcome { collection, waste })
    }

    /// All collection records, newest first
    pub async fn list(&self) -> Result<Vec<CollectionRecord>> {
        Ok(self.collections().load().await?)
    }

    /// Collection rows joined with their waste items
    pub async fn list_rows(&self) -> Result<Vec<CollectionRowDto>> {
        let records = self.list().await?;
        let items = self.wastes().load().await?;
        let by_id: HashMap<&str, &WasteItem> = items.iter().map(|w| (w.id.as_str(), w)).collect();

        Ok(records
            .iter()
            .map(|c| CollectionRowDto::render(c, by_id.get(c.waste_id.as_str()).copied()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DeletePolicy;
    use crate::features::wastes::WasteService;
    use crate::shared::test_helpers::{fake_registration, memory_storage};

    fn services() -> (WasteService, CollectionService) {
        let (_, wastes, collections) = services_with_storage(24);
        (wastes, collections)
    }

    fn services_with_storage(lead_hours: i64) -> (Arc<Storage>, WasteService, CollectionService) {
        let storage = memory_storage();
        (
            storage.clone(),
            WasteService::new(storage.clone(), DeletePolicy::Keep),
            CollectionService::new(storage, lead_hours),
        )
    }

    async fn raw_blobs(storage: &Storage) -> (Vec<serde_json::Value>, Vec<serde_json::Value>) {
        (
            storage.collection(WASTES_KEY).load().await.unwrap(),
            storage.collection(COLLECTIONS_KEY).load().await.unwrap(),
        )
    }

    #[tokio::test]
    async fn test_assign_pending_creates_one_collection() {
        let (wastes, collections) = services();
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();

        let before = Utc::now();
        let record = collections.assign(&waste.id).await.unwrap();

        assert_eq!(record.waste_id, waste.id);
        assert_eq!(record.status, CollectionStatus::Scheduled);
        assert_eq!(record.transporter, Transporter::demo());
        assert!(record.picked_at.is_none());
        assert!(record.scheduled_at >= before + Duration::hours(24));
        assert!(record.scheduled_at <= Utc::now() + Duration::hours(24));

        let all = collections.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(
            wastes.get(&waste.id).await.unwrap().status,
            WasteStatus::Assigned
        );
    }

    #[tokio::test]
    async fn test_assign_twice_is_invalid_state() {
        let (storage, wastes, collections) = services_with_storage(24);
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        collections.assign(&waste.id).await.unwrap();
        let before = raw_blobs(&storage).await;

        let err = collections.assign(&waste.id).await.unwrap_err();
        match err {
            AppError::InvalidState(msg) => assert_eq!(msg, ALREADY_ASSIGNED_MESSAGE),
            other => panic!("expected invalid state, got {:?}", other),
        }
        assert_eq!(raw_blobs(&storage).await, before);
        assert_eq!(collections.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_assign_after_pickup_and_processing_mutates_nothing() {
        let (storage, wastes, collections) = services_with_storage(24);
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        let record = collections.assign(&waste.id).await.unwrap();
        collections.mark_picked_up(&record.id).await.unwrap();

        let before = raw_blobs(&storage).await;
        assert!(matches!(
            collections.assign(&waste.id).await,
            Err(AppError::InvalidState(_))
        ));
        assert_eq!(raw_blobs(&storage).await, before);

        wastes.advance_status(&waste.id, "recibido").await.unwrap();
        wastes.advance_status(&waste.id, "procesado").await.unwrap();

        let before = raw_blobs(&storage).await;
        assert!(matches!(
            collections.assign(&waste.id).await,
            Err(AppError::InvalidState(_))
        ));
        assert_eq!(raw_blobs(&storage).await, before);
    }

    #[tokio::test]
    async fn test_assign_with_out_of_range_lead_time_fails_cleanly() {
        let (storage, wastes, collections) = services_with_storage(10_000_000_000);
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        let before = raw_blobs(&storage).await;

        assert!(matches!(
            collections.assign(&waste.id).await,
            Err(AppError::Internal(_))
        ));
        assert_eq!(raw_blobs(&storage).await, before);
        assert_eq!(
            wastes.get(&waste.id).await.unwrap().status,
            WasteStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_assign_unknown_is_not_found() {
        let (_, collections) = services();
        assert!(matches!(
            collections.assign("w_missing").await,
            Err(AppError::NotFound(_))
        ));
        assert!(collections.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_new_collections_are_listed_first() {
        let (wastes, collections) = services();
        let a = wastes.register(fake_registration("laptop")).await.unwrap();
        let b = wastes.register(fake_registration("tablet")).await.unwrap();
        collections.assign(&a.id).await.unwrap();
        collections.assign(&b.id).await.unwrap();

        let all = collections.list().await.unwrap();
        assert_eq!(all[0].waste_id, b.id);
        assert_eq!(all[1].waste_id, a.id);
    }

    #[tokio::test]
    async fn test_pickup_cascades_to_waste() {
        let (wastes, collections) = services();
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        let record = collections.assign(&waste.id).await.unwrap();

        let outcome = collections.mark_picked_up(&record.id).await.unwrap();
        assert_eq!(outcome.collection.status, CollectionStatus::PickedUp);
        assert!(outcome.collection.picked_at.is_some());
        assert_eq!(outcome.waste.unwrap().status, WasteStatus::InTransit);
        assert_eq!(
            wastes.get(&waste.id).await.unwrap().status,
            WasteStatus::InTransit
        );
    }

    #[tokio::test]
    async fn test_pickup_twice_restamps() {
        let (wastes, collections) = services();
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        let record = collections.assign(&waste.id).await.unwrap();

        let first = collections.mark_picked_up(&record.id).await.unwrap();
        let second = collections.mark_picked_up(&record.id).await.unwrap();

        assert_eq!(second.collection.status, CollectionStatus::PickedUp);
        assert!(second.collection.picked_at >= first.collection.picked_at);
        assert_eq!(second.waste.unwrap().status, WasteStatus::InTransit);
    }

    #[tokio::test]
    async fn test_repeat_pickup_keeps_processed_item() {
        let (wastes, collections) = services();
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        let record = collections.assign(&waste.id).await.unwrap();
        collections.mark_picked_up(&record.id).await.unwrap();
        wastes.advance_status(&waste.id, "recibido").await.unwrap();
        wastes.advance_status(&waste.id, "procesado").await.unwrap();

        let outcome = collections.mark_picked_up(&record.id).await.unwrap();

        assert_eq!(outcome.collection.status, CollectionStatus::PickedUp);
        assert_eq!(outcome.waste.unwrap().status, WasteStatus::Processed);
        assert_eq!(
            wastes.get(&waste.id).await.unwrap().status,
            WasteStatus::Processed
        );
    }

    #[tokio::test]
    async fn test_pickup_orphan_only_touches_collection() {
        let (wastes, collections) = services();
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        let survivor = wastes.register(fake_registration("tablet")).await.unwrap();
        let record = collections.assign(&waste.id).await.unwrap();
        wastes.remove(&waste.id).await.unwrap();

        let outcome = collections.mark_picked_up(&record.id).await.unwrap();
        assert!(outcome.waste.is_none());
        assert_eq!(outcome.collection.status, CollectionStatus::PickedUp);

        let remaining = wastes.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, survivor.id);
        assert_eq!(remaining[0].status, WasteStatus::Pending);
    }

    #[tokio::test]
    async fn test_pickup_unknown_is_not_found() {
        let (_, collections) = services();
        assert!(matches!(
            collections.mark_picked_up("c_missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_rows_mark_orphans() {
        let (wastes, collections) = services();
        let waste = wastes.register(fake_registration("laptop")).await.unwrap();
        collections.assign(&waste.id).await.unwrap();

        let rows = collections.list_rows().await.unwrap();
        assert_eq!(rows[0].title, "Recolección: Laptop");

        wastes.remove(&waste.id).await.unwrap();
        let rows = collections.list_rows().await.unwrap();
        assert_eq!(rows[0].user_name, "N/D");
    }
}
