use std::sync::Arc;

use crate::core::error::Result;
use crate::features::certificates::dtos::CertificateDto;
use crate::features::wastes::WasteService;

/// Builds downloadable certificates; reads the registry, never writes
pub struct CertificateService {
    wastes: Arc<WasteService>,
}

impl CertificateService {
    pub fn new(wastes: Arc<WasteService>) -> Self {
        Self { wastes }
    }

    pub async fn generate(&self, waste_id: &str) -> Result<CertificateDto> {
        let waste = self.wastes.get(waste_id).await?;
        let certificate = CertificateDto::snapshot(&waste);

        tracing::info!(
            "Certificate generated: id={}, waste_id={}",
            certificate.certificate_id,
            certificate.waste_id
        );

        Ok(certificate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DeletePolicy;
    use crate::core::error::AppError;
    use crate::features::collections::CollectionService;
    use crate::modules::storage::Storage;
    use crate::shared::constants::{COLLECTIONS_KEY, WASTES_KEY};
    use crate::shared::test_helpers::{ana_registration, memory_storage};

    async fn raw_blobs(storage: &Storage) -> (Vec<serde_json::Value>, Vec<serde_json::Value>) {
        (
            storage.collection(WASTES_KEY).load().await.unwrap(),
            storage.collection(COLLECTIONS_KEY).load().await.unwrap(),
        )
    }

    #[tokio::test]
    async fn test_generate_snapshots_without_mutating() {
        let storage = memory_storage();
        let wastes = Arc::new(WasteService::new(storage.clone(), DeletePolicy::Keep));
        let service = CertificateService::new(wastes.clone());
        let waste = wastes.register(ana_registration()).await.unwrap();

        let before = raw_blobs(&storage).await;
        let first = service.generate(&waste.id).await.unwrap();
        let second = service.generate(&waste.id).await.unwrap();
        let after = raw_blobs(&storage).await;

        assert_eq!(before, after);
        assert_ne!(first.certificate_id, second.certificate_id);
        assert_eq!(first.waste_id, waste.id);
        assert_eq!(first.status, "pendiente");
        assert_eq!(first.condition.as_deref(), Some("parcial"));
        assert_eq!(first.note, "Certificado generado por prototipo ECO-TECH (no válido legalmente).");
        assert_eq!(first.file_name(), format!("certificado_ecotech_{}.json", waste.id));
    }

    #[tokio::test]
    async fn test_snapshot_is_not_live() {
        let storage = memory_storage();
        let wastes = Arc::new(WasteService::new(storage.clone(), DeletePolicy::Keep));
        let collections = CollectionService::new(storage, 24);
        let service = CertificateService::new(wastes.clone());
        let waste = wastes.register(ana_registration()).await.unwrap();

        let certificate = service.generate(&waste.id).await.unwrap();
        collections.assign(&waste.id).await.unwrap();

        assert_eq!(certificate.status, "pendiente");
        assert_eq!(service.generate(&waste.id).await.unwrap().status, "asignado");
    }

    #[tokio::test]
    async fn test_generate_unknown_is_not_found() {
        let wastes = Arc::new(WasteService::new(memory_storage(), DeletePolicy::Keep));
        let service = CertificateService::new(wastes);
        assert!(matches!(
            service.generate("w_missing").await,
            Err(AppError::NotFound(_))
        ));
    }
}
