//! Repositorio de registros de servicio
//!
//! Lista append-only en memoria. Los registros alimentan el kilometraje
//! del vehículo y la resolución del último servicio por ítem, pero la
//! lista en sí nunca se reescribe fuera de las operaciones CRUD.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::service_record::ServiceRecord;

/// Cambios parciales de un registro; los campos `None` se conservan
#[derive(Debug, Clone, Default)]
pub struct ServiceRecordUpdate {
    pub item: Option<String>,
    pub at_mileage: Option<i64>,
    pub notes: Option<String>,
}

/// Contrato del store de registros de servicio
#[async_trait]
pub trait ServiceRecordStore: Send + Sync {
    async fn create(
        &self,
        vehicle_id: &str,
        item: &str,
        at_mileage: i64,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> ServiceRecord;

    /// Lista en orden de inserción, opcionalmente filtrada por vehículo
    async fn list(&self, vehicle_id: Option<&str>) -> Vec<ServiceRecord>;

    async fn get(&self, id: Uuid) -> Option<ServiceRecord>;

    async fn update(&self, id: Uuid, changes: ServiceRecordUpdate) -> Option<ServiceRecord>;

    async fn delete(&self, id: Uuid) -> bool;
}

/// Implementación en memoria
#[derive(Clone, Default)]
pub struct InMemoryServiceRecordRepository {
    data: Arc<RwLock<Vec<ServiceRecord>>>,
}

impl InMemoryServiceRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRecordStore for InMemoryServiceRecordRepository {
    async fn create(
        &self,
        vehicle_id: &str,
        item: &str,
        at_mileage: i64,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> ServiceRecord {
        let record = ServiceRecord {
            id: Uuid::new_v4(),
            vehicle_id: vehicle_id.to_string(),
            item: item.to_string(),
            at_mileage,
            notes,
            created_at,
        };

        self.data.write().await.push(record.clone());
        log::info!(
            "💾 Registro de servicio '{}' para '{}' ({} @ {} km)",
            record.id,
            vehicle_id,
            item,
            at_mileage
        );
        record
    }

    async fn list(&self, vehicle_id: Option<&str>) -> Vec<ServiceRecord> {
        let data = self.data.read().await;
        match vehicle_id {
            Some(id) => data.iter().filter(|r| r.vehicle_id == id).cloned().collect(),
            None => data.clone(),
        }
    }

    async fn get(&self, id: Uuid) -> Option<ServiceRecord> {
        self.data.read().await.iter().find(|r| r.id == id).cloned()
    }

    async fn update(&self, id: Uuid, changes: ServiceRecordUpdate) -> Option<ServiceRecord> {
        let mut data = self.data.write().await;
        let record = data.iter_mut().find(|r| r.id == id)?;

        if let Some(item) = changes.item {
            record.item = item;
        }
        if let Some(at_mileage) = changes.at_mileage {
            record.at_mileage = at_mileage;
        }
        if let Some(notes) = changes.notes {
            record.notes = Some(notes);
        }
        Some(record.clone())
    }

    async fn delete(&self, id: Uuid) -> bool {
        let mut data = self.data.write().await;
        let before = data.len();
        data.retain(|r| r.id != id);
        data.len() < before
    }
}
