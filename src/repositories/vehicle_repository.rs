//! Repositorio de vehículos
//!
//! Store clave-valor en memoria detrás de un trait inyectable. El core
//! nunca toca el store directamente: los controllers resuelven los datos
//! aquí y le pasan valores al motor.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::vehicle::{LastService, VehicleRecord};

/// Cambios opcionales de un upsert; los campos `None` se conservan
#[derive(Debug, Clone, Default)]
pub struct VehicleUpsert {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub avg_monthly_km: Option<f64>,
    pub last_services: HashMap<String, LastService>,
}

/// Contrato del store de vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn get(&self, vehicle_id: &str) -> Option<VehicleRecord>;

    /// Upsert con semántica de merge: `mileage` siempre se sobreescribe,
    /// los campos opcionales sólo cuando vienen y `last_services` se
    /// mergea ítem a ítem (una entrada nueva reemplaza la de ese ítem).
    async fn upsert(&self, vehicle_id: &str, mileage: i64, changes: VehicleUpsert)
        -> VehicleRecord;

    /// Alimenta el kilometraje desde un registro de servicio:
    /// `mileage = max(existente, nuevo)`, creando el registro si hace falta.
    async fn record_mileage(&self, vehicle_id: &str, mileage: i64) -> VehicleRecord;

    async fn list(&self) -> Vec<VehicleRecord>;

    async fn delete(&self, vehicle_id: &str) -> bool;
}

/// Implementación en memoria
#[derive(Clone, Default)]
pub struct InMemoryVehicleRepository {
    data: Arc<RwLock<HashMap<String, VehicleRecord>>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleRepository {
    async fn get(&self, vehicle_id: &str) -> Option<VehicleRecord> {
        self.data.read().await.get(vehicle_id).cloned()
    }

    async fn upsert(
        &self,
        vehicle_id: &str,
        mileage: i64,
        changes: VehicleUpsert,
    ) -> VehicleRecord {
        let mut data = self.data.write().await;
        let record = data
            .entry(vehicle_id.to_string())
            .or_insert_with(|| VehicleRecord::new(vehicle_id));

        record.mileage = mileage;
        if let Some(make) = changes.make {
            record.make = Some(make);
        }
        if let Some(model) = changes.model {
            record.model = Some(model);
        }
        if let Some(year) = changes.year {
            record.year = Some(year);
        }
        if let Some(avg) = changes.avg_monthly_km {
            record.avg_monthly_km = Some(avg);
        }
        for (item, service) in changes.last_services {
            record.last_services.insert(item, service);
        }

        log::info!("💾 Vehículo '{}' actualizado (mileage={})", vehicle_id, mileage);
        record.clone()
    }

    async fn record_mileage(&self, vehicle_id: &str, mileage: i64) -> VehicleRecord {
        let mut data = self.data.write().await;
        let record = data
            .entry(vehicle_id.to_string())
            .or_insert_with(|| VehicleRecord::new(vehicle_id));

        if mileage > record.mileage {
            record.mileage = mileage;
        }
        record.clone()
    }

    async fn list(&self) -> Vec<VehicleRecord> {
        let data = self.data.read().await;
        let mut records: Vec<VehicleRecord> = data.values().cloned().collect();
        // orden estable para la API aunque el mapa no lo tenga
        records.sort_by(|a, b| a.vehicle_id.cmp(&b.vehicle_id));
        records
    }

    async fn delete(&self, vehicle_id: &str) -> bool {
        self.data.write().await.remove(vehicle_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_merges_optional_fields() {
        let repo = InMemoryVehicleRepository::new();

        repo.upsert(
            "ABC123",
            10000,
            VehicleUpsert {
                make: Some("Toyota".to_string()),
                avg_monthly_km: Some(1200.0),
                ..Default::default()
            },
        )
        .await;

        // Segundo upsert sin make ni promedio: se conservan
        let record = repo.upsert("ABC123", 12000, VehicleUpsert::default()).await;
        assert_eq!(record.mileage, 12000);
        assert_eq!(record.make.as_deref(), Some("Toyota"));
        assert_eq!(record.avg_monthly_km, Some(1200.0));
    }

    #[tokio::test]
    async fn test_upsert_merges_last_services_per_item() {
        let repo = InMemoryVehicleRepository::new();

        let mut first = HashMap::new();
        first.insert(
            "engine_oil".to_string(),
            LastService {
                last_km: Some(8000),
                last_date: None,
            },
        );
        repo.upsert(
            "ABC123",
            10000,
            VehicleUpsert {
                last_services: first,
                ..Default::default()
            },
        )
        .await;

        let mut second = HashMap::new();
        second.insert(
            "coolant".to_string(),
            LastService {
                last_km: Some(9000),
                last_date: None,
            },
        );
        let record = repo
            .upsert(
                "ABC123",
                11000,
                VehicleUpsert {
                    last_services: second,
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(record.last_services.len(), 2);
        assert_eq!(
            record.last_services.get("engine_oil").unwrap().last_km,
            Some(8000)
        );
    }

    #[tokio::test]
    async fn test_record_mileage_keeps_maximum() {
        let repo = InMemoryVehicleRepository::new();

        let record = repo.record_mileage("ABC123", 50000).await;
        assert_eq!(record.mileage, 50000);

        // Un registro con km menor no rebaja el kilometraje
        let record = repo.record_mileage("ABC123", 42000).await;
        assert_eq!(record.mileage, 50000);

        let record = repo.record_mileage("ABC123", 61000).await;
        assert_eq!(record.mileage, 61000);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryVehicleRepository::new();
        repo.upsert("ABC123", 10000, VehicleUpsert::default()).await;

        assert!(repo.delete("ABC123").await);
        assert!(!repo.delete("ABC123").await);
        assert!(repo.get("ABC123").await.is_none());
    }
}
