use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::service_record_dto::{CreateServiceRecordRequest, UpdateServiceRecordRequest};
use crate::models::service_record::ServiceRecord;
use crate::repositories::service_record_repository::{ServiceRecordStore, ServiceRecordUpdate};
use crate::repositories::vehicle_repository::VehicleStore;
use crate::utils::errors::{not_found_error, AppError};

pub struct ServiceRecordController {
    records: Arc<dyn ServiceRecordStore>,
    vehicles: Arc<dyn VehicleStore>,
}

impl ServiceRecordController {
    pub fn new(records: Arc<dyn ServiceRecordStore>, vehicles: Arc<dyn VehicleStore>) -> Self {
        Self { records, vehicles }
    }

    pub async fn create(
        &self,
        request: CreateServiceRecordRequest,
    ) -> Result<ServiceRecord, AppError> {
        request.validate()?;

        let created_at = request.created_at.unwrap_or_else(Utc::now);
        let record = self
            .records
            .create(
                &request.vehicle_id,
                &request.item,
                request.at_mileage,
                request.notes,
                created_at,
            )
            .await;

        // El historial alimenta el kilometraje del vehículo
        self.vehicles
            .record_mileage(&request.vehicle_id, request.at_mileage)
            .await;

        Ok(record)
    }

    pub async fn list(&self, vehicle_id: Option<&str>) -> Vec<ServiceRecord> {
        self.records.list(vehicle_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceRecordRequest,
    ) -> Result<ServiceRecord, AppError> {
        request.validate()?;

        let at_mileage = request.at_mileage;
        let updated = self
            .records
            .update(
                id,
                ServiceRecordUpdate {
                    item: request.item,
                    at_mileage,
                    notes: request.notes,
                },
            )
            .await
            .ok_or_else(|| not_found_error("Service record", &id.to_string()))?;

        if let Some(km) = at_mileage {
            self.vehicles.record_mileage(&updated.vehicle_id, km).await;
        }

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.records.delete(id).await {
            Ok(())
        } else {
            Err(not_found_error("Service record", &id.to_string()))
        }
    }
}
