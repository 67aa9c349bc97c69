use std::sync::Arc;

use chrono::Utc;

use crate::dto::maintenance_dto::{DueReportResponse, MaintenanceQuery};
use crate::models::rule::DEFAULT_RULES;
use crate::models::vehicle::VehicleRecord;
use crate::models::verdict::VehicleVerdict;
use crate::repositories::service_record_repository::ServiceRecordStore;
use crate::repositories::vehicle_repository::VehicleStore;
use crate::services::maintenance_service::{compute_due, resolve_last_services, DueQuery};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{validate_non_negative, validate_not_empty};

/// Umbral de urgencia a partir del cual un ítem no vencido entra igual
/// en el reporte "due"
const DUE_URGENCY_THRESHOLD: f64 = 0.75;

pub struct MaintenanceController {
    vehicles: Arc<dyn VehicleStore>,
    records: Arc<dyn ServiceRecordStore>,
}

impl MaintenanceController {
    pub fn new(vehicles: Arc<dyn VehicleStore>, records: Arc<dyn ServiceRecordStore>) -> Self {
        Self { vehicles, records }
    }

    /// Reporte filtrado: sólo ítems vencidos o de urgencia alta. Los
    /// agregados (`any_due`, `overall_urgency`) se calculan sobre el
    /// conjunto completo antes de filtrar.
    pub async fn due(&self, query: MaintenanceQuery) -> Result<DueReportResponse, AppError> {
        validate_not_empty(&query.vehicle_id)
            .map_err(|_| bad_request_error("vehicle_id must not be empty"))?;

        let record = self.vehicles.get(&query.vehicle_id).await;

        // Vehículo desconocido y sin override de km: reporte vacío
        if record.is_none() && query.mileage.is_none() {
            return Ok(DueReportResponse {
                vehicle_id: query.vehicle_id,
                any_due: false,
                overall_urgency: 0.0,
                items: Vec::new(),
            });
        }

        let verdict = self.compute(&query.vehicle_id, record, query.mileage).await?;
        let items = verdict
            .items
            .into_iter()
            .filter(|i| i.due || i.urgency_score >= DUE_URGENCY_THRESHOLD)
            .collect();

        Ok(DueReportResponse {
            vehicle_id: verdict.vehicle_id,
            any_due: verdict.any_due,
            overall_urgency: verdict.overall_urgency,
            items,
        })
    }

    /// Reporte completo, un veredicto por cada ítem de la tabla
    pub async fn full(&self, query: MaintenanceQuery) -> Result<VehicleVerdict, AppError> {
        validate_not_empty(&query.vehicle_id)
            .map_err(|_| bad_request_error("vehicle_id must not be empty"))?;

        let record = self.vehicles.get(&query.vehicle_id).await;
        self.compute(&query.vehicle_id, record, query.mileage).await
    }

    async fn compute(
        &self,
        vehicle_id: &str,
        record: Option<VehicleRecord>,
        mileage_override: Option<i64>,
    ) -> Result<VehicleVerdict, AppError> {
        let current_km = mileage_override
            .or_else(|| record.as_ref().map(|r| r.mileage))
            .unwrap_or(0);
        validate_non_negative(current_km)
            .map_err(|_| bad_request_error("mileage must be >= 0"))?;

        let seeded = record
            .as_ref()
            .map(|r| r.last_services.clone())
            .unwrap_or_default();
        let history = self.records.list(Some(vehicle_id)).await;
        let last_services = resolve_last_services(&seeded, &history);

        let query = DueQuery {
            vehicle_id: vehicle_id.to_string(),
            current_km,
            avg_monthly_km: record.as_ref().and_then(|r| r.avg_monthly_km),
            // el reloj se captura una sola vez por request
            as_of: Utc::now(),
        };

        Ok(compute_due(&query, &last_services, &DEFAULT_RULES))
    }
}
