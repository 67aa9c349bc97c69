use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use validator::Validate;

use crate::dto::vehicle_dto::{LastServiceDto, UpsertVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::models::vehicle::LastService;
use crate::repositories::vehicle_repository::{VehicleStore, VehicleUpsert};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::{validate_date, validate_datetime};

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn upsert(
        &self,
        request: UpsertVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos (vehicle_id no vacío, mileage >= 0)
        request.validate()?;

        let last_services = request
            .last_services
            .map(parse_last_services)
            .unwrap_or_default();

        let record = self
            .store
            .upsert(
                &request.vehicle_id,
                request.mileage,
                VehicleUpsert {
                    make: request.make,
                    model: request.model,
                    year: request.year,
                    avg_monthly_km: request.avg_monthly_km,
                    last_services,
                },
            )
            .await;

        Ok(ApiResponse::success_with_message(
            record.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, vehicle_id: Option<&str>) -> Result<Vec<VehicleResponse>, AppError> {
        let records = match vehicle_id {
            // Filtrado por id: lista de 0 o 1 elementos
            Some(id) => self.store.get(id).await.into_iter().collect(),
            None => self.store.list().await,
        };
        Ok(records.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn delete(&self, vehicle_id: &str) -> Result<(), AppError> {
        if self.store.delete(vehicle_id).await {
            Ok(())
        } else {
            Err(not_found_error("Vehicle", vehicle_id))
        }
    }
}

/// Normaliza el mapa de últimos servicios del cliente.
///
/// Las fechas se aceptan como RFC3339 o `YYYY-MM-DD`; una fecha que no
/// parsea se descarta a `None` en lugar de fallar el request.
fn parse_last_services(payload: HashMap<String, LastServiceDto>) -> HashMap<String, LastService> {
    payload
        .into_iter()
        .map(|(item, dto)| {
            let last_date = dto.last_date.as_deref().and_then(parse_service_date);
            (
                item,
                LastService {
                    last_km: dto.last_km,
                    last_date,
                },
            )
        })
        .collect()
}

fn parse_service_date(raw: &str) -> Option<DateTime<Utc>> {
    validate_datetime(raw).ok().or_else(|| {
        validate_date(raw)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_date_accepts_both_formats() {
        assert!(parse_service_date("2024-01-15T10:30:00Z").is_some());
        assert!(parse_service_date("2024-01-15").is_some());
    }

    #[test]
    fn test_parse_service_date_drops_garbage() {
        assert_eq!(parse_service_date("not-a-date"), None);
        assert_eq!(parse_service_date("15/01/2024"), None);
    }

    #[test]
    fn test_parse_last_services_keeps_km_when_date_is_bad() {
        let mut payload = HashMap::new();
        payload.insert(
            "engine_oil".to_string(),
            LastServiceDto {
                last_km: Some(30000),
                last_date: Some("garbage".to_string()),
            },
        );

        let parsed = parse_last_services(payload);
        let entry = parsed.get("engine_oil").unwrap();
        assert_eq!(entry.last_km, Some(30000));
        assert_eq!(entry.last_date, None);
    }
}
