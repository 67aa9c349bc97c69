use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{LastService, VehicleRecord};

// Request para upsert de un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertVehicleRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(range(min = 0))]
    pub mileage: i64,

    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub avg_monthly_km: Option<f64>,
    pub last_services: Option<HashMap<String, LastServiceDto>>,
}

// Entrada de last_services tal como llega del cliente; la fecha viaja
// como string (RFC3339 o YYYY-MM-DD) y se parsea en el controller
#[derive(Debug, Deserialize)]
pub struct LastServiceDto {
    pub last_km: Option<i64>,
    pub last_date: Option<String>,
}

// Filtro del listado de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    pub vehicle_id: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vehicle_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub mileage: i64,
    pub avg_monthly_km: Option<f64>,
    pub last_services: HashMap<String, LastService>,
}

impl From<VehicleRecord> for VehicleResponse {
    fn from(record: VehicleRecord) -> Self {
        Self {
            vehicle_id: record.vehicle_id,
            make: record.make,
            model: record.model,
            year: record.year,
            mileage: record.mileage,
            avg_monthly_km: record.avg_monthly_km,
            last_services: record.last_services,
        }
    }
}
