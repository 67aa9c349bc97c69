//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo tal como lo guarda el
//! store en memoria: kilometraje actual, metadatos descriptivos y el
//! mapa de últimos servicios por ítem.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Último servicio conocido para un ítem concreto
///
/// Ambos campos son opcionales de forma independiente: un ítem puede
/// tener kilometraje sin fecha (o al revés) cuando el historial es
/// parcial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastService {
    pub last_km: Option<i64>,
    pub last_date: Option<DateTime<Utc>>,
}

/// Registro de vehículo en el store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub vehicle_id: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub mileage: i64,
    pub avg_monthly_km: Option<f64>,
    pub last_services: HashMap<String, LastService>,
}

impl VehicleRecord {
    /// Registro vacío para un vehículo recién visto
    pub fn new(vehicle_id: &str) -> Self {
        Self {
            vehicle_id: vehicle_id.to_string(),
            make: None,
            model: None,
            year: None,
            mileage: 0,
            avg_monthly_km: None,
            last_services: HashMap::new(),
        }
    }
}
