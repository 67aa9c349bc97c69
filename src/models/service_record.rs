//! Modelo de ServiceRecord
//!
//! Historial append-only de servicios realizados. Cada registro alimenta
//! el kilometraje del vehículo y la resolución del último servicio por
//! ítem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registro de servicio realizado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub vehicle_id: String,
    pub item: String,
    pub at_mileage: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
