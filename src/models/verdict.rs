//! Veredictos del motor de cómputo
//!
//! Salida del motor: un veredicto por ítem y el agregado por vehículo.
//! Son valores puros, recalculados en cada consulta y nunca cacheados.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Veredicto de un ítem de mantenimiento
#[derive(Debug, Clone, Serialize)]
pub struct ItemVerdict {
    pub item: String,
    pub due: bool,
    pub due_by_km: bool,
    pub due_by_time: bool,
    /// Km hasta el próximo servicio; cero o negativo significa vencido
    pub km_remaining: Option<i64>,
    pub days_remaining: Option<i64>,
    pub next_due_km: i64,
    pub next_due_date: DateTime<Utc>,
    pub km_ratio: f64,
    pub time_ratio: f64,
    pub urgency_score: f64,
    /// Fecha estimada en la que se alcanzará el umbral de km, según el
    /// promedio mensual del vehículo (si se conoce)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_km_due_date: Option<DateTime<Utc>>,
}

/// Veredicto agregado de un vehículo
#[derive(Debug, Clone, Serialize)]
pub struct VehicleVerdict {
    pub vehicle_id: String,
    pub current_km: i64,
    pub generated_at: DateTime<Utc>,
    pub any_due: bool,
    pub overall_urgency: f64,
    pub items: Vec<ItemVerdict>,
}
