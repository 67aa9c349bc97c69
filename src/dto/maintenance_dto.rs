use serde::{Deserialize, Serialize};

use crate::models::verdict::ItemVerdict;

// Query params de los endpoints de mantenimiento
#[derive(Debug, Deserialize)]
pub struct MaintenanceQuery {
    pub vehicle_id: String,
    /// Override opcional del kilometraje guardado
    pub mileage: Option<i64>,
}

// Proyección "sólo lo urgente": ítems vencidos o con urgencia alta.
// Los agregados se calculan siempre sobre el conjunto completo.
#[derive(Debug, Serialize)]
pub struct DueReportResponse {
    pub vehicle_id: String,
    pub any_due: bool,
    pub overall_urgency: f64,
    pub items: Vec<ItemVerdict>,
}
