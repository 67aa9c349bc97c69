use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// Request para crear un registro de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRecordRequest {
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(length(min = 1))]
    pub item: String,

    #[validate(range(min = 0))]
    pub at_mileage: i64,

    pub notes: Option<String>,

    /// Permite importar historial real; por defecto el momento del request
    pub created_at: Option<DateTime<Utc>>,
}

// Request para actualizar un registro existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRecordRequest {
    pub item: Option<String>,

    #[validate(range(min = 0))]
    pub at_mileage: Option<i64>,

    pub notes: Option<String>,
}

// Filtro del listado de registros
#[derive(Debug, Deserialize)]
pub struct ServiceRecordListQuery {
    pub vehicle_id: Option<String>,
}
