//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: la configuración y los stores en memoria.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::service_record_repository::ServiceRecordStore;
use crate::repositories::vehicle_repository::VehicleStore;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: Arc<dyn VehicleStore>,
    pub records: Arc<dyn ServiceRecordStore>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        vehicles: Arc<dyn VehicleStore>,
        records: Arc<dyn ServiceRecordStore>,
    ) -> Self {
        Self {
            config,
            vehicles,
            records,
        }
    }
}
