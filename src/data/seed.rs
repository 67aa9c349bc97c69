//! Datos de demostración
//!
//! Siembra unos vehículos de ejemplo en el store en memoria para poder
//! probar la API sin cargar datos a mano. Sólo se usa en desarrollo.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use tracing::info;

use crate::models::vehicle::LastService;
use crate::repositories::vehicle_repository::VehicleUpsert;
use crate::state::AppState;

fn service(last_km: i64, days_ago: i64) -> LastService {
    LastService {
        last_km: Some(last_km),
        last_date: Some(Utc::now() - Duration::days(days_ago)),
    }
}

/// Siembra los vehículos de demostración
pub async fn seed(state: &AppState) {
    // Si ya existe algún vehículo no se siembra de nuevo
    if !state.vehicles.list().await.is_empty() {
        info!("⚠️ Ya hay datos en el store, se omite el seed");
        return;
    }

    let mut corolla = HashMap::new();
    corolla.insert("engine_oil".to_string(), service(30000, 200));
    corolla.insert("oil_filter".to_string(), service(30000, 200));
    corolla.insert("air_filter".to_string(), service(20000, 500));
    state
        .vehicles
        .upsert(
            "ABC123",
            42000,
            VehicleUpsert {
                make: Some("Toyota".to_string()),
                model: Some("Corolla".to_string()),
                year: Some(2018),
                avg_monthly_km: Some(1100.0),
                last_services: corolla,
            },
        )
        .await;

    let mut mazda = HashMap::new();
    mazda.insert("engine_oil".to_string(), service(55000, 420));
    mazda.insert("cabin_filter".to_string(), service(48000, 700));
    state
        .vehicles
        .upsert(
            "XYZ987",
            71000,
            VehicleUpsert {
                make: Some("Mazda".to_string()),
                model: Some("3".to_string()),
                year: Some(2017),
                avg_monthly_km: Some(1400.0),
                last_services: mazda,
            },
        )
        .await;

    // Sin historial: todos los ítems salen como vencidos
    state
        .vehicles
        .upsert(
            "LMN456",
            18000,
            VehicleUpsert {
                make: Some("Honda".to_string()),
                model: Some("Civic".to_string()),
                year: Some(2019),
                ..Default::default()
            },
        )
        .await;

    info!("✅ Seed completado: 3 vehículos de demostración");
}
