use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use vehicle_maintenance::config::environment::EnvironmentConfig;
use vehicle_maintenance::data;
use vehicle_maintenance::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use vehicle_maintenance::middleware::logging::timing_middleware;
use vehicle_maintenance::repositories::service_record_repository::{
    InMemoryServiceRecordRepository, ServiceRecordStore,
};
use vehicle_maintenance::repositories::vehicle_repository::{
    InMemoryVehicleRepository, VehicleStore,
};
use vehicle_maintenance::routes::create_router;
use vehicle_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Vehicle Maintenance API");
    info!("==========================");

    let config = EnvironmentConfig::default();

    // Stores en memoria (sin garantías de durabilidad)
    let vehicles: Arc<dyn VehicleStore> = Arc::new(InMemoryVehicleRepository::new());
    let records: Arc<dyn ServiceRecordStore> = Arc::new(InMemoryServiceRecordRepository::new());

    let app_state = AppState::new(config.clone(), vehicles, records);

    // Datos de demostración en desarrollo
    if config.is_development() {
        data::seed::seed(&app_state).await;
    }

    // CORS según entorno
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app = create_router()
        .layer(axum::middleware::from_fn(timing_middleware))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Health check");
    info!("   GET  /health - Health check");
    info!("🚗 Vehículos:");
    info!("   POST /vehicles/upsert - Crear/actualizar vehículo");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   DELETE /vehicles/:vehicle_id - Eliminar vehículo");
    info!("🔧 Mantenimiento:");
    info!("   GET  /maintenance/due - Ítems vencidos o de urgencia alta");
    info!("   GET  /maintenance/full - Reporte completo");
    info!("📋 Registros de servicio:");
    info!("   POST /service-records - Crear registro");
    info!("   GET  /service-records - Listar registros");
    info!("   PUT  /service-records/:id - Actualizar registro");
    info!("   DELETE /service-records/:id - Eliminar registro");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
