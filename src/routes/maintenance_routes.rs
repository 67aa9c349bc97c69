use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{DueReportResponse, MaintenanceQuery};
use crate::models::verdict::VehicleVerdict;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/due", get(maintenance_due))
        .route("/full", get(maintenance_full))
}

async fn maintenance_due(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> Result<Json<DueReportResponse>, AppError> {
    let controller = MaintenanceController::new(state.vehicles.clone(), state.records.clone());
    let response = controller.due(query).await?;
    Ok(Json(response))
}

async fn maintenance_full(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> Result<Json<VehicleVerdict>, AppError> {
    let controller = MaintenanceController::new(state.vehicles.clone(), state.records.clone());
    let response = controller.full(query).await?;
    Ok(Json(response))
}
