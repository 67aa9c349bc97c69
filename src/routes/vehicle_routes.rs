use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{UpsertVehicleRequest, VehicleListQuery, VehicleResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/upsert", post(upsert_vehicle))
        .route("/", get(list_vehicles))
        .route("/:vehicle_id", delete(delete_vehicle))
}

async fn upsert_vehicle(
    State(state): State<AppState>,
    Json(request): Json<UpsertVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.upsert(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    let response = controller.list(query.vehicle_id.as_deref()).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.vehicles.clone());
    controller.delete(&vehicle_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
