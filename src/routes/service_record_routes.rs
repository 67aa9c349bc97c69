use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_record_controller::ServiceRecordController;
use crate::dto::service_record_dto::{
    CreateServiceRecordRequest, ServiceRecordListQuery, UpdateServiceRecordRequest,
};
use crate::models::service_record::ServiceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_record_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/:id", put(update_record).delete(delete_record))
}

async fn create_record(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRecordRequest>,
) -> Result<(StatusCode, Json<ServiceRecord>), AppError> {
    let controller = ServiceRecordController::new(state.records.clone(), state.vehicles.clone());
    let record = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<ServiceRecordListQuery>,
) -> Result<Json<Vec<ServiceRecord>>, AppError> {
    let controller = ServiceRecordController::new(state.records.clone(), state.vehicles.clone());
    let records = controller.list(query.vehicle_id.as_deref()).await;
    Ok(Json(records))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceRecordRequest>,
) -> Result<Json<ServiceRecord>, AppError> {
    let controller = ServiceRecordController::new(state.records.clone(), state.vehicles.clone());
    let record = controller.update(id, request).await?;
    Ok(Json(record))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = ServiceRecordController::new(state.records.clone(), state.vehicles.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
