use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Map, Value};
use tower::ServiceExt;

use vehicle_maintenance::config::environment::EnvironmentConfig;
use vehicle_maintenance::repositories::service_record_repository::{
    InMemoryServiceRecordRepository, ServiceRecordStore,
};
use vehicle_maintenance::repositories::vehicle_repository::{
    InMemoryVehicleRepository, VehicleStore,
};
use vehicle_maintenance::routes::create_router;
use vehicle_maintenance::state::AppState;

// Función helper para crear la app de test con stores vacíos
fn create_test_app() -> Router {
    let vehicles: Arc<dyn VehicleStore> = Arc::new(InMemoryVehicleRepository::new());
    let records: Arc<dyn ServiceRecordStore> = Arc::new(InMemoryServiceRecordRepository::new());
    let state = AppState::new(EnvironmentConfig::default(), vehicles, records);
    create_router().with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

fn find_item<'a>(report: &'a Value, item: &str) -> Option<&'a Value> {
    report["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["item"] == item)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_upsert_and_due_flow() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({
            "vehicle_id": "V1",
            "mileage": 16000,
            "last_services": {
                "engine_oil": { "last_km": 0, "last_date": "2024-01-01" }
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["vehicle_id"], "V1");
    assert_eq!(body["data"]["mileage"], 16000);

    // 16000 km contra un intervalo de 15000: vencido por distancia
    let (status, report) = get(&app, "/maintenance/due?vehicle_id=V1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["any_due"], true);

    let oil = find_item(&report, "engine_oil").expect("engine_oil should be listed");
    assert_eq!(oil["due"], true);
    assert_eq!(oil["due_by_km"], true);
    assert!(oil["km_remaining"].as_i64().unwrap() <= 0);
}

#[tokio::test]
async fn test_upsert_rejects_negative_mileage() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({ "vehicle_id": "V1", "mileage": -10 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upsert_rejects_empty_vehicle_id() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({ "vehicle_id": "", "mileage": 1000 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_due_rejects_negative_mileage_override() {
    let app = create_test_app();

    let (status, _) = get(&app, "/maintenance/due?vehicle_id=V1&mileage=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_due_for_unknown_vehicle_is_empty() {
    let app = create_test_app();

    let (status, report) = get(&app, "/maintenance/due?vehicle_id=ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["vehicle_id"], "ghost");
    assert_eq!(report["any_due"], false);
    assert_eq!(report["overall_urgency"], 0.0);
    assert!(report["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_full_report_covers_every_item() {
    let app = create_test_app();

    // Sin historial: el reporte completo evalúa toda la tabla igual
    let (status, report) = get(&app, "/maintenance/full?vehicle_id=new-car&mileage=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["vehicle_id"], "new-car");
    assert_eq!(report["current_km"], 500);

    let items = report["items"].as_array().unwrap();
    assert_eq!(items.len(), 7);
    // orden de la tabla
    assert_eq!(items[0]["item"], "engine_oil");

    // Nunca servido: vencido con ratios neutros
    for item in items {
        assert_eq!(item["due"], true);
        assert_eq!(item["km_ratio"], 0.5);
        assert_eq!(item["time_ratio"], 0.5);
    }
    assert_eq!(report["any_due"], true);
}

#[tokio::test]
async fn test_due_filtering_keeps_aggregates_over_full_set() {
    let app = create_test_app();

    // Todos los ítems recién servidos: nada vencido ni urgente
    let items = [
        "engine_oil",
        "oil_filter",
        "air_filter",
        "cabin_filter",
        "brake_fluid",
        "coolant",
        "spark_plugs",
    ];
    let mileage = 50000;
    let recent = (Utc::now() - Duration::days(3)).to_rfc3339();
    let mut last_services = Map::new();
    for item in items {
        last_services.insert(
            item.to_string(),
            json!({ "last_km": mileage, "last_date": recent }),
        );
    }

    let (status, _) = send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({
            "vehicle_id": "V2",
            "mileage": mileage,
            "last_services": Value::Object(last_services)
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, report) = get(&app, "/maintenance/due?vehicle_id=V2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["any_due"], false);
    // la proyección filtra los ítems, pero el agregado sigue calculado
    // sobre el conjunto completo
    assert!(report["items"].as_array().unwrap().is_empty());
    assert!(report["overall_urgency"].as_f64().unwrap() > 0.0);

    let (_, full) = get(&app, "/maintenance/full?vehicle_id=V2").await;
    assert_eq!(full["items"].as_array().unwrap().len(), 7);
    assert_eq!(full["overall_urgency"], report["overall_urgency"]);
}

#[tokio::test]
async fn test_service_record_crud_flow() {
    let app = create_test_app();

    let (status, record) = send(
        &app,
        "POST",
        "/service-records",
        Some(json!({
            "vehicle_id": "v1",
            "item": "engine_oil",
            "at_mileage": 70000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = record["id"].as_str().unwrap().to_string();

    let (status, list) = get(&app, "/service-records?vehicle_id=v1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().iter().any(|r| r["id"] == id.as_str()));

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/service-records/{}", id),
        Some(json!({ "at_mileage": 72000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["at_mileage"], 72000);

    let (status, _) = send(&app, "DELETE", &format!("/service-records/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", &format!("/service-records/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_record_missing_fields_is_unprocessable() {
    let app = create_test_app();

    let (status, _) = send(&app, "POST", "/service-records", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_service_record_rejects_negative_mileage() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/service-records",
        Some(json!({
            "vehicle_id": "v1",
            "item": "engine_oil",
            "at_mileage": -1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_service_record_feeds_vehicle_mileage() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/service-records",
        Some(json!({ "vehicle_id": "v9", "item": "engine_oil", "at_mileage": 50000 })),
    )
    .await;

    let (_, vehicles) = get(&app, "/vehicles?vehicle_id=v9").await;
    assert_eq!(vehicles[0]["mileage"], 50000);

    // Un registro con km menor no rebaja el kilometraje del vehículo
    send(
        &app,
        "POST",
        "/service-records",
        Some(json!({ "vehicle_id": "v9", "item": "oil_filter", "at_mileage": 42000 })),
    )
    .await;

    let (_, vehicles) = get(&app, "/vehicles?vehicle_id=v9").await;
    assert_eq!(vehicles[0]["mileage"], 50000);
}

#[tokio::test]
async fn test_record_history_overrides_stale_seeded_entry() {
    let app = create_test_app();

    // Entrada sembrada vieja: vencidísimo
    send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({
            "vehicle_id": "V5",
            "mileage": 80000,
            "last_services": {
                "engine_oil": { "last_km": 10000, "last_date": "2020-01-01" }
            }
        })),
    )
    .await;

    let (_, before) = get(&app, "/maintenance/full?vehicle_id=V5").await;
    assert_eq!(find_item(&before, "engine_oil").unwrap()["due"], true);

    // Un registro reciente gana sobre la entrada sembrada
    let recent = (Utc::now() - Duration::days(5)).to_rfc3339();
    send(
        &app,
        "POST",
        "/service-records",
        Some(json!({
            "vehicle_id": "V5",
            "item": "engine_oil",
            "at_mileage": 79000,
            "created_at": recent
        })),
    )
    .await;

    let (_, after) = get(&app, "/maintenance/full?vehicle_id=V5").await;
    let oil = find_item(&after, "engine_oil").unwrap();
    assert_eq!(oil["due"], false);
    assert_eq!(oil["next_due_km"], 94000);
}

#[tokio::test]
async fn test_vehicle_list_and_delete() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({ "vehicle_id": "A1", "mileage": 10000 })),
    )
    .await;
    send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({ "vehicle_id": "B2", "mileage": 20000 })),
    )
    .await;

    let (status, all) = get(&app, "/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, only_b2) = get(&app, "/vehicles?vehicle_id=B2").await;
    assert_eq!(only_b2.as_array().unwrap().len(), 1);
    assert_eq!(only_b2[0]["vehicle_id"], "B2");

    let (status, _) = send(&app, "DELETE", "/vehicles/B2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", "/vehicles/B2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, gone) = get(&app, "/vehicles?vehicle_id=B2").await;
    assert!(gone.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_projection_appears_with_average_pace() {
    let app = create_test_app();

    let recent = (Utc::now() - Duration::days(10)).to_rfc3339();
    send(
        &app,
        "POST",
        "/vehicles/upsert",
        Some(json!({
            "vehicle_id": "V7",
            "mileage": 42000,
            "avg_monthly_km": 1000.0,
            "last_services": {
                "engine_oil": { "last_km": 40000, "last_date": recent }
            }
        })),
    )
    .await;

    let (_, report) = get(&app, "/maintenance/full?vehicle_id=V7").await;
    let oil = find_item(&report, "engine_oil").unwrap();
    assert_eq!(oil["km_remaining"], 13000);
    assert!(oil["projected_km_due_date"].is_string());
}
