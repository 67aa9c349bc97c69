//! DTOs de la API
//!
//! Requests y responses de la capa HTTP. La validación estructural vive
//! aquí (derives de `validator`); el parseo de fechas laxas lo hacen los
//! controllers.

pub mod maintenance_dto;
pub mod service_record_dto;
pub mod vehicle_dto;

use serde::Serialize;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
