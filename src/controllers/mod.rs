//! Controllers
//!
//! Orquestación de requests: validan la entrada, resuelven datos en los
//! stores y llaman al motor de mantenimiento. La lógica de negocio vive
//! en `services`, no aquí.

pub mod maintenance_controller;
pub mod service_record_controller;
pub mod vehicle_controller;
