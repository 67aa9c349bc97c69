//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación. El motor
//! de mantenimiento es puro: los handlers le pasan los datos resueltos
//! del store y él devuelve veredictos sin tocar estado.

pub mod maintenance_service;

pub use maintenance_service::*;
