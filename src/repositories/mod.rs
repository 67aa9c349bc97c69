//! Repositorios
//!
//! Stores en memoria detrás de traits inyectables. El estado vive en
//! `AppState` y se pasa a los handlers por referencia; el core nunca
//! lo toca directamente.

pub mod service_record_repository;
pub mod vehicle_repository;

pub use service_record_repository::*;
pub use vehicle_repository::*;
