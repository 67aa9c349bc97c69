//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y de logging de requests.

pub mod cors;
pub mod logging;

pub use cors::*;
pub use logging::*;
