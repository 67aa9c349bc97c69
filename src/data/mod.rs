//! Datos de desarrollo

pub mod seed;
