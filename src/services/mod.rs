//! Services module
//!
//! Lógica de negocio: alta de vehículos enriquecidos con el servicio externo
//! y consultas filtradas.

pub mod car_service;
pub mod command;

pub use car_service::{CarService, ServiceConfig};
