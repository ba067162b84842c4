//! Registro de vehículos y propietarios con alta enriquecida por un servicio
//! externo de información por matrícula.

pub mod clients;
pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
