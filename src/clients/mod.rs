//! Clients - HTTP Clients for External APIs
//!
//! Proveedores de información de vehículos a partir de la matrícula.

use async_trait::async_trait;

use crate::models::CarInfo;
use crate::utils::errors::AppResult;

pub mod car_info_client;
pub mod mock_car_info_client;

pub use car_info_client::CarInfoClient;
pub use mock_car_info_client::MockCarInfoClient;

/// Resuelve marca, modelo, año y propietario de una matrícula.
///
/// Cada llamada es independiente: sin reintentos ni lotes; el servicio decide
/// cómo agruparlas.
#[async_trait]
pub trait CarInfoProvider: Send + Sync {
    async fn get_car_info(&self, reg_num: &str) -> AppResult<CarInfo>;
}
