//! Proveedor sin red para desarrollo local (`CAR_INFO_MOCK=true`).

use async_trait::async_trait;
use tracing::debug;

use super::CarInfoProvider;
use crate::models::car_info::{CarInfo, CarInfoOwner};
use crate::utils::errors::AppResult;

/// Devuelve datos sintéticos y deterministas para cualquier matrícula.
#[derive(Debug, Default, Clone)]
pub struct MockCarInfoClient;

impl MockCarInfoClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CarInfoProvider for MockCarInfoClient {
    async fn get_car_info(&self, reg_num: &str) -> AppResult<CarInfo> {
        let spread = reg_num.bytes().map(u32::from).sum::<u32>() % 30;

        let info = CarInfo {
            mark: format!("Test Mark {}", reg_num),
            model: "Super".to_string(),
            year: Some(2023 - spread as i32),
            owner: CarInfoOwner {
                name: format!("Test Owner {}", reg_num),
                surname: "Super".to_string(),
                patronymic: None,
            },
        };
        debug!(reg_num, "🧪 mock car info");

        Ok(info)
    }
}
