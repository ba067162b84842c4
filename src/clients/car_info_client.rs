use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use super::CarInfoProvider;
use crate::models::CarInfo;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Cliente del servicio externo `GET {base}/info?regNum=...`
pub struct CarInfoClient {
    base_url: String,
    client: Client,
}

impl CarInfoClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl CarInfoProvider for CarInfoClient {
    #[instrument(skip(self), fields(op = "client.car_info.get_car_info"), err)]
    async fn get_car_info(&self, reg_num: &str) -> AppResult<CarInfo> {
        let url = format!("{}/info", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("regNum", reg_num)])
            .send()
            .await
            .map_err(|e| AppError::RequestFailed(format!("car info request: {}", e)))?;

        let status = response.status();
        debug!(status = status.as_u16(), "📡 car info response");

        if status == StatusCode::NOT_FOUND {
            return Err(not_found_error("car info", "regNum", reg_num));
        }
        if status != StatusCode::OK {
            return Err(AppError::RequestFailed(format!(
                "request failed with status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::RequestFailed(format!("reading car info body: {}", e)))?;

        serde_json::from_str::<CarInfo>(&body)
            .map_err(|e| AppError::RequestFailed(format!("malformed car info: {}", e)))
    }
}
