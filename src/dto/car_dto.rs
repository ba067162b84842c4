//! DTOs de transporte para `/api/cars`
//!
//! Validación de forma y rango en la frontera; el servicio no revalida.

use serde::Deserialize;
use validator::Validate;

use crate::services::command::{CarIndex, CarStore, CarUpdate};
use crate::utils::validation::{validate_not_empty, validate_reg_nums};

/// Parámetros de `GET /api/cars`, todos opcionales
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarIndexRequest {
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub owner_name: Option<String>,
    pub owner_surname: Option<String>,
    pub order: Option<String>,
    pub page: Option<i64>,
    pub count: Option<i64>,
}

impl From<CarIndexRequest> for CarIndex {
    fn from(req: CarIndexRequest) -> Self {
        Self {
            reg_num: req.reg_num,
            mark: req.mark,
            model: req.model,
            year: req.year,
            owner_name: req.owner_name,
            owner_surname: req.owner_surname,
            order: req.order,
            page: req.page,
            count: req.count,
        }
    }
}

/// Cuerpo de `POST /api/cars`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarStoreRequest {
    #[validate(custom = "validate_reg_nums")]
    pub reg_nums: Vec<String>,
}

impl From<CarStoreRequest> for CarStore {
    fn from(req: CarStoreRequest) -> Self {
        Self {
            reg_nums: req.reg_nums,
        }
    }
}

/// Cuerpo de `PATCH /api/cars/{id}`; los campos ausentes no se tocan
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CarUpdateRequest {
    #[validate(custom = "validate_not_empty")]
    pub reg_num: Option<String>,

    #[validate(custom = "validate_not_empty")]
    pub mark: Option<String>,

    #[validate(custom = "validate_not_empty")]
    pub model: Option<String>,

    #[validate(range(min = 1886, max = 2023))]
    pub year: Option<i32>,
}

impl CarUpdateRequest {
    pub fn into_command(self, id: i64) -> CarUpdate {
        CarUpdate {
            id,
            reg_num: self.reg_num,
            mark: self.mark,
            model: self.model,
            year: self.year,
        }
    }
}
