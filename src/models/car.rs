//! Modelo de Car
//!
//! Vehículo registrado con su propietario adjunto.

use serde::{Deserialize, Serialize};

use super::people::People;

/// Car tal como lo devuelve la API: siempre con el propietario cargado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: Option<i32>,
    #[serde(rename = "ownerID")]
    pub owner_id: i64,
    pub owner: People,
}
