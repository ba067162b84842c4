//! Modelo de People (propietario)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Propietario de uno o más vehículos.
///
/// `patronymic` es `None` cuando no existe; se serializa como `null`, nunca
/// como cadena vacía.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct People {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
}
