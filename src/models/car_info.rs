//! Respuesta del servicio externo de información de vehículos.
//!
//! Solo vive durante el alta de una matrícula; no se persiste.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarInfo {
    pub mark: String,
    pub model: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub owner: CarInfoOwner,
}

/// Propietario embebido en `CarInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarInfoOwner {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_may_be_missing() {
        let info: CarInfo = serde_json::from_str(
            r#"{"mark":"Lada","model":"Vesta","owner":{"name":"Ivan","surname":"Petrov"}}"#,
        )
        .unwrap();

        assert_eq!(info.year, None);
        assert_eq!(info.owner.patronymic, None);
    }

    #[test]
    fn test_owner_is_required() {
        let result = serde_json::from_str::<CarInfo>(r#"{"mark":"Lada","model":"Vesta"}"#);
        assert!(result.is_err());
    }
}
