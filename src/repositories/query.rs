//! Consultas del repositorio
//!
//! Formas ya resueltas (con valores por defecto aplicados por el servicio)
//! que los repositorios ejecutan tal cual.

use crate::utils::errors::{AppError, AppResult};

/// Orden por clave primaria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Interpreta `asc` / `desc`; cualquier otro valor es `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filtros, orden y paginación para listar vehículos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarList {
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub owner_name: Option<String>,
    pub owner_surname: Option<String>,
    pub order: SortOrder,
    pub page: i64,
    pub count: i64,
}

impl CarList {
    /// `page` y `count` deben llegar ya resueltos por el servicio; un valor
    /// no positivo aquí es un error de contrato, no una entrada del usuario.
    /// Una página cuyo offset no cabe en `i64` sí viene del usuario: `BadRequest`.
    pub fn check_pagination(&self) -> AppResult<()> {
        if self.count <= 0 || self.page <= 0 {
            return Err(AppError::Internal(format!(
                "invalid pagination: page={} count={}",
                self.page, self.count
            )));
        }
        if (self.page - 1).checked_mul(self.count).is_none() {
            return Err(AppError::BadRequest(format!(
                "page {} out of range for count {}",
                self.page, self.count
            )));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        self.count
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.count)
    }
}

/// Datos de un vehículo nuevo, ya vinculado a su propietario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarCreate {
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: Option<i32>,
    pub owner_id: i64,
}

/// Datos de un vehículo cuyo propietario aún no existe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDraft {
    pub reg_num: String,
    pub mark: String,
    pub model: String,
    pub year: Option<i32>,
}

impl CarDraft {
    pub fn with_owner(&self, owner_id: i64) -> CarCreate {
        CarCreate {
            reg_num: self.reg_num.clone(),
            mark: self.mark.clone(),
            model: self.model.clone(),
            year: self.year,
            owner_id,
        }
    }
}

/// Actualización parcial: `None` deja el campo como está
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarUpdate {
    pub id: i64,
    pub reg_num: Option<String>,
    pub mark: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarDelete {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeopleCreate {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
}
