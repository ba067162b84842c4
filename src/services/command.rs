//! Comandos del servicio
//!
//! Intención del cliente tal como llega del transporte, sin valores por
//! defecto resueltos. El servicio los traduce a consultas de repositorio.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarIndex {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarStore {
    pub reg_nums: Vec<String>,
}

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
