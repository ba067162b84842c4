//! Utilidades del sistema
//!
//! Manejo de errores y reglas de validación compartidas por los DTOs.

pub mod errors;
pub mod validation;
