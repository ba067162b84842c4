//! Utilidades de validación
//!
//! Reglas personalizadas para `validator` que no cubren los atributos
//! estándar (`length`, `range`).

use validator::ValidationError;

/// Año mínimo aceptado (primer automóvil patentado)
pub const MIN_YEAR: i32 = 1886;
/// Año máximo aceptado
pub const MAX_YEAR: i32 = 2023;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not empty"));
    }
    Ok(())
}

/// Validar la lista de matrículas: al menos una y ninguna vacía
pub fn validate_reg_nums(values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::new("non-empty list"));
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("list of non-empty strings"));
    }
    Ok(())
}
