//! Middleware del sistema

pub mod cors;
pub mod timeout;

pub use cors::cors_middleware;
pub use timeout::timeout_envelope;
