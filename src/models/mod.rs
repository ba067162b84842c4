//! Modelos del sistema
//!
//! Modelos de dominio que viajan entre repositorios, servicio y API.
//! Se copian por valor en las respuestas; nunca se cachean.

pub mod car;
pub mod car_info;
pub mod people;

pub use car::Car;
pub use car_info::CarInfo;
pub use people::People;
