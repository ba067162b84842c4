//! Repositorios
//!
//! Interfaces de persistencia por capacidad y sus implementaciones:
//! PostgreSQL (sqlx) y una en memoria para pruebas y desarrollo local.

use async_trait::async_trait;

use crate::models::{Car, People};
use crate::utils::errors::AppResult;

pub mod car_repository;
pub mod memory_repository;
pub mod onboarding_repository;
pub mod people_repository;
pub mod query;

pub use car_repository::PgCarRepository;
pub use memory_repository::InMemoryStore;
pub use onboarding_repository::PgOnboardingRepository;
pub use people_repository::PgPeopleRepository;

use query::{CarCreate, CarDelete, CarDraft, CarList, CarUpdate, PeopleCreate};

#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Lista filtrada, ordenada y paginada; cada car lleva su owner.
    async fn list(&self, qry: &CarList) -> AppResult<Vec<Car>>;

    /// Inserta y relee el car con su owner. Matrícula duplicada = `Conflict`.
    async fn create(&self, qry: &CarCreate) -> AppResult<Car>;

    async fn update(&self, qry: &CarUpdate) -> AppResult<Car>;

    async fn delete(&self, qry: &CarDelete) -> AppResult<()>;
}

#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// Inserción incondicional, sin buscar duplicados.
    async fn create(&self, qry: &PeopleCreate) -> AppResult<People>;
}

#[async_trait]
pub trait OnboardingRepository: Send + Sync {
    /// Crea el owner y el car como una sola unidad: si el car falla, el owner
    /// tampoco queda guardado.
    async fn onboard(&self, owner: &PeopleCreate, car: &CarDraft) -> AppResult<Car>;
}
