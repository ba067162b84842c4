//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::clients::CarInfoProvider;
use crate::repositories::{InMemoryStore, PgCarRepository, PgOnboardingRepository};
use crate::services::{CarService, ServiceConfig};

#[derive(Clone)]
pub struct AppState {
    pub car_service: Arc<CarService>,
}

impl AppState {
    pub fn new(car_service: CarService) -> Self {
        Self {
            car_service: Arc::new(car_service),
        }
    }

    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(
        pool: PgPool,
        car_info: Arc<dyn CarInfoProvider>,
        config: ServiceConfig,
    ) -> Self {
        Self::new(CarService::new(
            Arc::new(PgCarRepository::new(pool.clone())),
            Arc::new(PgOnboardingRepository::new(pool)),
            car_info,
            config,
        ))
    }

    /// Estado respaldado por el backend en memoria
    pub fn with_memory(
        store: Arc<InMemoryStore>,
        car_info: Arc<dyn CarInfoProvider>,
        config: ServiceConfig,
    ) -> Self {
        Self::new(CarService::new(store.clone(), store, car_info, config))
    }
}
