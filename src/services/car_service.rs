//! Servicio de vehículos
//!
//! `store` es un pipeline lineal por matrícula: consulta externa → owner →
//! car. Cada matrícula se guarda en su propia transacción, pero el lote NO es
//! atómico: si falla la matrícula k, las 1..k-1 ya guardadas se quedan y la
//! llamada completa devuelve el error.

use std::sync::Arc;

use futures::{stream, StreamExt};
use tracing::{debug, error, info, instrument};

use super::command::{CarDelete, CarIndex, CarStore, CarUpdate};
use crate::clients::CarInfoProvider;
use crate::models::Car;
use crate::repositories::query::{self, CarDraft, CarList, PeopleCreate, SortOrder};
use crate::repositories::{CarRepository, OnboardingRepository};
use crate::utils::errors::AppResult;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_COUNT: i64 = 10;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Consultas externas en vuelo a la vez dentro de un mismo `store`
    pub lookup_concurrency: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            lookup_concurrency: 4,
        }
    }
}

pub struct CarService {
    cars: Arc<dyn CarRepository>,
    onboarding: Arc<dyn OnboardingRepository>,
    car_info: Arc<dyn CarInfoProvider>,
    config: ServiceConfig,
}

impl CarService {
    pub fn new(
        cars: Arc<dyn CarRepository>,
        onboarding: Arc<dyn OnboardingRepository>,
        car_info: Arc<dyn CarInfoProvider>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            cars,
            onboarding,
            car_info,
            config,
        }
    }

    /// Traduce el comando a consulta aplicando página 1, 10 elementos y
    /// orden descendente cuando faltan o no son válidos.
    pub fn list_query(cmd: CarIndex) -> CarList {
        CarList {
            reg_num: cmd.reg_num,
            mark: cmd.mark,
            model: cmd.model,
            year: cmd.year,
            owner_name: cmd.owner_name,
            owner_surname: cmd.owner_surname,
            order: cmd
                .order
                .as_deref()
                .and_then(SortOrder::parse)
                .unwrap_or_default(),
            page: cmd.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            count: cmd.count.filter(|c| *c > 0).unwrap_or(DEFAULT_COUNT),
        }
    }

    #[instrument(skip(self), fields(op = "service.car.index"), err)]
    pub async fn index(&self, cmd: CarIndex) -> AppResult<Vec<Car>> {
        let qry = Self::list_query(cmd);
        let cars = self.cars.list(&qry).await?;

        debug!(found = cars.len(), "searched cars");
        Ok(cars)
    }

    #[instrument(skip(self, cmd), fields(op = "service.car.store", items = cmd.reg_nums.len()), err)]
    pub async fn store(&self, cmd: CarStore) -> AppResult<Vec<Car>> {
        info!("🚗 creating cars");

        let total = cmd.reg_nums.len();
        let car_info = &self.car_info;

        // Las consultas corren en paralelo pero se consumen en orden de
        // entrada: la matrícula k se guarda antes de mirar el resultado de k+1.
        let mut lookups = stream::iter(cmd.reg_nums)
            .map(|reg_num| async move {
                let info = car_info.get_car_info(&reg_num).await;
                (reg_num, info)
            })
            .buffered(self.config.lookup_concurrency.max(1));

        let mut cars = Vec::with_capacity(total);
        while let Some((reg_num, info)) = lookups.next().await {
            let info = info.map_err(|e| {
                error!(%reg_num, created = cars.len(), error = %e, "❌ car info lookup failed, aborting batch");
                e
            })?;

            let owner = PeopleCreate {
                name: info.owner.name,
                surname: info.owner.surname,
                patronymic: info.owner.patronymic,
            };
            let draft = CarDraft {
                reg_num,
                mark: info.mark,
                model: info.model,
                year: info.year,
            };

            let car = self.onboarding.onboard(&owner, &draft).await.map_err(|e| {
                error!(reg_num = %draft.reg_num, created = cars.len(), error = %e, "❌ car onboarding failed, aborting batch");
                e
            })?;
            cars.push(car);
        }

        info!(created = cars.len(), "✅ created cars");
        Ok(cars)
    }

    #[instrument(skip(self), fields(op = "service.car.update", id = cmd.id), err)]
    pub async fn update(&self, cmd: CarUpdate) -> AppResult<Car> {
        let qry = query::CarUpdate {
            id: cmd.id,
            reg_num: cmd.reg_num,
            mark: cmd.mark,
            model: cmd.model,
            year: cmd.year,
        };

        self.cars.update(&qry).await
    }

    #[instrument(skip(self), fields(op = "service.car.delete", id = cmd.id), err)]
    pub async fn delete(&self, cmd: CarDelete) -> AppResult<()> {
        self.cars.delete(&query::CarDelete { id: cmd.id }).await
    }
}
