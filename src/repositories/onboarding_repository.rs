//! Alta de owner + car en una transacción por matrícula.
//!
//! Si la transacción no llega al commit (error o future cancelado) sqlx hace
//! rollback al soltarla, así que nunca queda un owner huérfano.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::car_repository::{fetch_car, insert_car, reg_num_conflict};
use super::people_repository::insert_people;
use super::query::{CarDraft, PeopleCreate};
use super::OnboardingRepository;
use crate::models::Car;
use crate::utils::errors::{AppError, AppResult};

pub struct PgOnboardingRepository {
    pool: PgPool,
}

impl PgOnboardingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OnboardingRepository for PgOnboardingRepository {
    #[instrument(skip(self, owner), fields(op = "repository.onboarding.onboard", reg_num = %car.reg_num), err)]
    async fn onboard(&self, owner: &PeopleCreate, car: &CarDraft) -> AppResult<Car> {
        let mut tx = self.pool.begin().await?;

        let people = insert_people(&mut *tx, owner).await?;
        let id = insert_car(&mut *tx, &car.with_owner(people.id))
            .await
            .map_err(|e| reg_num_conflict(e, &car.reg_num))?;
        let created = fetch_car(&mut *tx, id).await?.ok_or_else(|| {
            AppError::Internal(format!("car {} vanished inside its own transaction", id))
        })?;

        tx.commit().await?;
        debug!(id = created.id, owner_id = created.owner_id, "onboarded car");

        Ok(created)
    }
}
