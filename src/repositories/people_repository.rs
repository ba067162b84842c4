use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use super::query::PeopleCreate;
use super::PeopleRepository;
use crate::models::People;
use crate::utils::errors::AppResult;

pub(crate) async fn insert_people<'e, E>(executor: E, qry: &PeopleCreate) -> Result<People, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, People>(
        r#"
        INSERT INTO owners (name, surname, patronymic)
        VALUES ($1, $2, $3)
        RETURNING id, name, surname, patronymic
        "#,
    )
    .bind(&qry.name)
    .bind(&qry.surname)
    .bind(qry.patronymic.as_deref())
    .fetch_one(executor)
    .await
}

pub struct PgPeopleRepository {
    pool: PgPool,
}

impl PgPeopleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PeopleRepository for PgPeopleRepository {
    #[instrument(skip(self), fields(op = "repository.people.create"), err)]
    async fn create(&self, qry: &PeopleCreate) -> AppResult<People> {
        let people = insert_people(&self.pool, qry).await?;
        debug!(id = people.id, "created people");

        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::test_pool;

    #[tokio::test]
    async fn test_missing_patronymic_is_stored_as_null() {
        let Some(pool) = test_pool().await else { return };
        let repo = PgPeopleRepository::new(pool.clone());

        let people = repo
            .create(&PeopleCreate {
                name: "Jane".into(),
                surname: "Doe".into(),
                patronymic: None,
            })
            .await
            .unwrap();
        assert_eq!(people.patronymic, None);

        let (is_null,): (bool,) = sqlx::query_as("SELECT patronymic IS NULL FROM owners WHERE id = $1")
            .bind(people.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert!(is_null);
    }

    #[tokio::test]
    async fn test_same_person_twice_creates_two_rows() {
        let Some(pool) = test_pool().await else { return };
        let repo = PgPeopleRepository::new(pool);
        let qry = PeopleCreate {
            name: "Ivan".into(),
            surname: "Petrov".into(),
            patronymic: Some("Ivanovich".into()),
        };

        let first = repo.create(&qry).await.unwrap();
        let second = repo.create(&qry).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(second.patronymic.as_deref(), Some("Ivanovich"));
    }
}
