use async_trait::async_trait;
use sqlx::{FromRow, PgExecutor, PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};

use super::query::{CarCreate, CarDelete, CarList, CarUpdate};
use super::CarRepository;
use crate::models::{Car, People};
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Todas las lecturas de cars van unidas a su owner
const CAR_SELECT: &str = r#"
    SELECT c.id, c.reg_num, c.mark, c.model, c.year, c.owner_id,
           o.name AS owner_name, o.surname AS owner_surname, o.patronymic AS owner_patronymic
    FROM cars c
    INNER JOIN owners o ON o.id = c.owner_id"#;

#[derive(Debug, FromRow)]
struct CarRow {
    id: i64,
    reg_num: String,
    mark: String,
    model: String,
    year: Option<i32>,
    owner_id: i64,
    owner_name: String,
    owner_surname: String,
    owner_patronymic: Option<String>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            reg_num: row.reg_num,
            mark: row.mark,
            model: row.model,
            year: row.year,
            owner_id: row.owner_id,
            owner: People {
                id: row.owner_id,
                name: row.owner_name,
                surname: row.owner_surname,
                patronymic: row.owner_patronymic,
            },
        }
    }
}

/// Patrón `LIKE` de subcadena; escapa los comodines del valor.
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Construye el SELECT de `list`: un predicado por filtro presente,
/// combinados con AND; los ausentes no aparecen.
pub fn build_list_query(qry: &CarList) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(CAR_SELECT);
    builder.push(" WHERE TRUE");

    if let Some(reg_num) = &qry.reg_num {
        builder.push(" AND c.reg_num = ").push_bind(reg_num.clone());
    }
    if let Some(mark) = &qry.mark {
        builder.push(" AND c.mark LIKE ").push_bind(like_pattern(mark));
    }
    if let Some(model) = &qry.model {
        builder.push(" AND c.model LIKE ").push_bind(like_pattern(model));
    }
    if let Some(year) = qry.year {
        builder.push(" AND c.year = ").push_bind(year);
    }
    if let Some(owner_name) = &qry.owner_name {
        builder.push(" AND o.name LIKE ").push_bind(like_pattern(owner_name));
    }
    if let Some(owner_surname) = &qry.owner_surname {
        builder.push(" AND o.surname = ").push_bind(owner_surname.clone());
    }

    builder.push(" ORDER BY c.id ").push(qry.order.as_sql());
    builder
        .push(" LIMIT ")
        .push_bind(qry.limit())
        .push(" OFFSET ")
        .push_bind(qry.offset());

    builder
}

pub(crate) async fn fetch_car<'e, E>(executor: E, id: i64) -> Result<Option<Car>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let sql = format!("{} WHERE c.id = $1", CAR_SELECT);
    let row = sqlx::query_as::<_, CarRow>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Car::from))
}

pub(crate) async fn insert_car<'e, E>(executor: E, qry: &CarCreate) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO cars (reg_num, mark, model, year, owner_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&qry.reg_num)
    .bind(&qry.mark)
    .bind(&qry.model)
    .bind(qry.year)
    .bind(qry.owner_id)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

pub(crate) fn reg_num_conflict(err: sqlx::Error, reg_num: &str) -> AppError {
    AppError::from_write(err, &format!("car with regNum '{}'", reg_num))
}

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn reload(&self, id: i64) -> AppResult<Car> {
        fetch_car(&self.pool, id)
            .await?
            .ok_or_else(|| not_found_error("car", "id", id))
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    #[instrument(skip(self), fields(op = "repository.car.list"), err)]
    async fn list(&self, qry: &CarList) -> AppResult<Vec<Car>> {
        qry.check_pagination()?;

        let mut builder = build_list_query(qry);
        let rows = builder
            .build_query_as::<CarRow>()
            .fetch_all(&self.pool)
            .await?;

        let cars: Vec<Car> = rows.into_iter().map(Car::from).collect();
        debug!(found = cars.len(), "searched cars");

        Ok(cars)
    }

    #[instrument(skip(self), fields(op = "repository.car.create", reg_num = %qry.reg_num), err)]
    async fn create(&self, qry: &CarCreate) -> AppResult<Car> {
        let id = insert_car(&self.pool, qry)
            .await
            .map_err(|e| reg_num_conflict(e, &qry.reg_num))?;

        let car = self.reload(id).await?;
        debug!(id = car.id, "created car");

        Ok(car)
    }

    #[instrument(skip(self), fields(op = "repository.car.update", id = qry.id), err)]
    async fn update(&self, qry: &CarUpdate) -> AppResult<Car> {
        let current = fetch_car(&self.pool, qry.id)
            .await?
            .ok_or_else(|| not_found_error("car", "id", qry.id))?;

        let reg_num = qry.reg_num.clone().unwrap_or(current.reg_num);

        sqlx::query(
            r#"
            UPDATE cars
            SET reg_num = $2, mark = $3, model = $4, year = $5
            WHERE id = $1
            "#,
        )
        .bind(qry.id)
        .bind(&reg_num)
        .bind(qry.mark.clone().unwrap_or(current.mark))
        .bind(qry.model.clone().unwrap_or(current.model))
        .bind(qry.year.or(current.year))
        .execute(&self.pool)
        .await
        .map_err(|e| reg_num_conflict(e, &reg_num))?;

        let car = self.reload(qry.id).await?;
        debug!(id = car.id, "updated car");

        Ok(car)
    }

    #[instrument(skip(self), fields(op = "repository.car.delete", id = qry.id), err)]
    async fn delete(&self, qry: &CarDelete) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(qry.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("car", "id", qry.id));
        }

        debug!("deleted car");
        Ok(())
    }
}
