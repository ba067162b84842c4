//! Backend en memoria
//!
//! Implementa las tres interfaces de repositorio sobre un único estado
//! protegido por mutex. Reproduce la semántica del backend PostgreSQL:
//! unicidad de matrícula, subcadenas sensibles a mayúsculas, orden por id y
//! owner adjunto en cada lectura.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::query::{CarCreate, CarDelete, CarDraft, CarList, CarUpdate, PeopleCreate, SortOrder};
use super::{CarRepository, OnboardingRepository, PeopleRepository};
use crate::models::{Car, People};
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Debug, Clone)]
struct CarRecord {
    id: i64,
    reg_num: String,
    mark: String,
    model: String,
    year: Option<i32>,
    owner_id: i64,
}

#[derive(Debug, Default)]
struct State {
    cars: BTreeMap<i64, CarRecord>,
    owners: BTreeMap<i64, People>,
    next_car_id: i64,
    next_owner_id: i64,
}

impl State {
    fn attach(&self, record: &CarRecord) -> AppResult<Car> {
        let owner = self.owners.get(&record.owner_id).cloned().ok_or_else(|| {
            AppError::Internal(format!("car {} references missing owner {}", record.id, record.owner_id))
        })?;

        Ok(Car {
            id: record.id,
            reg_num: record.reg_num.clone(),
            mark: record.mark.clone(),
            model: record.model.clone(),
            year: record.year,
            owner_id: record.owner_id,
            owner,
        })
    }

    fn reg_num_taken(&self, reg_num: &str, except: Option<i64>) -> bool {
        self.cars
            .values()
            .any(|c| c.reg_num == reg_num && Some(c.id) != except)
    }

    fn insert_owner(&mut self, qry: &PeopleCreate) -> People {
        self.next_owner_id += 1;
        let people = People {
            id: self.next_owner_id,
            name: qry.name.clone(),
            surname: qry.surname.clone(),
            patronymic: qry.patronymic.clone(),
        };
        self.owners.insert(people.id, people.clone());
        people
    }

    fn insert_car(&mut self, qry: &CarCreate) -> AppResult<Car> {
        if self.reg_num_taken(&qry.reg_num, None) {
            return Err(AppError::Conflict(format!(
                "car with regNum '{}' already exists",
                qry.reg_num
            )));
        }
        if !self.owners.contains_key(&qry.owner_id) {
            return Err(AppError::Internal(format!("owner {} does not exist", qry.owner_id)));
        }

        self.next_car_id += 1;
        let record = CarRecord {
            id: self.next_car_id,
            reg_num: qry.reg_num.clone(),
            mark: qry.mark.clone(),
            model: qry.model.clone(),
            year: qry.year,
            owner_id: qry.owner_id,
        };
        self.cars.insert(record.id, record.clone());
        self.attach(&record)
    }

    fn matches(&self, record: &CarRecord, qry: &CarList) -> bool {
        let owner = self.owners.get(&record.owner_id);

        qry.reg_num.as_ref().map_or(true, |v| &record.reg_num == v)
            && qry.mark.as_ref().map_or(true, |v| record.mark.contains(v.as_str()))
            && qry.model.as_ref().map_or(true, |v| record.model.contains(v.as_str()))
            && qry.year.map_or(true, |v| record.year == Some(v))
            && qry
                .owner_name
                .as_ref()
                .map_or(true, |v| owner.is_some_and(|o| o.name.contains(v.as_str())))
            && qry
                .owner_surname
                .as_ref()
                .map_or(true, |v| owner.is_some_and(|o| &o.surname == v))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| AppError::Internal("in-memory store poisoned".to_string()))
    }

    /// Número de cars guardados
    pub fn car_count(&self) -> usize {
        self.lock().map(|s| s.cars.len()).unwrap_or_default()
    }

    /// Número de owners guardados
    pub fn owner_count(&self) -> usize {
        self.lock().map(|s| s.owners.len()).unwrap_or_default()
    }
}

#[async_trait]
impl CarRepository for InMemoryStore {
    async fn list(&self, qry: &CarList) -> AppResult<Vec<Car>> {
        qry.check_pagination()?;
        let state = self.lock()?;

        let matching: Vec<&CarRecord> = state
            .cars
            .values()
            .filter(|record| state.matches(record, qry))
            .collect();

        let ordered: Box<dyn Iterator<Item = &&CarRecord> + '_> = match qry.order {
            SortOrder::Asc => Box::new(matching.iter()),
            SortOrder::Desc => Box::new(matching.iter().rev()),
        };

        ordered
            .skip(qry.offset() as usize)
            .take(qry.limit() as usize)
            .map(|record| state.attach(record))
            .collect()
    }

    async fn create(&self, qry: &CarCreate) -> AppResult<Car> {
        self.lock()?.insert_car(qry)
    }

    async fn update(&self, qry: &CarUpdate) -> AppResult<Car> {
        let mut state = self.lock()?;

        if !state.cars.contains_key(&qry.id) {
            return Err(not_found_error("car", "id", qry.id));
        }
        if let Some(reg_num) = &qry.reg_num {
            if state.reg_num_taken(reg_num, Some(qry.id)) {
                return Err(AppError::Conflict(format!(
                    "car with regNum '{}' already exists",
                    reg_num
                )));
            }
        }

        let record = state
            .cars
            .get_mut(&qry.id)
            .ok_or_else(|| not_found_error("car", "id", qry.id))?;
        if let Some(reg_num) = &qry.reg_num {
            record.reg_num = reg_num.clone();
        }
        if let Some(mark) = &qry.mark {
            record.mark = mark.clone();
        }
        if let Some(model) = &qry.model {
            record.model = model.clone();
        }
        if let Some(year) = qry.year {
            record.year = Some(year);
        }

        let record = record.clone();
        state.attach(&record)
    }

    async fn delete(&self, qry: &CarDelete) -> AppResult<()> {
        match self.lock()?.cars.remove(&qry.id) {
            Some(_) => Ok(()),
            None => Err(not_found_error("car", "id", qry.id)),
        }
    }
}

#[async_trait]
impl PeopleRepository for InMemoryStore {
    async fn create(&self, qry: &PeopleCreate) -> AppResult<People> {
        Ok(self.lock()?.insert_owner(qry))
    }
}

#[async_trait]
impl OnboardingRepository for InMemoryStore {
    async fn onboard(&self, owner: &PeopleCreate, car: &CarDraft) -> AppResult<Car> {
        let mut state = self.lock()?;

        let people = state.insert_owner(owner);
        match state.insert_car(&car.with_owner(people.id)) {
            Ok(created) => Ok(created),
            Err(e) => {
                state.owners.remove(&people.id);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> CarList {
        CarList {
            reg_num: None,
            mark: None,
            model: None,
            year: None,
            owner_name: None,
            owner_surname: None,
            order: SortOrder::Asc,
            page: 1,
            count: 10,
        }
    }

    fn draft(reg_num: &str, mark: &str, year: Option<i32>) -> CarDraft {
        CarDraft {
            reg_num: reg_num.to_string(),
            mark: mark.to_string(),
            model: "Model".to_string(),
            year,
        }
    }

    fn owner(name: &str, surname: &str) -> PeopleCreate {
        PeopleCreate {
            name: name.to_string(),
            surname: surname.to_string(),
            patronymic: None,
        }
    }

    #[tokio::test]
    async fn test_filters_are_and_combined() {
        let store = InMemoryStore::new();
        store.onboard(&owner("Jane", "Doe"), &draft("A1", "Toyota", Some(2020))).await.unwrap();
        store.onboard(&owner("John", "Doe"), &draft("A2", "Toyota", Some(2010))).await.unwrap();
        store.onboard(&owner("Jane", "Roe"), &draft("A3", "Honda", Some(2020))).await.unwrap();

        let found = store
            .list(&CarList {
                mark: Some("oyo".into()),
                year: Some(2020),
                ..list()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reg_num, "A1");

        let found = store
            .list(&CarList {
                owner_name: Some("Ja".into()),
                owner_surname: Some("Roe".into()),
                ..list()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reg_num, "A3");
    }

    #[tokio::test]
    async fn test_substring_match_is_case_sensitive() {
        let store = InMemoryStore::new();
        store.onboard(&owner("Jane", "Doe"), &draft("A1", "Toyota", None)).await.unwrap();

        let found = store
            .list(&CarList {
                mark: Some("toyota".into()),
                ..list()
            })
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_onboard_conflict_leaves_no_owner_behind() {
        let store = InMemoryStore::new();
        store.onboard(&owner("Jane", "Doe"), &draft("A1", "Toyota", None)).await.unwrap();

        let err = store
            .onboard(&owner("John", "Roe"), &draft("A1", "Honda", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.owner_count(), 1);
        assert_eq!(store.car_count(), 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_reg_num_is_conflict() {
        let store = InMemoryStore::new();
        store.onboard(&owner("Jane", "Doe"), &draft("A1", "Toyota", None)).await.unwrap();
        let second = store.onboard(&owner("John", "Roe"), &draft("A2", "Honda", None)).await.unwrap();

        let err = store
            .update(&CarUpdate {
                id: second.id,
                reg_num: Some("A1".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Mantener la propia matrícula no es un conflicto
        let same = store
            .update(&CarUpdate {
                id: second.id,
                reg_num: Some("A2".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(same, second);
    }

    #[tokio::test]
    async fn test_list_rejects_zero_count() {
        let store = InMemoryStore::new();
        let err = store.list(&CarList { count: 0, ..list() }).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
