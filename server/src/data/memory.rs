//! In-memory car store
//!
//! Non-persistent backend evaluating predicates directly against rows.
//! Ids are assigned from a monotonically increasing counter and are never
//! reused, matching SQLite `AUTOINCREMENT`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::data::error::DataError;
use crate::data::filters::Predicate;
use crate::data::traits::CarRepository;
use crate::data::types::{CarRow, NewCar};

#[derive(Debug)]
struct MemoryState {
    rows: BTreeMap<i64, CarRow>,
    next_id: i64,
}

/// In-memory store for cars
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl CarRepository for MemoryStore {
    async fn list_cars(&self, predicate: &Predicate) -> Result<Vec<CarRow>, DataError> {
        let state = self.state.read();
        if predicate.is_match_all() {
            return Ok(state.rows.values().cloned().collect());
        }
        // BTreeMap iteration is id-ascending
        Ok(state
            .rows
            .values()
            .filter(|row| predicate.matches(row))
            .cloned()
            .collect())
    }

    async fn get_car(&self, id: i64) -> Result<Option<CarRow>, DataError> {
        Ok(self.state.read().rows.get(&id).cloned())
    }

    async fn delete_car(&self, id: i64) -> Result<bool, DataError> {
        Ok(self.state.write().rows.remove(&id).is_some())
    }

    async fn insert_cars(&self, cars: &[NewCar]) -> Result<u64, DataError> {
        let now = chrono::Utc::now().timestamp();
        let mut state = self.state.write();
        for car in cars {
            let id = state.next_id;
            state.next_id += 1;
            state.rows.insert(id, car.clone().into_row(id, now));
        }
        Ok(cars.len() as u64)
    }

    async fn clear_cars(&self) -> Result<u64, DataError> {
        let mut state = self.state.write();
        let removed = state.rows.len() as u64;
        state.rows.clear();
        Ok(removed)
    }

    async fn replace_cars(&self, cars: &[NewCar]) -> Result<(u64, u64), DataError> {
        let now = chrono::Utc::now().timestamp();
        let mut state = self.state.write();
        let removed = state.rows.len() as u64;
        state.rows.clear();
        for car in cars {
            let id = state.next_id;
            state.next_id += 1;
            state.rows.insert(id, car.clone().into_row(id, now));
        }
        Ok((removed, cars.len() as u64))
    }

    async fn count_cars(&self) -> Result<u64, DataError> {
        Ok(self.state.read().rows.len() as u64)
    }
}
