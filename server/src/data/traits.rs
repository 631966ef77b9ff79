//! Repository traits for storage backends
//!
//! Each backend (SQLite, memory) implements [`CarRepository`] with its own
//! query strategy; both must return the same rows for the same predicate.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::Predicate;
use crate::data::types::{CarRow, NewCar};

/// Repository trait for electric car records
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Cars matching `predicate`, ordered by id ascending
    async fn list_cars(&self, predicate: &Predicate) -> Result<Vec<CarRow>, DataError>;

    async fn get_car(&self, id: i64) -> Result<Option<CarRow>, DataError>;

    /// Delete a car, returning false when no row had that id
    async fn delete_car(&self, id: i64) -> Result<bool, DataError>;

    /// Insert cars atomically, returning the number inserted
    async fn insert_cars(&self, cars: &[NewCar]) -> Result<u64, DataError>;

    /// Delete every car, returning the number removed
    async fn clear_cars(&self) -> Result<u64, DataError>;

    /// Replace every car with `cars` atomically
    ///
    /// Returns `(removed, inserted)`; when it fails the table is unchanged.
    async fn replace_cars(&self, cars: &[NewCar]) -> Result<(u64, u64), DataError>;

    async fn count_cars(&self) -> Result<u64, DataError>;
}
