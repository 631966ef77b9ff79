//! CarRepository trait implementation for SQLite

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::filters::Predicate;
use crate::data::traits::CarRepository;
use crate::data::types::{CarRow, NewCar};

use super::SqliteService;
use super::repositories::car;

#[async_trait]
impl CarRepository for Arc<SqliteService> {
    async fn list_cars(&self, predicate: &Predicate) -> Result<Vec<CarRow>, DataError> {
        car::list_cars(self.pool(), predicate)
            .await
            .map_err(Into::into)
    }

    async fn get_car(&self, id: i64) -> Result<Option<CarRow>, DataError> {
        car::get_car(self.pool(), id).await.map_err(Into::into)
    }

    async fn delete_car(&self, id: i64) -> Result<bool, DataError> {
        car::delete_car(self.pool(), id).await.map_err(Into::into)
    }

    async fn insert_cars(&self, cars: &[NewCar]) -> Result<u64, DataError> {
        car::insert_cars(self.pool(), cars)
            .await
            .map_err(Into::into)
    }

    async fn clear_cars(&self) -> Result<u64, DataError> {
        car::clear_cars(self.pool()).await.map_err(Into::into)
    }

    async fn replace_cars(&self, cars: &[NewCar]) -> Result<(u64, u64), DataError> {
        car::replace_cars(self.pool(), cars)
            .await
            .map_err(Into::into)
    }

    async fn count_cars(&self) -> Result<u64, DataError> {
        car::count_cars(self.pool()).await.map_err(Into::into)
    }
}
