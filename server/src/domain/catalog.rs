//! Car catalog service
//!
//! Orchestrates listing: validates search and filters into a predicate,
//! hands it to the configured repository and logs the outcome.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::data::error::DataError;
use crate::data::filters::{FilterError, FilterSpec, build_predicate};
use crate::data::traits::CarRepository;
use crate::data::types::{CarRow, ColumnInfo, describe_columns};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Catalog operations over a car repository
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CarRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CarRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn CarRepository> {
        &self.repo
    }

    /// Cars matching the search term and every filter, ordered by id
    pub async fn list_cars(
        &self,
        search: Option<&str>,
        filters: &[FilterSpec],
    ) -> Result<Vec<CarRow>, CatalogError> {
        let predicate = build_predicate(search, filters)?;

        let start = Instant::now();
        let rows = self.repo.list_cars(&predicate).await?;

        tracing::debug!(
            search = ?predicate.search,
            conditions = predicate.conditions.len(),
            skipped = predicate.skipped.len(),
            count = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Listed cars"
        );
        Ok(rows)
    }

    pub async fn get_car(&self, id: i64) -> Result<Option<CarRow>, CatalogError> {
        Ok(self.repo.get_car(id).await?)
    }

    /// Delete a car, returning false when it did not exist
    pub async fn delete_car(&self, id: i64) -> Result<bool, CatalogError> {
        let deleted = self.repo.delete_car(id).await?;
        if deleted {
            tracing::info!(id, "Car deleted");
        }
        Ok(deleted)
    }

    pub fn columns(&self) -> Vec<ColumnInfo> {
        describe_columns()
    }
}
