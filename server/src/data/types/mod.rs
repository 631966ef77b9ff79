//! Shared data types for all storage backends

mod car;

pub use car::{CarRow, ColumnInfo, FieldValue, NewCar, describe_columns};
