//! SQLite repositories
//!
//! Row types (CarRow, NewCar) are imported from `crate::data::types`.

pub mod car;

pub use car::{
    clear_cars, count_cars, delete_car, get_car, insert_cars, list_cars, replace_cars,
};
