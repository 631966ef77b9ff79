//! API route handlers

pub mod cars;
pub mod health;
