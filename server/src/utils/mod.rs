//! Utility functions for the application

pub mod crypto;
pub mod file;
pub mod number;
pub mod sql;
pub mod terminal;
