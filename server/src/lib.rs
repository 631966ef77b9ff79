//! EvGrid: electric car catalog API with a validated filter query builder

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
