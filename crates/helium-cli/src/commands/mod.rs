//! Command implementations.

pub mod config;
pub mod model;
pub mod profile;
pub mod tools;
