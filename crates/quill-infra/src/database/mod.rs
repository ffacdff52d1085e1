//! Persistence adapters.

mod connections;
pub mod entity;
pub mod memory;
pub mod postgres;

pub use connections::{DatabaseConfig, connect};

#[cfg(test)]
mod tests;
