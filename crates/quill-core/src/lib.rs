//! # Quill Core
//!
//! The domain layer of the quill blogging API: entities, validation,
//! the authorization policy, slug generation, and the entity services
//! that orchestrate them. Pure business logic with zero infrastructure
//! dependencies; persistence and credentials are reached through the
//! ports defined here.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod service;
pub mod slug;
pub mod validate;

pub use error::DomainError;
