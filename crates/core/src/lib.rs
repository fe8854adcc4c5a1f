//! `smartwill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the aggregate/entity traits, and the error and validation types
//! shared by the navigation and will crates.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{PrincipalId, WillId};
pub use validation::{ValidationError, ValidationErrors, ValidationResult};
pub use value_object::ValueObject;
