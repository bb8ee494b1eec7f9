//! `panerp-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, typed business codes, and monetary value objects shared by
//! the calculation crates.

pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{LocationId, OrderNumber, VendorCode};
pub use money::{Money, Rate};
pub use value_object::ValueObject;
