//! Sales data model.
//!
//! This crate contains the sale records the commission engine consumes,
//! implemented purely as deterministic domain data (no IO, no HTTP, no
//! storage).

pub mod period;
pub mod sale;

pub use period::Period;
pub use sale::{ProductFamily, Sale, SaleLineItem, SaleStatus};
