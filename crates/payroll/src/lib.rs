//! Payroll withholding (Chilean social-security discounts).
//!
//! Pure domain logic: no IO, no HTTP, no persistence concerns.

pub mod withholding;

pub use withholding::{PayrollParameters, Withholding};
