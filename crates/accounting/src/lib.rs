//! Fixed-asset accounting (straight-line depreciation).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod depreciation;

pub use depreciation::{DepreciationRow, StraightLine};
