//! Commission rule resolution and reporting.
//!
//! Pure domain logic: given a set of scoped commission rules and a filtered
//! slice of completed sales, pick the single best-matching rule per sale line
//! and aggregate the resulting commissions per salesperson. No IO, no HTTP,
//! no persistence concerns; callers supply sales through the [`SalesHistory`]
//! port and keep results wherever they like.
//!
//! Rule selection is specificity-based: a rule may constrain the vendor, the
//! product family and/or the sale location, and narrower rules beat broader
//! ones (see [`resolver`] for the exact weights). A line no rule covers is a
//! normal zero-commission outcome, not an error.

pub mod config;
pub mod history;
pub mod report;
pub mod resolver;
pub mod rule;

pub use config::RuleConfigError;
pub use history::{InMemorySalesHistory, SalesHistory};
pub use report::{
    CommissionDetail, CommissionReport, VendorFilter, VendorSummary, calculate_commissions,
};
pub use resolver::{
    AppliedRule, CommissionResult, NO_RULE_LABEL, RuleMatch, commission_for_line, resolve_rule,
};
pub use rule::{CommissionRule, RuleScope, RuleSet};
