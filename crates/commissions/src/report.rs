//! Commission aggregation over a reporting period.
//!
//! Runs the resolver over every line of every completed sale in the period
//! and accumulates totals per salesperson. Lines whose commission comes out
//! at zero (no rule matched, or a zero-rate rule) are resolved and logged but
//! deliberately left out of the vendor summaries; the report mirrors what the
//! commission screen has always shown. Re-running with identical inputs
//! yields an identical report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use panerp_core::{Money, OrderNumber, Rate, VendorCode};
use panerp_sales::Period;

use crate::history::SalesHistory;
use crate::resolver::{AppliedRule, commission_for_line};
use crate::rule::RuleSet;

/// Restrict a run to one salesperson, or report on all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VendorFilter {
    All,
    Vendor(VendorCode),
}

impl VendorFilter {
    fn admits(&self, vendor: &VendorCode) -> bool {
        match self {
            VendorFilter::All => true,
            VendorFilter::Vendor(only) => only == vendor,
        }
    }
}

/// One commissioned line, retained for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionDetail {
    pub order: OrderNumber,
    pub date: NaiveDate,
    pub customer: String,
    pub product: String,
    pub sale_amount: Money,
    pub applied_rate: Rate,
    pub commission: Money,
    pub rule_applied: AppliedRule,
}

/// Aggregated totals for one salesperson, with the lines behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSummary {
    pub vendor: VendorCode,
    pub total_sales: Money,
    pub total_commission: Money,
    pub details: Vec<CommissionDetail>,
}

/// The output of one calculation run. Vendors appear in the order their
/// first commissioned line was encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionReport {
    pub period: Period,
    pub vendors: Vec<VendorSummary>,
}

impl CommissionReport {
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    pub fn grand_total_sales(&self) -> Money {
        self.vendors
            .iter()
            .fold(Money::zero(), |acc, v| acc + v.total_sales)
    }

    pub fn grand_total_commission(&self) -> Money {
        self.vendors
            .iter()
            .fold(Money::zero(), |acc, v| acc + v.total_commission)
    }
}

/// Run the resolver over every completed sale in `period` and aggregate
/// commissions per vendor.
///
/// Stateless and idempotent: the report is a pure function of the history
/// snapshot, the rule set, the period and the filter.
pub fn calculate_commissions(
    history: &dyn SalesHistory,
    rules: &RuleSet,
    period: Period,
    filter: &VendorFilter,
) -> CommissionReport {
    let mut vendors: Vec<VendorSummary> = Vec::new();
    let mut lines_seen: u64 = 0;
    let mut lines_dropped: u64 = 0;

    for sale in history.sales_in(&period) {
        if !sale.is_reportable_in(&period) {
            continue;
        }
        for line in &sale.lines {
            if !filter.admits(&line.vendor) {
                continue;
            }
            lines_seen += 1;

            let result = commission_for_line(line, rules);
            if result.commission.is_zero() {
                // The report has never shown zero-commission lines, even
                // though they were real sales; see the run summary log.
                lines_dropped += 1;
                tracing::warn!(
                    order = %sale.order,
                    vendor = %line.vendor,
                    rule = %result.rule_applied,
                    amount = %line.base_amount,
                    "zero-commission line excluded from report"
                );
                continue;
            }

            let detail = CommissionDetail {
                order: sale.order.clone(),
                date: sale.date,
                customer: sale.customer.clone(),
                product: line.product.clone(),
                sale_amount: line.base_amount,
                applied_rate: result.applied_rate,
                commission: result.commission,
                rule_applied: result.rule_applied,
            };

            let idx = match vendors.iter().position(|v| v.vendor == line.vendor) {
                Some(existing) => existing,
                None => {
                    vendors.push(VendorSummary {
                        vendor: line.vendor.clone(),
                        total_sales: Money::zero(),
                        total_commission: Money::zero(),
                        details: Vec::new(),
                    });
                    vendors.len() - 1
                }
            };
            let summary = &mut vendors[idx];
            summary.total_sales += detail.sale_amount;
            summary.total_commission += detail.commission;
            summary.details.push(detail);
        }
    }

    let report = CommissionReport { period, vendors };
    tracing::info!(
        period = %period,
        vendors = report.vendors.len(),
        lines = lines_seen,
        dropped = lines_dropped,
        total_commission = %report.grand_total_commission(),
        "commission run complete"
    );
    report
}
