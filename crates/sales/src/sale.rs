//! Sales orders and their line items.

use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use panerp_core::{DomainError, LocationId, Money, OrderNumber, VendorCode};

use crate::period::Period;

/// Product catalog family. The bakery groups its catalog into three pricing
/// families (A = breads, B = pastry, C = special orders); commission rules
/// may be scoped to one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductFamily {
    A,
    B,
    C,
}

impl ProductFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductFamily::A => "A",
            ProductFamily::B => "B",
            ProductFamily::C => "C",
        }
    }
}

impl FromStr for ProductFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(ProductFamily::A),
            "B" | "b" => Ok(ProductFamily::B),
            "C" | "c" => Ok(ProductFamily::C),
            other => Err(DomainError::validation(format!(
                "unknown product family {other:?} (expected A, B or C)"
            ))),
        }
    }
}

impl core::fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales order status lifecycle.
///
/// Only `Completed` sales are eligible for commission and reporting;
/// draft, pending and cancelled orders are excluded from every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Draft,
    Pending,
    Completed,
    Cancelled,
}

/// One product entry within a sales order — the unit commission is
/// computed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLineItem {
    /// Salesperson who sold this line.
    pub vendor: VendorCode,
    pub family: ProductFamily,
    pub location: LocationId,
    /// Product name, carried through for reporting only.
    pub product: String,
    pub base_amount: Money,
}

/// A sales order: identifying metadata plus its line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub order: OrderNumber,
    pub date: NaiveDate,
    pub customer: String,
    pub status: SaleStatus,
    pub lines: Vec<SaleLineItem>,
}

impl Sale {
    pub fn is_completed(&self) -> bool {
        self.status == SaleStatus::Completed
    }

    /// Completed AND dated inside the period — the commission eligibility
    /// test applied by every reporting run.
    pub fn is_reportable_in(&self, period: &Period) -> bool {
        self.is_completed() && period.contains(self.date)
    }
}
