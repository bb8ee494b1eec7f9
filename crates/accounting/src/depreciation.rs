//! Straight-line depreciation over whole years.
//!
//! `annual = cost / useful_life_years` rounded to whole pesos; accumulated
//! depreciation is capped at cost so book value never goes negative. Disposal, impairment and
//! partial-year proration are out of scope — acquisitions depreciate from
//! their first full year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use panerp_core::{DomainError, DomainResult, Money};

/// A straight-line depreciation schedule for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StraightLine {
    cost: Money,
    useful_life_years: u32,
}

/// One year of a depreciation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationRow {
    /// 1-based year of service.
    pub year: u32,
    pub depreciation: Money,
    pub accumulated: Money,
    pub book_value: Money,
}

impl StraightLine {
    /// A useful life of zero years is malformed input and rejected up front.
    pub fn new(cost: Money, useful_life_years: u32) -> DomainResult<Self> {
        if useful_life_years == 0 {
            return Err(DomainError::validation(
                "useful life must be at least one year",
            ));
        }
        Ok(Self {
            cost,
            useful_life_years,
        })
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    pub fn useful_life_years(&self) -> u32 {
        self.useful_life_years
    }

    /// Depreciation charged for each year of service, rounded to whole
    /// pesos (CLP carries no cents).
    pub fn annual_depreciation(&self) -> Money {
        let annual =
            (self.cost.amount() / Decimal::from(self.useful_life_years)).round_dp(0);
        // cost >= 0 and life >= 1, so the quotient is non-negative.
        Money::new(annual).unwrap_or(Money::zero())
    }

    /// Accumulated depreciation after `years` full years of service,
    /// capped at cost once the asset is fully depreciated.
    pub fn accumulated_after(&self, years: u32) -> Money {
        let raw = self.annual_depreciation().amount() * Decimal::from(years);
        let accumulated = Money::new(raw).unwrap_or(Money::zero());
        accumulated.min(self.cost)
    }

    /// Book value after `years` full years of service (never negative).
    pub fn book_value_after(&self, years: u32) -> Money {
        self.cost.saturating_sub(self.accumulated_after(years))
    }

    /// The full year-by-year schedule, one row per year of useful life.
    pub fn schedule(&self) -> Vec<DepreciationRow> {
        (1..=self.useful_life_years)
            .map(|year| DepreciationRow {
                year,
                depreciation: self.annual_depreciation(),
                accumulated: self.accumulated_after(year),
                book_value: self.book_value_after(year),
            })
            .collect()
    }
}
