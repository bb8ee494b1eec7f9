//! Monetary value objects.
//!
//! Amounts are exact decimals (Chilean pesos carry no cents, but commission
//! rates are fractional, so `base × rate` must not drift the way binary
//! floats do). `Money` is non-negative by construction; `Rate` is a fraction
//! in `[0, 1]`.

use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A non-negative monetary amount.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create an amount, rejecting negative values.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() {
            return Err(DomainError::validation(format!(
                "monetary amount must not be negative (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtraction clamped at zero (amounts cannot go negative).
    pub fn saturating_sub(self, other: Money) -> Money {
        if other.0 >= self.0 {
            Money::zero()
        } else {
            Money(self.0 - other.0)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

/// `amount × rate` — the commission/withholding primitive.
impl Mul<Rate> for Money {
    type Output = Money;

    fn mul(self, rate: Rate) -> Money {
        Money(self.0 * rate.0)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Money {}

/// A fraction in `[0, 1]` (e.g. `0.02` for a 2% commission rate).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// Create a rate, rejecting anything outside `[0, 1]`.
    pub fn new(fraction: Decimal) -> Result<Self, DomainError> {
        if fraction.is_sign_negative() || fraction > Decimal::ONE {
            return Err(DomainError::validation(format!(
                "rate must be a fraction between 0 and 1 (got {fraction})"
            )));
        }
        Ok(Self(fraction))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl core::fmt::Display for Rate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Rate {}
