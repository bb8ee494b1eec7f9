//! Strongly-typed business codes used across the domain.
//!
//! The ERP identifies vendors, sale locations, and sales orders by short
//! human-assigned codes (e.g. vendor `"RENE"`, order `"V-00123"`), not by
//! surrogate ids. Each code gets its own newtype so a vendor code can never
//! be passed where a location id is expected.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Code identifying a salesperson (commission recipient).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorCode(String);

/// Code identifying a sale location (branch / point of sale).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

/// Number identifying a sales order (e.g. `"V-00123"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a code from its textual form.
            ///
            /// Leading/trailing whitespace is trimmed; a blank code is rejected.
            pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
                let code = code.into();
                let trimmed = code.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(concat!(
                        $name,
                        " must not be blank"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_code_newtype!(VendorCode, "VendorCode");
impl_code_newtype!(LocationId, "LocationId");
impl_code_newtype!(OrderNumber, "OrderNumber");
