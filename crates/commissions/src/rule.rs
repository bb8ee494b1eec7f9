//! Commission rules and the ordered set they live in.

use serde::{Deserialize, Serialize};

use panerp_core::{DomainError, DomainResult, LocationId, Rate, VendorCode};
use panerp_sales::ProductFamily;

/// Optional scope of a commission rule.
///
/// Each field left `None` does not constrain that dimension; a scope with all
/// three fields `None` matches every line (a global default rule).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleScope {
    pub vendor: Option<VendorCode>,
    pub family: Option<ProductFamily>,
    pub location: Option<LocationId>,
}

impl RuleScope {
    /// Scope that matches every line item.
    pub fn global() -> Self {
        Self::default()
    }

    pub fn is_global(&self) -> bool {
        self.vendor.is_none() && self.family.is_none() && self.location.is_none()
    }
}

/// A commission rule: a display name for audit trails, an optional scope and
/// the rate applied to matching lines.
///
/// Rules are immutable once loaded for a calculation pass; creation and
/// editing happen on an external administration surface which is expected to
/// run [`CommissionRule::validate`] before accepting a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRule {
    pub name: String,
    pub scope: RuleScope,
    pub rate: Rate,
}

impl CommissionRule {
    /// Configuration-time validation. The resolver itself never fails;
    /// malformed rules must be rejected before they reach it.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("rule name must not be blank"));
        }
        Ok(())
    }
}

/// The full set of configured rules, held in a stable order.
///
/// Iteration order is first-inserted order and is part of the contract:
/// when two rules score the same specificity for a line, the earlier one
/// wins. Callers that need a different precedence reorder at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<CommissionRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from already-validated rules, preserving their order.
    pub fn from_rules(rules: Vec<CommissionRule>) -> DomainResult<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    /// Append a rule at the end (lowest tie-break precedence).
    pub fn insert(&mut self, rule: CommissionRule) -> DomainResult<()> {
        rule.validate()?;
        self.rules.push(rule);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommissionRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rate(r: rust_decimal::Decimal) -> Rate {
        Rate::new(r).unwrap()
    }

    #[test]
    fn global_scope_has_no_constraints() {
        assert!(RuleScope::global().is_global());
        let scoped = RuleScope {
            vendor: Some(VendorCode::new("RENE").unwrap()),
            ..RuleScope::global()
        };
        assert!(!scoped.is_global());
    }

    #[test]
    fn blank_rule_name_is_rejected_at_load() {
        let rule = CommissionRule {
            name: "  ".to_string(),
            scope: RuleScope::global(),
            rate: rate(dec!(0.02)),
        };
        assert!(RuleSet::from_rules(vec![rule]).is_err());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut set = RuleSet::new();
        for name in ["Base", "RENE", "Pasteles LOCAL-2"] {
            set.insert(CommissionRule {
                name: name.to_string(),
                scope: RuleScope::global(),
                rate: rate(dec!(0.01)),
            })
            .unwrap();
        }
        let names: Vec<&str> = set.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Base", "RENE", "Pasteles LOCAL-2"]);
    }
}
