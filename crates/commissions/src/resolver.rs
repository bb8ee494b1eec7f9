//! Best-match rule resolution for a single sale line.
//!
//! A rule is eligible for a line iff every scope field it specifies equals
//! the line's value; one mismatching field disqualifies the rule outright
//! (there is no partial credit). Eligible rules are ranked by specificity:
//!
//! - vendor match: +4
//! - product family match: +2
//! - location match: +1
//!
//! The weights are powers of two so a vendor-scoped rule always outranks any
//! combination of the narrower dimensions (4 > 2 + 1). The highest score
//! wins; ties go to the rule inserted first in the [`RuleSet`].

use serde::{Deserialize, Serialize};

use panerp_core::{Money, Rate};
use panerp_sales::SaleLineItem;

use crate::rule::{CommissionRule, RuleScope, RuleSet};

/// Specificity weight of a vendor-scoped match.
pub const VENDOR_WEIGHT: u8 = 4;
/// Specificity weight of a product-family match.
pub const FAMILY_WEIGHT: u8 = 2;
/// Specificity weight of a location match.
pub const LOCATION_WEIGHT: u8 = 1;

/// Display label for a line no rule covers.
pub const NO_RULE_LABEL: &str = "Sin Regla";

/// The rule selected for a line, with the specificity score it won on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub rule: &'a CommissionRule,
    pub score: u8,
}

/// Which rule a line's commission was computed under, for audit display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedRule {
    Named(String),
    NoMatch,
}

impl AppliedRule {
    pub fn is_match(&self) -> bool {
        matches!(self, AppliedRule::Named(_))
    }
}

impl core::fmt::Display for AppliedRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AppliedRule::Named(name) => f.write_str(name),
            AppliedRule::NoMatch => f.write_str(NO_RULE_LABEL),
        }
    }
}

/// Per-line outcome: the rate applied, the rule it came from and the
/// resulting commission amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionResult {
    pub applied_rate: Rate,
    pub rule_applied: AppliedRule,
    pub commission: Money,
}

fn scope_matches(scope: &RuleScope, item: &SaleLineItem) -> bool {
    let vendor_ok = scope.vendor.as_ref().is_none_or(|v| *v == item.vendor);
    let family_ok = scope.family.is_none_or(|f| f == item.family);
    let location_ok = scope.location.as_ref().is_none_or(|l| *l == item.location);
    vendor_ok && family_ok && location_ok
}

fn specificity(scope: &RuleScope) -> u8 {
    let mut score = 0;
    if scope.vendor.is_some() {
        score += VENDOR_WEIGHT;
    }
    if scope.family.is_some() {
        score += FAMILY_WEIGHT;
    }
    if scope.location.is_some() {
        score += LOCATION_WEIGHT;
    }
    score
}

/// Find the most specific rule covering `item`, or `None` if no rule's scope
/// is compatible with it.
///
/// Pure function of its inputs; absence of a match is a normal outcome, not
/// an error. With equal scores the rule inserted first wins, which is why the
/// scan only replaces the running best on a strictly greater score.
pub fn resolve_rule<'a>(item: &SaleLineItem, rules: &'a RuleSet) -> Option<RuleMatch<'a>> {
    let mut best: Option<RuleMatch<'a>> = None;
    for rule in rules.iter() {
        if !scope_matches(&rule.scope, item) {
            continue;
        }
        let score = specificity(&rule.scope);
        let beats_current = best.as_ref().is_none_or(|b| score > b.score);
        if beats_current {
            best = Some(RuleMatch { rule, score });
        }
    }
    best
}

/// Resolve `item` and compute its commission.
///
/// An uncovered line gets rate zero and the [`NO_RULE_LABEL`] sentinel; its
/// sale amount stays known to the caller.
pub fn commission_for_line(item: &SaleLineItem, rules: &RuleSet) -> CommissionResult {
    match resolve_rule(item, rules) {
        Some(matched) => {
            let rate = matched.rule.rate;
            let result = CommissionResult {
                applied_rate: rate,
                rule_applied: AppliedRule::Named(matched.rule.name.clone()),
                commission: item.base_amount * rate,
            };
            tracing::debug!(
                vendor = %item.vendor,
                rule = %matched.rule.name,
                score = matched.score,
                commission = %result.commission,
                "rule resolved"
            );
            result
        }
        None => {
            tracing::debug!(vendor = %item.vendor, product = %item.product, "no rule matched");
            CommissionResult {
                applied_rate: Rate::zero(),
                rule_applied: AppliedRule::NoMatch,
                commission: Money::zero(),
            }
        }
    }
}
