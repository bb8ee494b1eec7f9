//! Rule-configuration loading.
//!
//! Rules reach the engine as a JSON document maintained on the rule
//! administration surface. Everything is validated here, at load time; a
//! document that parses but carries a bad rule (rate outside `[0, 1]`,
//! unknown product family, blank code) is rejected with the offending rule
//! identified. The resolver itself never sees a malformed rule.
//!
//! Document format — an array of rule records, scope fields optional:
//!
//! ```json
//! [
//!   { "name": "Base", "rate": 0.015 },
//!   { "name": "RENE", "vendor": "RENE", "rate": 0.02 },
//!   { "name": "Pasteles LOCAL-2", "family": "B", "location": "LOCAL-2", "rate": 0.025 }
//! ]
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use panerp_core::{DomainError, LocationId, Rate, VendorCode};
use panerp_sales::ProductFamily;

use crate::rule::{CommissionRule, RuleScope, RuleSet};

/// Failure loading the rule-configuration document.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    /// The document is not valid JSON or not an array of rule records.
    #[error("malformed rule configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but fails domain validation.
    #[error("rule {index} ({name:?}): {source}")]
    InvalidRule {
        index: usize,
        name: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    name: String,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    family: Option<String>,
    #[serde(default)]
    location: Option<String>,
    rate: Decimal,
}

impl RawRule {
    fn into_rule(self) -> Result<CommissionRule, DomainError> {
        let scope = RuleScope {
            vendor: self.vendor.map(VendorCode::new).transpose()?,
            family: self
                .family
                .map(|f| f.parse::<ProductFamily>())
                .transpose()?,
            location: self.location.map(LocationId::new).transpose()?,
        };
        let rule = CommissionRule {
            name: self.name,
            scope,
            rate: Rate::new(self.rate)?,
        };
        rule.validate()?;
        Ok(rule)
    }
}

impl RuleSet {
    /// Parse and validate a JSON rule document.
    ///
    /// Document order becomes the set's stable order (and therefore the
    /// tie-break precedence).
    pub fn from_json(json: &str) -> Result<RuleSet, RuleConfigError> {
        let raw: Vec<RawRule> = serde_json::from_str(json)?;
        let mut rules = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            let name = record.name.clone();
            let rule = record
                .into_rule()
                .map_err(|source| RuleConfigError::InvalidRule {
                    index,
                    name,
                    source,
                })?;
            rules.push(rule);
        }
        tracing::debug!(count = rules.len(), "rule configuration loaded");
        // Already validated record by record; from_rules cannot fail here,
        // but keep the single construction path.
        RuleSet::from_rules(rules).map_err(|source| RuleConfigError::InvalidRule {
            index: 0,
            name: String::new(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn loads_a_valid_document_in_order() {
        let json = r#"[
            { "name": "Base", "rate": 0.015 },
            { "name": "RENE", "vendor": "RENE", "rate": 0.02 },
            { "name": "Pasteles LOCAL-2", "family": "B", "location": "LOCAL-2", "rate": 0.025 }
        ]"#;

        let rules = RuleSet::from_json(json).unwrap();
        assert_eq!(rules.len(), 3);

        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Base", "RENE", "Pasteles LOCAL-2"]);

        let base = rules.iter().next().unwrap();
        assert!(base.scope.is_global());
        assert_eq!(base.rate, Rate::new(dec!(0.015)).unwrap());
    }

    #[test]
    fn negative_rate_is_rejected_with_the_rule_named() {
        let json = r#"[ { "name": "Base", "rate": -0.01 } ]"#;
        let err = RuleSet::from_json(json).unwrap_err();
        match err {
            RuleConfigError::InvalidRule { index, name, .. } => {
                assert_eq!(index, 0);
                assert_eq!(name, "Base");
            }
            other => panic!("expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn unknown_product_family_is_rejected() {
        let json = r#"[ { "name": "Pasteles", "family": "Z", "rate": 0.02 } ]"#;
        let err = RuleSet::from_json(json).unwrap_err();
        assert!(matches!(err, RuleConfigError::InvalidRule { .. }));
    }

    #[test]
    fn rate_above_one_is_rejected() {
        let json = r#"[ { "name": "Todo", "rate": 1.5 } ]"#;
        assert!(RuleSet::from_json(json).is_err());
    }

    #[test]
    fn blank_vendor_code_is_rejected() {
        let json = r#"[ { "name": "Fantasma", "vendor": "   ", "rate": 0.02 } ]"#;
        assert!(RuleSet::from_json(json).is_err());
    }

    #[test]
    fn non_array_document_is_a_parse_error() {
        let err = RuleSet::from_json(r#"{ "name": "Base" }"#).unwrap_err();
        assert!(matches!(err, RuleConfigError::Parse(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"[ { "name": "Base", "rate": 0.015, "priority": 1 } ]"#;
        assert!(matches!(
            RuleSet::from_json(json).unwrap_err(),
            RuleConfigError::Parse(_)
        ));
    }
}
