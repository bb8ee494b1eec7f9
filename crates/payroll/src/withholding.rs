//! Monthly withholding calculation.
//!
//! Chilean payroll discounts three worker-side contributions from the gross
//! salary: pension (AFP), health, and unemployment insurance. All three are
//! computed on a taxable base capped at a UF-indexed ceiling — earnings above
//! `taxable_cap_uf × uf_value` contribute nothing further. The cap is always
//! enforced here; a configured-but-ignored ceiling is not a representable
//! state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use panerp_core::{DomainError, DomainResult, Money, Rate};

/// Withholding percentages and the UF-indexed taxable ceiling, validated at
/// construction. Long-lived configuration; the UF value is the one current
/// for the payroll month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollParameters {
    afp_rate: Rate,
    health_rate: Rate,
    unemployment_rate: Rate,
    /// Value of one UF in pesos for the payroll month.
    uf_value: Money,
    /// Taxable ceiling expressed in UF.
    taxable_cap_uf: Decimal,
    /// `taxable_cap_uf × uf_value`, precomputed.
    taxable_ceiling: Money,
}

impl PayrollParameters {
    pub fn new(
        afp_rate: Rate,
        health_rate: Rate,
        unemployment_rate: Rate,
        uf_value: Money,
        taxable_cap_uf: Decimal,
    ) -> DomainResult<Self> {
        if uf_value.is_zero() {
            return Err(DomainError::validation("UF value must be positive"));
        }
        if taxable_cap_uf <= Decimal::ZERO {
            return Err(DomainError::validation(
                "taxable cap must be a positive number of UF",
            ));
        }
        let combined =
            afp_rate.fraction() + health_rate.fraction() + unemployment_rate.fraction();
        if combined >= Decimal::ONE {
            return Err(DomainError::invariant(format!(
                "combined withholding share must stay below 100% (got {combined})"
            )));
        }
        let taxable_ceiling = Money::new(uf_value.amount() * taxable_cap_uf)?;
        Ok(Self {
            afp_rate,
            health_rate,
            unemployment_rate,
            uf_value,
            taxable_cap_uf,
            taxable_ceiling,
        })
    }

    pub fn afp_rate(&self) -> Rate {
        self.afp_rate
    }

    pub fn health_rate(&self) -> Rate {
        self.health_rate
    }

    pub fn unemployment_rate(&self) -> Rate {
        self.unemployment_rate
    }

    pub fn uf_value(&self) -> Money {
        self.uf_value
    }

    pub fn taxable_cap_uf(&self) -> Decimal {
        self.taxable_cap_uf
    }

    /// The peso ceiling the taxable base is clamped to.
    pub fn taxable_ceiling(&self) -> Money {
        self.taxable_ceiling
    }
}

/// The discounts withheld from one gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withholding {
    pub gross_salary: Money,
    /// `min(gross, ceiling)` — the base every discount is computed on.
    pub taxable_base: Money,
    pub pension: Money,
    pub health: Money,
    pub unemployment: Money,
}

impl Withholding {
    /// Compute the withholding for one gross monthly salary.
    pub fn compute(gross_salary: Money, params: &PayrollParameters) -> Self {
        let taxable_base = gross_salary.min(params.taxable_ceiling());
        let result = Self {
            gross_salary,
            taxable_base,
            pension: taxable_base * params.afp_rate(),
            health: taxable_base * params.health_rate(),
            unemployment: taxable_base * params.unemployment_rate(),
        };
        tracing::debug!(
            gross = %gross_salary,
            taxable = %taxable_base,
            capped = taxable_base < gross_salary,
            total = %result.total_discounts(),
            "withholding computed"
        );
        result
    }

    pub fn total_discounts(&self) -> Money {
        self.pension + self.health + self.unemployment
    }

    pub fn net_salary(&self) -> Money {
        self.gross_salary.saturating_sub(self.total_discounts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal) -> Money {
        Money::new(amount).unwrap()
    }

    fn params() -> PayrollParameters {
        // AFP 10%, health 7%, unemployment 0.6%, cap 84.3 UF at 37 000 CLP.
        PayrollParameters::new(
            Rate::new(dec!(0.10)).unwrap(),
            Rate::new(dec!(0.07)).unwrap(),
            Rate::new(dec!(0.006)).unwrap(),
            money(dec!(37000)),
            dec!(84.3),
        )
        .unwrap()
    }

    #[test]
    fn salary_below_the_ceiling_withholds_on_the_gross() {
        let w = Withholding::compute(money(dec!(800000)), &params());

        assert_eq!(w.taxable_base, money(dec!(800000)));
        assert_eq!(w.pension, money(dec!(80000)));
        assert_eq!(w.health, money(dec!(56000)));
        assert_eq!(w.unemployment, money(dec!(4800)));
        assert_eq!(w.total_discounts(), money(dec!(140800)));
        assert_eq!(w.net_salary(), money(dec!(659200)));
    }

    #[test]
    fn salary_above_the_ceiling_withholds_on_the_capped_base() {
        let p = params();
        assert_eq!(p.taxable_ceiling(), money(dec!(3119100)));

        let w = Withholding::compute(money(dec!(5000000)), &p);
        assert_eq!(w.taxable_base, money(dec!(3119100)));
        assert_eq!(w.pension, money(dec!(311910)));
        assert_eq!(w.health, money(dec!(218337)));
        assert_eq!(w.unemployment, money(dec!(18714.6)));
        assert_eq!(w.net_salary(), money(dec!(4451038.4)));
    }

    #[test]
    fn salary_exactly_at_the_ceiling_is_not_reduced() {
        let p = params();
        let w = Withholding::compute(p.taxable_ceiling(), &p);
        assert_eq!(w.taxable_base, p.taxable_ceiling());
    }

    #[test]
    fn zero_uf_value_is_rejected() {
        let err = PayrollParameters::new(
            Rate::new(dec!(0.10)).unwrap(),
            Rate::new(dec!(0.07)).unwrap(),
            Rate::new(dec!(0.006)).unwrap(),
            Money::zero(),
            dec!(84.3),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn combined_share_of_one_or_more_is_rejected() {
        let err = PayrollParameters::new(
            Rate::new(dec!(0.5)).unwrap(),
            Rate::new(dec!(0.4)).unwrap(),
            Rate::new(dec!(0.1)).unwrap(),
            money(dec!(37000)),
            dec!(84.3),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: net + discounts reassemble the gross exactly, for any
        /// gross salary, capped or not.
        #[test]
        fn net_plus_discounts_equals_gross(gross in 0i64..20_000_000) {
            let w = Withholding::compute(money(Decimal::from(gross)), &params());
            prop_assert_eq!(w.net_salary() + w.total_discounts(), w.gross_salary);
        }

        /// Property: no single discount ever exceeds its rate applied to the
        /// ceiling.
        #[test]
        fn discounts_are_bounded_by_the_ceiling(gross in 0i64..50_000_000) {
            let p = params();
            let w = Withholding::compute(money(Decimal::from(gross)), &p);
            prop_assert!(w.pension <= p.taxable_ceiling() * p.afp_rate());
            prop_assert!(w.health <= p.taxable_ceiling() * p.health_rate());
            prop_assert!(w.unemployment <= p.taxable_ceiling() * p.unemployment_rate());
        }
    }
}
