use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The contribution percentages applied during a payroll simulation.
///
/// Values are percentages, not fractions: `4.29` means 4.29 %. The table is
/// built once per simulation from the statutory defaults merged with any
/// caller-supplied [`RateOverrides`], and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    pub cnss_employee: Decimal,
    pub cnss_employer: Decimal,
    pub amo_employee: Decimal,
    pub amo_employer: Decimal,
    pub cimr_employee: Decimal,
    pub cimr_employer: Decimal,
    pub igr: Decimal,
    pub professional_tax: Decimal,
}

impl Default for ContributionRates {
    /// The 2025 statutory rates. CIMR is contractual; 2 % / 6 % is the common
    /// split. IGR defaults to zero because it is computed from the bracket
    /// schedule rather than a flat percentage, and professional tax is
    /// company-specific.
    fn default() -> Self {
        Self {
            cnss_employee: Decimal::new(429, 2),
            cnss_employer: Decimal::new(858, 2),
            amo_employee: Decimal::new(226, 2),
            amo_employer: Decimal::new(411, 2),
            cimr_employee: Decimal::new(2, 0),
            cimr_employer: Decimal::new(6, 0),
            igr: Decimal::ZERO,
            professional_tax: Decimal::ZERO,
        }
    }
}

impl ContributionRates {
    /// Merges caller-supplied overrides over the default table.
    ///
    /// Every override field that is `Some` replaces the corresponding
    /// default; `None` fields (absent or explicit `null` in the request)
    /// leave the default untouched.
    pub fn resolve(overrides: Option<&RateOverrides>) -> Self {
        let mut rates = Self::default();
        let Some(overrides) = overrides else {
            return rates;
        };

        if let Some(value) = overrides.cnss_employee {
            rates.cnss_employee = value;
        }
        if let Some(value) = overrides.cnss_employer {
            rates.cnss_employer = value;
        }
        if let Some(value) = overrides.amo_employee {
            rates.amo_employee = value;
        }
        if let Some(value) = overrides.amo_employer {
            rates.amo_employer = value;
        }
        if let Some(value) = overrides.cimr_employee {
            rates.cimr_employee = value;
        }
        if let Some(value) = overrides.cimr_employer {
            rates.cimr_employer = value;
        }
        if let Some(value) = overrides.igr {
            rates.igr = value;
        }
        if let Some(value) = overrides.professional_tax {
            rates.professional_tax = value;
        }

        rates
    }
}

/// Caller-supplied overrides for [`ContributionRates`].
///
/// Deserialized from the optional `rates` object of a simulation request.
/// Any subset of the fields may appear; unrecognized keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateOverrides {
    pub cnss_employee: Option<Decimal>,
    pub cnss_employer: Option<Decimal>,
    pub amo_employee: Option<Decimal>,
    pub amo_employer: Option<Decimal>,
    pub cimr_employee: Option<Decimal>,
    pub cimr_employer: Option<Decimal>,
    pub igr: Option<Decimal>,
    pub professional_tax: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_table_carries_statutory_rates() {
        let rates = ContributionRates::default();

        assert_eq!(rates.cnss_employee, dec!(4.29));
        assert_eq!(rates.cnss_employer, dec!(8.58));
        assert_eq!(rates.amo_employee, dec!(2.26));
        assert_eq!(rates.amo_employer, dec!(4.11));
        assert_eq!(rates.cimr_employee, dec!(2.0));
        assert_eq!(rates.cimr_employer, dec!(6.0));
        assert_eq!(rates.igr, dec!(0));
        assert_eq!(rates.professional_tax, dec!(0));
    }

    #[test]
    fn resolve_without_overrides_returns_defaults() {
        let rates = ContributionRates::resolve(None);

        assert_eq!(rates, ContributionRates::default());
    }

    #[test]
    fn resolve_replaces_only_overridden_fields() {
        let overrides = RateOverrides {
            cnss_employee: Some(dec!(5.0)),
            ..RateOverrides::default()
        };

        let rates = ContributionRates::resolve(Some(&overrides));

        assert_eq!(rates.cnss_employee, dec!(5.0));
        assert_eq!(
            ContributionRates {
                cnss_employee: dec!(4.29),
                ..rates
            },
            ContributionRates::default()
        );
    }

    #[test]
    fn resolve_accepts_zero_overrides() {
        let overrides = RateOverrides {
            cimr_employee: Some(dec!(0)),
            cimr_employer: Some(dec!(0)),
            ..RateOverrides::default()
        };

        let rates = ContributionRates::resolve(Some(&overrides));

        assert_eq!(rates.cimr_employee, dec!(0));
        assert_eq!(rates.cimr_employer, dec!(0));
    }

    #[test]
    fn overrides_ignore_unknown_keys() {
        let overrides: RateOverrides =
            serde_json::from_value(json!({"not_a_rate": 1.0})).unwrap();

        assert_eq!(overrides, RateOverrides::default());
        assert_eq!(
            ContributionRates::resolve(Some(&overrides)),
            ContributionRates::default()
        );
    }

    #[test]
    fn overrides_treat_null_as_keep_default() {
        let overrides: RateOverrides =
            serde_json::from_value(json!({"cnss_employee": null, "amo_employee": 3.5})).unwrap();

        let rates = ContributionRates::resolve(Some(&overrides));

        assert_eq!(rates.cnss_employee, dec!(4.29));
        assert_eq!(rates.amo_employee, dec!(3.5));
    }
}
