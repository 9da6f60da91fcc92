//! Progressive IGR (Impôt Général sur le Revenu) calculation.
//!
//! This module evaluates the Moroccan progressive income-tax schedule against
//! an annual taxable income, returning the total tax owed and the blended
//! effective rate.
//!
//! # 2025 Schedule
//!
//! Annual taxable income in MAD; each marginal rate applies only to the slice
//! of income falling inside its bracket:
//!
//! | Bracket | Rate |
//! |------------------|------|
//! | 0 – 40 000       | 0 %  |
//! | 40 000 – 60 000  | 10 % |
//! | 60 000 – 80 000  | 20 % |
//! | 80 000 – 100 000 | 30 % |
//! | 100 000 – 180 000| 34 % |
//! | above 180 000    | 37 % |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paie_core::calculations::IgrCalculator;
//!
//! let calculator = IgrCalculator::default();
//! let assessment = calculator.assess(dec!(120000));
//!
//! // 0 + 2000 + 4000 + 6000 + 20000 * 0.34 = 18800
//! assert_eq!(assessment.total_tax, dec!(18800.00));
//! assert_eq!(assessment.effective_rate, dec!(0.1567));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{round_half_up, round_rate};
use crate::models::IgrBracket;

/// Outcome of one IGR assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgrAssessment {
    /// Total annual tax in MAD, rounded to two decimal places.
    pub total_tax: Decimal,

    /// `total_tax / annual_income` as a fraction, rounded to four decimal
    /// places. Zero when no income is taxable.
    pub effective_rate: Decimal,
}

/// Evaluator for a progressive marginal-rate schedule.
///
/// Holds an ordered bracket schedule (strictly increasing upper limits, the
/// last one unbounded) and walks it per assessment. The calculator is
/// read-only constant data; any number of assessments may run concurrently
/// against the same instance.
#[derive(Debug, Clone)]
pub struct IgrCalculator {
    brackets: Vec<IgrBracket>,
}

impl Default for IgrCalculator {
    fn default() -> Self {
        Self::mad_2025()
    }
}

impl IgrCalculator {
    /// Creates a calculator over the given bracket schedule.
    ///
    /// Brackets must be sorted by `upper_limit` in ascending order, with the
    /// final bracket's limit `None` so every income finds a bracket.
    pub fn new(brackets: Vec<IgrBracket>) -> Self {
        Self { brackets }
    }

    /// The fixed 2025 Moroccan IGR schedule.
    pub fn mad_2025() -> Self {
        Self::new(vec![
            IgrBracket {
                upper_limit: Some(Decimal::from(40_000)),
                rate: Decimal::ZERO,
            },
            IgrBracket {
                upper_limit: Some(Decimal::from(60_000)),
                rate: Decimal::new(10, 2),
            },
            IgrBracket {
                upper_limit: Some(Decimal::from(80_000)),
                rate: Decimal::new(20, 2),
            },
            IgrBracket {
                upper_limit: Some(Decimal::from(100_000)),
                rate: Decimal::new(30, 2),
            },
            IgrBracket {
                upper_limit: Some(Decimal::from(180_000)),
                rate: Decimal::new(34, 2),
            },
            IgrBracket {
                upper_limit: None,
                rate: Decimal::new(37, 2),
            },
        ])
    }

    /// Assesses the annual tax owed on `annual_income`.
    ///
    /// Non-positive incomes owe nothing and report a zero effective rate, so
    /// there is no negative tax and no division by zero. Otherwise each
    /// bracket taxes the slice of income between the previous limit and
    /// `min(annual_income, limit)` at its marginal rate; the walk stops once
    /// the income no longer reaches into the next bracket. Rounding happens
    /// once at the end, not per bracket.
    pub fn assess(&self, annual_income: Decimal) -> IgrAssessment {
        if annual_income <= Decimal::ZERO {
            return IgrAssessment {
                total_tax: Decimal::ZERO,
                effective_rate: Decimal::ZERO,
            };
        }

        let mut total_tax = Decimal::ZERO;
        let mut previous_limit = Decimal::ZERO;

        for bracket in &self.brackets {
            if annual_income <= previous_limit {
                break;
            }
            let taxed_up_to = match bracket.upper_limit {
                Some(limit) => annual_income.min(limit),
                None => annual_income,
            };
            total_tax += (taxed_up_to - previous_limit) * bracket.rate;
            match bracket.upper_limit {
                Some(limit) => previous_limit = limit,
                None => break,
            }
        }

        // Effective rate is derived from the unrounded total so the two
        // reported values stay consistent with each other.
        let effective_rate = total_tax / annual_income;

        IgrAssessment {
            total_tax: round_half_up(total_tax),
            effective_rate: round_rate(effective_rate),
        }
    }
}
