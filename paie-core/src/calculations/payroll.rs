//! Gross-to-net payroll simulation.
//!
//! This module implements the monthly salary breakdown used by the payroll
//! simulator: overtime pay, social-contribution withholdings, progressive
//! IGR and the resulting net salary, following Moroccan labor-law formulas.
//!
//! # Breakdown
//!
//! The simulation computes the following, in order:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross pay: base salary + bonuses + allowances |
//! | 2    | Overtime pay from the base-salary hourly rate |
//! | 3    | Employee CNSS / AMO / CIMR withholdings |
//! | 4    | Monthly IGR from the annualized taxable income |
//! | 5    | Professional tax and caller-supplied flat deductions |
//! | 6    | Net salary, plus employer-side costs for reference |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use serde_json::json;
//! use paie_core::calculations::PayrollSimulator;
//! use paie_core::models::{ContributionRates, SimulationInput};
//!
//! let simulator = PayrollSimulator::new(ContributionRates::default());
//! let input = SimulationInput {
//!     employee_id: json!(1),
//!     gross_salary: dec!(20000),
//!     overtime_hours: dec!(10),
//!     overtime_rate: dec!(1.5),
//!     bonuses: dec!(0),
//!     allowances: dec!(0),
//!     deductions: dec!(0),
//! };
//!
//! let result = simulator.simulate(&input);
//!
//! assert_eq!(result.overtime_amount, dec!(1730.80));
//! assert_eq!(result.gross_with_overtime, dec!(21730.80));
//! assert_eq!(result.net_salary, dec!(14803.20));
//! ```

use rust_decimal::Decimal;

use crate::calculations::IgrCalculator;
use crate::calculations::common::round_half_up;
use crate::models::{
    ContributionRates, EmployeeContributions, EmployerContributions, SimulationInput,
    SimulationResult,
};

/// Statutory monthly working hours in Morocco: 40 h/week × 52 weeks / 12.
fn standard_monthly_hours() -> Decimal {
    Decimal::new(17333, 2)
}

fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Calculator for the monthly gross-to-net salary breakdown.
///
/// Holds the resolved contribution rates and the IGR schedule. A simulator
/// is read-only after construction; [`simulate`](Self::simulate) is a pure
/// function of its input.
#[derive(Debug, Clone)]
pub struct PayrollSimulator {
    rates: ContributionRates,
    igr: IgrCalculator,
}

impl PayrollSimulator {
    /// Creates a simulator over the given rate table and the fixed IGR
    /// schedule.
    pub fn new(rates: ContributionRates) -> Self {
        Self {
            rates,
            igr: IgrCalculator::default(),
        }
    }

    /// Computes the full salary breakdown for one input.
    ///
    /// Total over any well-typed input: zero, negative and very large values
    /// all flow through arithmetically. Each withheld amount is rounded to
    /// two decimal places as it is computed; the totals sum those already
    /// rounded parts.
    pub fn simulate(&self, input: &SimulationInput) -> SimulationResult {
        let gross = input.gross_salary + input.bonuses + input.allowances;
        let overtime_amount = self.overtime_amount(input);
        // Kept unrounded for the withholding math below; the reported field
        // is rounded at assembly.
        let gross_with_overtime = gross + overtime_amount;

        let cnss_employee = self.withhold(gross_with_overtime, self.rates.cnss_employee);
        let amo_employee = self.withhold(gross_with_overtime, self.rates.amo_employee);
        let cimr_employee = self.withhold(gross_with_overtime, self.rates.cimr_employee);

        // IGR applies to gross minus the social contributions; professional
        // tax and flat deductions do not reduce the taxable base.
        let taxable_income = gross_with_overtime - cnss_employee - amo_employee - cimr_employee;
        let igr = self.monthly_igr(taxable_income);

        let professional_tax = self.withhold(gross_with_overtime, self.rates.professional_tax);
        let other = input.deductions;

        let total_deductions =
            cnss_employee + amo_employee + cimr_employee + igr + professional_tax + other;
        let net_salary = round_half_up(gross_with_overtime - total_deductions);

        let cnss_employer = self.withhold(gross_with_overtime, self.rates.cnss_employer);
        let amo_employer = self.withhold(gross_with_overtime, self.rates.amo_employer);
        let cimr_employer = self.withhold(gross_with_overtime, self.rates.cimr_employer);

        SimulationResult {
            inputs: input.clone(),
            rates: self.rates.clone(),
            overtime_amount,
            gross_with_overtime: round_half_up(gross_with_overtime),
            employee_contributions: EmployeeContributions {
                cnss_employee,
                amo_employee,
                cimr_employee,
                igr,
                professional_tax,
                other: round_half_up(other),
                total: round_half_up(total_deductions),
            },
            // The employer total is the plain sum of parts already carrying
            // two decimals, so it is not rounded again.
            employer_contributions: EmployerContributions {
                cnss_employer,
                amo_employer,
                cimr_employer,
                total: cnss_employer + amo_employer + cimr_employer,
            },
            net_salary,
        }
    }

    /// Overtime pay for the month, rounded to two decimal places.
    ///
    /// The hourly rate derives from the base salary only; bonuses and
    /// allowances do not raise it.
    fn overtime_amount(
        &self,
        input: &SimulationInput,
    ) -> Decimal {
        let hourly_rate = input.gross_salary / standard_monthly_hours();
        round_half_up(input.overtime_hours * hourly_rate * input.overtime_rate)
    }

    /// One withholding: `base * rate / 100`, rounded.
    fn withhold(
        &self,
        base: Decimal,
        rate_percent: Decimal,
    ) -> Decimal {
        round_half_up(base * rate_percent / Decimal::ONE_HUNDRED)
    }

    /// Monthly IGR: annualize the taxable income, assess the annual tax,
    /// bring it back to a month.
    fn monthly_igr(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let assessment = self.igr.assess(taxable_income * months_per_year());
        round_half_up(assessment.total_tax / months_per_year())
    }
}
