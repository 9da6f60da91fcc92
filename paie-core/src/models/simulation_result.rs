use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ContributionRates, SimulationInput};

/// Employee-side withholdings, each rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeContributions {
    pub cnss_employee: Decimal,
    pub amo_employee: Decimal,
    pub cimr_employee: Decimal,
    pub igr: Decimal,
    pub professional_tax: Decimal,
    /// Caller-supplied flat deductions, passed through.
    pub other: Decimal,
    pub total: Decimal,
}

/// Employer-side costs. Informational only: not deducted from net salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    pub cnss_employer: Decimal,
    pub amo_employer: Decimal,
    pub cimr_employer: Decimal,
    pub total: Decimal,
}

/// The full breakdown produced by one payroll simulation.
///
/// Echoes the normalized inputs and the resolved rate table so a caller can
/// render the result without re-reading its own request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub inputs: SimulationInput,
    pub rates: ContributionRates,
    pub overtime_amount: Decimal,
    pub gross_with_overtime: Decimal,
    pub employee_contributions: EmployeeContributions,
    pub employer_contributions: EmployerContributions,
    pub net_salary: Decimal,
}
