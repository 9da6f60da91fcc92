use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized numeric inputs for one payroll simulation.
///
/// Built from a raw request by
/// [`SimulationRequest::normalize`](crate::simulate::SimulationRequest::normalize),
/// which fills the documented defaults; all fields are final once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Opaque caller identifier, echoed back in the result untouched.
    pub employee_id: Value,

    /// Monthly base gross salary in MAD.
    pub gross_salary: Decimal,

    pub overtime_hours: Decimal,

    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_rate: Decimal,

    pub bonuses: Decimal,
    pub allowances: Decimal,

    /// Flat employee-side deductions outside the statutory contributions.
    pub deductions: Decimal,
}
