//! Request-level entry point for payroll simulations.
//!
//! This is the boundary a transport layer (an HTTP handler, the CLI) calls
//! with a raw JSON body. It enforces the caller-side contract (required
//! fields present and non-empty), deserializes and normalizes the input,
//! resolves the contribution rates and runs the simulator. Everything past
//! this point is pure computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::PayrollSimulator;
use crate::models::{ContributionRates, RateOverrides, SimulationInput, SimulationResult};

/// Errors surfaced by [`simulate_pay`].
#[derive(Debug, Error)]
pub enum SimulateError {
    /// A required field is absent, `null`, or an empty string. A transport
    /// layer should answer this with a client error.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The body (or its `rates` object) does not deserialize into the
    /// expected shape, e.g. a non-numeric value in a monetary field.
    #[error("invalid simulation request: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// A raw simulation request as received from a caller.
///
/// Every field is optional at the serde level; [`simulate_pay`] rejects
/// requests whose `employee_id` or `gross_salary` is missing before
/// normalization fills the remaining defaults. Unrecognized keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationRequest {
    pub employee_id: Value,
    pub gross_salary: Option<Decimal>,
    pub overtime_hours: Option<Decimal>,
    pub overtime_rate: Option<Decimal>,
    pub bonuses: Option<Decimal>,
    pub allowances: Option<Decimal>,
    pub deductions: Option<Decimal>,
    pub rates: Option<RateOverrides>,
}

impl SimulationRequest {
    /// Applies the documented defaults to produce a [`SimulationInput`]:
    /// monetary fields fall back to zero, the overtime multiplier to 1.5.
    pub fn normalize(self) -> SimulationInput {
        SimulationInput {
            employee_id: self.employee_id,
            gross_salary: self.gross_salary.unwrap_or(Decimal::ZERO),
            overtime_hours: self.overtime_hours.unwrap_or(Decimal::ZERO),
            overtime_rate: self.overtime_rate.unwrap_or_else(|| Decimal::new(15, 1)),
            bonuses: self.bonuses.unwrap_or(Decimal::ZERO),
            allowances: self.allowances.unwrap_or(Decimal::ZERO),
            deductions: self.deductions.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Runs one payroll simulation from a raw JSON request body.
///
/// # Errors
///
/// Returns [`SimulateError::MissingField`] when `employee_id` or
/// `gross_salary` is absent or empty, and [`SimulateError::InvalidBody`]
/// when the body does not deserialize. All other inputs, including negative
/// or very large amounts, produce a defined result.
pub fn simulate_pay(body: &Value) -> Result<SimulationResult, SimulateError> {
    require_present(body, "employee_id")?;
    require_present(body, "gross_salary")?;

    let request: SimulationRequest = serde_json::from_value(body.clone())?;
    let rates = ContributionRates::resolve(request.rates.as_ref());
    let input = request.normalize();

    if input.gross_salary < Decimal::ZERO {
        warn!(gross_salary = %input.gross_salary, "negative gross salary accepted as-is");
    }
    debug!(employee_id = %input.employee_id, "computing payroll simulation");

    Ok(PayrollSimulator::new(rates).simulate(&input))
}

/// Rejects fields the caller must supply: absent, `null` and `""` all count
/// as missing.
fn require_present(
    body: &Value,
    field: &'static str,
) -> Result<(), SimulateError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(SimulateError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(SimulateError::MissingField(field)),
        Some(_) => Ok(()),
    }
}
