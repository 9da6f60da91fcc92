//! Payroll calculation modules.
//!
//! This module holds the gross-to-net computation pipeline: shared rounding
//! helpers, the progressive IGR calculator, and the payroll simulator that
//! assembles the full salary breakdown.

pub mod common;
pub mod igr;
pub mod payroll;

pub use igr::{IgrAssessment, IgrCalculator};
pub use payroll::PayrollSimulator;
