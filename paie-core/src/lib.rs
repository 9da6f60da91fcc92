pub mod calculations;
pub mod models;
pub mod simulate;

pub use models::*;
pub use simulate::{SimulateError, SimulationRequest, simulate_pay};
