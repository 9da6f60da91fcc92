mod contribution_rates;
mod igr_bracket;
mod simulation_input;
mod simulation_result;

pub use contribution_rates::{ContributionRates, RateOverrides};
pub use igr_bracket::IgrBracket;
pub use simulation_input::SimulationInput;
pub use simulation_result::{EmployeeContributions, EmployerContributions, SimulationResult};
