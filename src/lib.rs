//! Investment Calculator - monthly compound-growth projections
//!
//! This library provides:
//! - Side-by-side projections with and without a recurring monthly deposit
//! - Fixed-width tabular reports of the projected balances
//! - Parameter sources for interactive and non-interactive runs

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use error::{CalculatorError, InputError};
pub use params::{ConsoleSource, FixedSource, ParameterSource, SimulationParameters};
pub use projection::{
    compute_projections, MonthlyRecord, ProjectionEngine, ProjectionSeries, Projections, Scenario,
};
pub use report::render_report;
pub use session::run_session;
