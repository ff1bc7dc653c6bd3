//! Projection engine for the with-deposit and without-deposit scenarios

mod engine;
mod series;

pub use engine::{compute_projections, ProjectionEngine, Projections};
pub use series::{MonthlyRecord, ProjectionSeries, Scenario, MAX_RESERVED_MONTHS};
