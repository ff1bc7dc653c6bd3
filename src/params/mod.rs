//! Simulation parameters and the sources that supply them

mod console;

pub use console::ConsoleSource;

use crate::error::InputError;

/// Months per year used for both the horizon and the monthly rate
pub const MONTHS_PER_YEAR: i64 = 12;

/// Inputs for a single projection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Starting balance, in currency units
    pub initial_amount: f64,

    /// Deposit credited at the start of every month in the with-deposit scenario
    pub monthly_deposit: f64,

    /// Nominal annual rate as a percentage (5.0 = 5%)
    pub annual_interest_rate_percent: f64,

    /// Projection horizon in whole years. Zero or negative yields no months.
    pub number_of_years: i32,
}

impl SimulationParameters {
    /// Number of monthly steps in the projection
    pub fn months(&self) -> usize {
        (i64::from(self.number_of_years) * MONTHS_PER_YEAR).max(0) as usize
    }

    /// Monthly rate as a fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
    }

    /// Reject non-finite amounts. Negative values and horizons pass through.
    pub fn validate(self) -> Result<Self, InputError> {
        let amounts = [
            ("initial amount", self.initial_amount),
            ("monthly deposit", self.monthly_deposit),
            ("annual interest", self.annual_interest_rate_percent),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }
        Ok(self)
    }
}

/// Anything that can hand the calculator a populated set of parameters
pub trait ParameterSource {
    /// Collect the four simulation inputs
    fn parameters(&mut self) -> Result<SimulationParameters, InputError>;

    /// Wait for the user to confirm before the report is shown
    fn acknowledge(&mut self) -> Result<(), InputError> {
        Ok(())
    }
}

/// Parameters known up front, e.g. from command line flags
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(pub SimulationParameters);

impl ParameterSource for FixedSource {
    fn parameters(&mut self) -> Result<SimulationParameters, InputError> {
        self.0.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(years: i32) -> SimulationParameters {
        SimulationParameters {
            initial_amount: 1000.0,
            monthly_deposit: 100.0,
            annual_interest_rate_percent: 6.0,
            number_of_years: years,
        }
    }

    #[test]
    fn test_months() {
        assert_eq!(params(1).months(), 12);
        assert_eq!(params(30).months(), 360);
        assert_eq!(params(0).months(), 0);
        assert_eq!(params(-3).months(), 0);
    }

    #[test]
    fn test_months_large_horizon_does_not_overflow() {
        assert_eq!(params(i32::MIN).months(), 0);
        assert_eq!(params(i32::MAX).months(), i32::MAX as usize * 12);
    }

    #[test]
    fn test_monthly_rate() {
        assert_relative_eq!(params(1).monthly_rate(), 0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_validate_accepts_negative_values() {
        let negative = SimulationParameters {
            initial_amount: -50.0,
            monthly_deposit: -1.0,
            annual_interest_rate_percent: -2.0,
            number_of_years: -1,
        };
        assert_eq!(negative.validate().unwrap(), negative);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let bad_initial = SimulationParameters { initial_amount: f64::INFINITY, ..params(1) };
        assert!(matches!(
            bad_initial.validate(),
            Err(InputError::NonFinite { field: "initial amount" })
        ));

        let bad_deposit = SimulationParameters { monthly_deposit: f64::NEG_INFINITY, ..params(1) };
        assert!(matches!(
            bad_deposit.validate(),
            Err(InputError::NonFinite { field: "monthly deposit" })
        ));

        let bad_rate = SimulationParameters { annual_interest_rate_percent: f64::NAN, ..params(1) };
        assert!(matches!(
            bad_rate.validate(),
            Err(InputError::NonFinite { field: "annual interest" })
        ));
    }

    #[test]
    fn test_fixed_source() {
        let mut source = FixedSource(params(2));
        assert_eq!(source.parameters().unwrap(), params(2));
        assert!(source.acknowledge().is_ok());
    }
}
