//! Monthly compounding projection

use super::series::{MonthlyRecord, ProjectionSeries, Scenario};
use crate::params::SimulationParameters;
use log::{debug, trace};

/// Both scenarios projected from the same parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Projections {
    pub with_deposit: ProjectionSeries,
    pub without_deposit: ProjectionSeries,
}

/// Projects balances month by month for a fixed set of parameters
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: SimulationParameters,
}

impl ProjectionEngine {
    pub fn new(params: SimulationParameters) -> Self {
        Self { params }
    }

    /// Run both scenarios. Every call builds fresh series.
    pub fn project(&self) -> Projections {
        debug!(
            "Projecting {} months at monthly rate {:.6}",
            self.params.months(),
            self.params.monthly_rate()
        );

        Projections {
            with_deposit: self.project_scenario(Scenario::WithDeposit),
            without_deposit: self.project_scenario(Scenario::WithoutDeposit),
        }
    }

    /// Project a single scenario.
    ///
    /// The month's deposit, if the scenario has one, is credited before
    /// interest accrues, so it earns interest in the month it is made:
    ///
    /// ```text
    /// interest = (opening + deposit) * rate
    /// closing  = opening + deposit + interest
    /// ```
    ///
    /// Without a deposit the opening balance alone accrues interest.
    pub fn project_scenario(&self, scenario: Scenario) -> ProjectionSeries {
        let months = self.params.months();
        let rate = self.params.monthly_rate();
        let contribution = scenario.monthly_contribution(&self.params);

        let mut series = ProjectionSeries::with_capacity(scenario, months);
        let mut balance = self.params.initial_amount;

        for month in 1..=months {
            let funded = contribution.map_or(balance, |deposit| balance + deposit);
            let interest = funded * rate;
            let closing_balance = funded + interest;

            trace!(
                "{:?} month {}: opening={:.2} interest={:.2} closing={:.2}",
                scenario, month, balance, interest, closing_balance
            );

            series.records.push(MonthlyRecord {
                opening_amount: balance,
                interest,
                closing_balance,
            });
            balance = closing_balance;
        }

        series
    }
}

/// Project both scenarios for `params`
pub fn compute_projections(params: &SimulationParameters) -> Projections {
    ProjectionEngine::new(*params).project()
}
