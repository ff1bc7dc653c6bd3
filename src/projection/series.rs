//! Monthly records and the series they form

use crate::params::SimulationParameters;

/// Upper bound on records reserved before projecting (100 years)
pub const MAX_RESERVED_MONTHS: usize = 1200;

/// Which deposit scenario a series was projected under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// The monthly deposit is credited at the start of each month
    WithDeposit,
    /// The initial amount compounds on its own
    WithoutDeposit,
}

impl Scenario {
    /// Amount credited at the start of every month, if any
    pub fn monthly_contribution(self, params: &SimulationParameters) -> Option<f64> {
        match self {
            Scenario::WithDeposit => Some(params.monthly_deposit),
            Scenario::WithoutDeposit => None,
        }
    }

    /// Report section title
    pub fn title(self) -> &'static str {
        match self {
            Scenario::WithDeposit => "Report With Additional Monthly Deposits",
            Scenario::WithoutDeposit => "Report Without Additional Monthly Deposits",
        }
    }
}

/// One month of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRecord {
    /// Balance carried in from the previous month
    pub opening_amount: f64,
    /// Interest earned during the month
    pub interest: f64,
    /// Balance carried into the next month
    pub closing_balance: f64,
}

/// Chronological monthly records for one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSeries {
    pub scenario: Scenario,
    pub records: Vec<MonthlyRecord>,
}

impl ProjectionSeries {
    /// Empty series with room for up to `months` records.
    ///
    /// At most [`MAX_RESERVED_MONTHS`] are reserved up front; longer horizons
    /// grow as they are projected and are bounded only by available memory.
    pub fn with_capacity(scenario: Scenario, months: usize) -> Self {
        Self {
            scenario,
            records: Vec::with_capacity(months.min(MAX_RESERVED_MONTHS)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Closing balance of the last month, if any month was projected
    pub fn final_balance(&self) -> Option<f64> {
        self.records.last().map(|r| r.closing_balance)
    }

    /// Records paired with their 1-based month number
    pub fn months(&self) -> impl Iterator<Item = (usize, &MonthlyRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }
}
