//! Interactive investment calculator
//!
//! Prompts for the investment parameters, then prints monthly projections
//! with and without the recurring deposit. Passing all four parameters as
//! flags skips the prompts.

use anyhow::{bail, Context, Result};
use clap::Parser;
use investment_calculator::{run_session, ConsoleSource, FixedSource, SimulationParameters};
use std::io;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial investment amount
    #[arg(long, allow_negative_numbers = true)]
    initial_amount: Option<f64>,

    /// Deposit added at the start of every month
    #[arg(long, allow_negative_numbers = true)]
    monthly_deposit: Option<f64>,

    /// Annual interest as a percentage (5 for 5%)
    #[arg(long, allow_negative_numbers = true)]
    annual_rate: Option<f64>,

    /// Number of years to project
    #[arg(long, allow_negative_numbers = true)]
    years: Option<i32>,
}

impl Args {
    fn fixed_parameters(&self) -> Result<Option<SimulationParameters>> {
        match (self.initial_amount, self.monthly_deposit, self.annual_rate, self.years) {
            (None, None, None, None) => Ok(None),
            (Some(initial_amount), Some(monthly_deposit), Some(rate), Some(years)) => {
                let params = SimulationParameters {
                    initial_amount,
                    monthly_deposit,
                    annual_interest_rate_percent: rate,
                    number_of_years: years,
                }
                .validate()?;
                Ok(Some(params))
            }
            _ => bail!(
                "--initial-amount, --monthly-deposit, --annual-rate and --years \
                 must be given together"
            ),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut out = io::stdout().lock();

    match args.fixed_parameters()? {
        Some(params) => {
            log::info!("Running with parameters from the command line");
            run_session(&mut FixedSource(params), &mut out)
        }
        None => {
            let mut console = ConsoleSource::new(io::stdin().lock(), io::stdout());
            run_session(&mut console, &mut out)
        }
    }
    .context("investment calculator failed")?;

    Ok(())
}
