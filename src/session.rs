//! One interactive calculator run, start to finish

use crate::error::CalculatorError;
use crate::params::ParameterSource;
use crate::projection::compute_projections;
use crate::report::{render_report, Farewell, WELCOME};
use log::info;
use std::io::Write;

/// Greet, collect parameters, project both scenarios and print the reports
pub fn run_session<S, W>(source: &mut S, out: &mut W) -> Result<(), CalculatorError>
where
    S: ParameterSource + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{WELCOME}")?;
    out.flush()?;

    let params = source.parameters()?;
    info!(
        "Parameters: initial={:.2} deposit={:.2} rate={}% years={}",
        params.initial_amount,
        params.monthly_deposit,
        params.annual_interest_rate_percent,
        params.number_of_years
    );

    let projections = compute_projections(&params);
    if let (Some(with), Some(without)) = (
        projections.with_deposit.final_balance(),
        projections.without_deposit.final_balance(),
    ) {
        info!("Final balance: with deposits={with:.2}, without deposits={without:.2}");
    }

    source.acknowledge()?;

    write!(
        out,
        "{}",
        render_report(&projections.with_deposit, &projections.without_deposit)
    )?;
    write!(out, "{}", Farewell)?;
    out.flush()?;
    Ok(())
}
