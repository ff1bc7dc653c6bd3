//! Text reports for projection results

mod table;

pub use table::{SeriesTable, MONEY_WIDTH, MONTH_WIDTH, RULE_WIDTH};

use crate::projection::ProjectionSeries;
use std::fmt;

pub const WELCOME: &str = "Welcome to the Airgead Banking Investment Calculator!";

const FAREWELL: &str = "Thank you for using the Airgead Banking Investment Calculator!";

const HEART: [&str; 11] = [
    "        ******       ******        ",
    "      **      **   **      **     ",
    "    **         ** **         **   ",
    "   **            *           **   ",
    "   **                        **   ",
    "    **                      **    ",
    "      **                  **      ",
    "        **              **        ",
    "           **        **           ",
    "              **   **              ",
    "                 *               ",
];

/// A title on its own line, preceded by a blank line and underlined with `=`
pub struct SectionHeader<'a>(pub &'a str);

impl fmt::Display for SectionHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "{}", "=".repeat(self.0.chars().count()))
    }
}

/// Both scenario tables, with-deposit first
pub struct ProjectionReport<'a> {
    pub with_deposit: &'a ProjectionSeries,
    pub without_deposit: &'a ProjectionSeries,
}

impl fmt::Display for ProjectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for series in [self.with_deposit, self.without_deposit] {
            write!(f, "{}", SectionHeader(series.scenario.title()))?;
            write!(f, "{}", SeriesTable(series))?;
        }
        Ok(())
    }
}

/// Render the with-deposit and without-deposit reports
pub fn render_report(
    with_deposit: &ProjectionSeries,
    without_deposit: &ProjectionSeries,
) -> String {
    ProjectionReport {
        with_deposit,
        without_deposit,
    }
    .to_string()
}

/// Closing message shown after the reports
pub struct Farewell;

impl fmt::Display for Farewell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{FAREWELL}")?;
        writeln!(f)?;
        for line in HEART {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
