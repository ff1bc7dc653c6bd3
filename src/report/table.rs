//! Fixed-width monthly table

use crate::projection::ProjectionSeries;
use std::fmt;

/// Width of the month column
pub const MONTH_WIDTH: usize = 10;
/// Width of each monetary column
pub const MONEY_WIDTH: usize = 15;
/// Length of the dashed rule under the column headers
pub const RULE_WIDTH: usize = 55;

/// Left-aligned table of a single series, amounts to two decimals
pub struct SeriesTable<'a>(pub &'a ProjectionSeries);

impl fmt::Display for SeriesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<mw$}{:<w$}{:<w$}{:<w$}",
            "Month",
            "Opening Amount",
            "Interest",
            "Closing Balance",
            mw = MONTH_WIDTH,
            w = MONEY_WIDTH,
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for (month, record) in self.0.months() {
            writeln!(
                f,
                "{:<mw$}{:<w$.2}{:<w$.2}{:<w$.2}",
                month,
                record.opening_amount,
                record.interest,
                record.closing_balance,
                mw = MONTH_WIDTH,
                w = MONEY_WIDTH,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{MonthlyRecord, Scenario};

    fn series(records: Vec<MonthlyRecord>) -> ProjectionSeries {
        ProjectionSeries {
            scenario: Scenario::WithoutDeposit,
            records,
        }
    }

    #[test]
    fn test_header_layout() {
        let table = SeriesTable(&series(Vec::new())).to_string();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Month     Opening Amount Interest       Closing Balance");
        assert_eq!(lines[1], "-".repeat(55));
    }

    #[test]
    fn test_row_padding() {
        let table = SeriesTable(&series(vec![MonthlyRecord {
            opening_amount: 1000.0,
            interest: 5.5,
            closing_balance: 1105.5,
        }]))
        .to_string();
        let row = table.lines().nth(2).unwrap();

        assert_eq!(row, "1         1000.00        5.50           1105.50        ");
        assert_eq!(row.len(), MONTH_WIDTH + 3 * MONEY_WIDTH);
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let table = SeriesTable(&series(vec![MonthlyRecord {
            opening_amount: 123_456_789_012.0,
            interest: 0.004,
            closing_balance: 123_456_789_012.0,
        }]))
        .to_string();
        let row = table.lines().nth(2).unwrap();

        assert!(row.starts_with("1         123456789012.00"));
        assert!(row.contains("0.00"));
    }

    #[test]
    fn test_rows_numbered_chronologically() {
        let records = (0..15)
            .map(|i| MonthlyRecord {
                opening_amount: i as f64,
                interest: 0.0,
                closing_balance: i as f64,
            })
            .collect();
        let table = SeriesTable(&series(records)).to_string();

        for (i, row) in table.lines().skip(2).enumerate() {
            let month: usize = row.split_whitespace().next().unwrap().parse().unwrap();
            assert_eq!(month, i + 1);
        }
    }
}
