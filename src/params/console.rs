//! Interactive parameter collection over a line-oriented console

use super::{ParameterSource, SimulationParameters};
use crate::error::InputError;
use crate::report::SectionHeader;
use std::io::{BufRead, Write};
use std::str::FromStr;

const INPUT_HEADER: &str = "Please answer the questions provided!";
const PROMPT_INITIAL: &str = "What is your initial investment amount? ";
const PROMPT_DEPOSIT: &str = "What will be your monthly deposit? ";
const PROMPT_RATE: &str =
    "What is the annual interest? For example, if you had a 5% annual interest you would enter 5. ";
const PROMPT_YEARS: &str = "How many years would you like to calculate? ";
const PROMPT_CONTINUE: &str = "Press enter to generate report.";

/// Prompts on `output` and reads one answer per line from `input`
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the source, returning the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<(), InputError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask<T: FromStr>(&mut self, field: &'static str, text: &str) -> Result<T, InputError> {
        self.prompt(text)?;
        let line = self
            .read_line()?
            .ok_or(InputError::UnexpectedEof { field })?;
        let answer = line.trim();
        answer.parse().map_err(|_| InputError::InvalidNumber {
            field,
            value: answer.to_string(),
        })
    }
}

impl<R: BufRead, W: Write> ParameterSource for ConsoleSource<R, W> {
    fn parameters(&mut self) -> Result<SimulationParameters, InputError> {
        write!(self.output, "{}", SectionHeader(INPUT_HEADER))?;

        let initial_amount = self.ask("initial amount", PROMPT_INITIAL)?;
        let monthly_deposit = self.ask("monthly deposit", PROMPT_DEPOSIT)?;
        let annual_interest_rate_percent = self.ask("annual interest", PROMPT_RATE)?;
        let number_of_years = self.ask("number of years", PROMPT_YEARS)?;

        SimulationParameters {
            initial_amount,
            monthly_deposit,
            annual_interest_rate_percent,
            number_of_years,
        }
        .validate()
    }

    fn acknowledge(&mut self) -> Result<(), InputError> {
        self.prompt(PROMPT_CONTINUE)?;
        // Any line, including an empty one or end of input, counts as confirmation
        self.read_line()?;
        Ok(())
    }
}
