//! Interactive text menu over the monkey catalog.
//!
//! [`MonkeyConsole`] reads choices line by line from any [`BufRead`] and
//! writes rendered screens to any [`Write`], so the binary drives it with
//! stdin/stdout and tests drive it with in-memory buffers.

mod screens;

use crate::catalog::services::MonkeyCatalog;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;

/// Number of name suggestions offered after a failed lookup.
const SUGGESTION_LIMIT: usize = 3;

/// Number of locations listed on the statistics screen.
const TOP_LOCATIONS: usize = 5;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A screen template failed to render.
    #[error("failed to render console screen: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: list every monkey.
    ListAll,
    /// `2`: look up a monkey by name.
    FindByName,
    /// `3`: pick a random monkey.
    Random,
    /// `4`: show catalog statistics.
    Statistics,
    /// `5`: leave the application.
    Exit,
}

impl MenuChoice {
    /// Parses a menu line, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::ListAll),
            "2" => Some(Self::FindByName),
            "3" => Some(Self::Random),
            "4" => Some(Self::Statistics),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu loop bound to a catalog and an input/output pair.
pub struct MonkeyConsole<I, O>
where
    I: BufRead,
    O: Write,
{
    catalog: Arc<MonkeyCatalog>,
    input: I,
    output: O,
}

impl<I, O> MonkeyConsole<I, O>
where
    I: BufRead,
    O: Write,
{
    /// Creates a console reading from `input` and writing to `output`.
    #[must_use]
    pub const fn new(catalog: Arc<MonkeyCatalog>, input: I, output: O) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Consumes the console and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs the menu until the user chooses exit or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] when input or output fails and
    /// [`ConsoleError::Template`] when a screen cannot be rendered.
    pub fn run(&mut self) -> ConsoleResult<()> {
        let welcome = screens::welcome(self.catalog.count())?;
        self.show(&welcome)?;

        loop {
            let menu = screens::menu()?;
            self.show(&menu)?;
            let Some(line) = self.prompt("Enter your choice (1-5): ")? else {
                tracing::debug!("console input closed");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::debug!(input = line.as_str(), "invalid menu choice");
                self.show("Invalid choice! Please enter 1, 2, 3, 4, or 5.")?;
                continue;
            };
            tracing::debug!(?choice, "menu choice");

            match choice {
                MenuChoice::ListAll => self.list_all()?,
                MenuChoice::FindByName => {
                    if !self.find_by_name()? {
                        break;
                    }
                }
                MenuChoice::Random => self.random()?,
                MenuChoice::Statistics => self.statistics()?,
                MenuChoice::Exit => break,
            }
        }

        self.show("Thanks for using Monkey App! See you later!")
    }

    fn list_all(&mut self) -> ConsoleResult<()> {
        let screen = screens::list(self.catalog.all())?;
        self.show(&screen)
    }

    /// Returns `false` when input ended before a name was entered.
    fn find_by_name(&mut self) -> ConsoleResult<bool> {
        let Some(query) = self.prompt("Enter monkey name: ")? else {
            return Ok(false);
        };
        let screen = if query.trim().is_empty() {
            "Please enter a valid monkey name.".to_owned()
        } else {
            self.lookup(&query)?
        };
        self.show(&screen)?;
        Ok(true)
    }

    fn lookup(&self, query: &str) -> ConsoleResult<String> {
        if let Some(record) = self.catalog.find_by_name(query) {
            return Ok(screens::details(record)?);
        }
        let suggestions = self.catalog.suggest_names(query, SUGGESTION_LIMIT);
        Ok(screens::not_found(query, &suggestions)?)
    }

    fn random(&mut self) -> ConsoleResult<()> {
        let Some(record) = self.catalog.random() else {
            return self.show("No monkeys available.");
        };
        let screen = screens::random(record, self.catalog.random_access_count())?;
        self.show(&screen)
    }

    fn statistics(&mut self) -> ConsoleResult<()> {
        let screen = screens::statistics(
            &self.catalog.statistics(),
            &self.catalog.location_distribution(TOP_LOCATIONS),
        )?;
        self.show(&screen)
    }

    fn show(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{text}")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Writes `label` without a newline and reads one line. `None` at end of
    /// input.
    fn prompt(&mut self, label: &str) -> ConsoleResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
