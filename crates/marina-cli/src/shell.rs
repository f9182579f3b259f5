//! Line-oriented interactive menu.
//!
//! The shell reads commands from any [`BufRead`] and writes to any
//! [`Write`], so sessions can be driven from tests with in-memory buffers.
//! A command is chosen by the first character of the first word on a line.
//! Text after that word is used as the command's argument; when there is
//! none, the shell prompts for it.

use std::io::{self, BufRead, Write};

use marina_core::{BoatRegistry, RegistryError};
use marina_model::{format_amount, parse_amount};
use tracing::{debug, info, warn};

use crate::inventory::render_inventory;

pub const WELCOME: &str = "Welcome to the Boat Management System";
pub const MENU_PROMPT: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
pub const ADD_PROMPT: &str = "Please enter the boat data in CSV format                 : ";
pub const NAME_PROMPT: &str = "Please enter the boat name                               : ";
pub const AMOUNT_PROMPT: &str = "Please enter the amount to be paid                       : ";
pub const GOODBYE: &str = "Exiting the Boat Management System";

/// Menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
}

impl Command {
    /// Select a command by the first character of `word`, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.chars().next()?.to_ascii_lowercase() {
            'i' => Some(Command::Inventory),
            'a' => Some(Command::Add),
            'r' => Some(Command::Remove),
            'p' => Some(Command::Payment),
            'm' => Some(Command::Month),
            'x' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Interactive session over a registry.
pub struct Shell<R, W> {
    registry: BoatRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: BoatRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Hand the registry back once the session is over.
    pub fn into_registry(self) -> BoatRegistry {
        self.registry
    }

    /// Run until the user exits or input ends.
    ///
    /// Only output failures are returned; a failed read ends the session
    /// like end of input does.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output, "{}", "-".repeat(WELCOME.len()))?;
        writeln!(self.output)?;

        loop {
            self.prompt(MENU_PROMPT)?;
            let Some(line) = self.read_line() else {
                break;
            };
            let line = line.trim();
            let Some(word) = line.split_whitespace().next() else {
                continue;
            };
            let argument = line[word.len()..].trim();
            match Command::from_word(word) {
                Some(Command::Inventory) => self.inventory()?,
                Some(Command::Add) => self.add(argument)?,
                Some(Command::Remove) => self.remove(argument)?,
                Some(Command::Payment) => self.payment(argument)?,
                Some(Command::Month) => self.month(),
                Some(Command::Exit) => break,
                None => writeln!(self.output, "Invalid option {word}")?,
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()
    }

    fn inventory(&mut self) -> io::Result<()> {
        for line in render_inventory(&self.registry) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn add(&mut self, argument: &str) -> io::Result<()> {
        let Some(line) = self.argument_or_prompt(argument, ADD_PROMPT)? else {
            return Ok(());
        };
        match self.registry.parse_and_add(&line) {
            Ok(()) => info!(boats = self.registry.len(), "boat added from console"),
            Err(RegistryError::CapacityExceeded { .. }) => {
                writeln!(self.output, "Marina is full, cannot add more boats.")?;
            }
            Err(error) => writeln!(self.output, "{}", capitalize(&error.to_string()))?,
        }
        Ok(())
    }

    fn remove(&mut self, argument: &str) -> io::Result<()> {
        let Some(name) = self.argument_or_prompt(argument, NAME_PROMPT)? else {
            return Ok(());
        };
        if self.registry.remove(&name).is_err() {
            writeln!(self.output, "No boat with that name")?;
        }
        Ok(())
    }

    fn payment(&mut self, argument: &str) -> io::Result<()> {
        let Some(name) = self.argument_or_prompt(argument, NAME_PROMPT)? else {
            return Ok(());
        };
        if self.registry.find(&name).is_none() {
            return writeln!(self.output, "No boat with that name");
        }
        let Some(amount_text) = self.argument_or_prompt("", AMOUNT_PROMPT)? else {
            return Ok(());
        };
        let amount = match parse_amount(&amount_text) {
            Ok(amount) => amount,
            Err(error) => {
                debug!(%error, "payment amount rejected");
                return writeln!(self.output, "Invalid amount '{amount_text}'");
            }
        };
        match self.registry.apply_payment(&name, amount) {
            Ok(_) => Ok(()),
            Err(RegistryError::Overpayment { owed, .. }) => writeln!(
                self.output,
                "That is more than the amount owed, ${}",
                format_amount(owed)
            ),
            Err(RegistryError::NegativePayment { .. }) => {
                writeln!(self.output, "Payment amount cannot be negative")
            }
            Err(_) => writeln!(self.output, "No boat with that name"),
        }
    }

    fn month(&mut self) {
        let total = self.registry.accrue_monthly_charges();
        info!(%total, "monthly charges applied");
    }

    /// Use `argument` when present, otherwise prompt and read a line.
    ///
    /// `None` means input ended at the prompt.
    fn argument_or_prompt(&mut self, argument: &str, prompt: &str) -> io::Result<Option<String>> {
        if !argument.is_empty() {
            return Ok(Some(argument.to_string()));
        }
        self.prompt(prompt)?;
        Ok(self.read_line().map(|line| line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(error) => {
                warn!(%error, "failed to read console input");
                None
            }
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_use_first_character() {
        assert_eq!(Command::from_word("i"), Some(Command::Inventory));
        assert_eq!(Command::from_word("Inventory"), Some(Command::Inventory));
        assert_eq!(Command::from_word("ADD"), Some(Command::Add));
        assert_eq!(Command::from_word("r"), Some(Command::Remove));
        assert_eq!(Command::from_word("Pay"), Some(Command::Payment));
        assert_eq!(Command::from_word("month"), Some(Command::Month));
        assert_eq!(Command::from_word("X"), Some(Command::Exit));
        assert_eq!(Command::from_word("quit"), None);
        assert_eq!(Command::from_word(""), None);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("invalid boat data"), "Invalid boat data");
        assert_eq!(capitalize(""), "");
    }
}
