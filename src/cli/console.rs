//! User-facing input and output.
//!
//! The dispatcher and resolver talk to a `Console` rather than to stdin/stdout,
//! so the interactive flows can be driven by a script in tests.

use crate::error::Result;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};

pub trait Console {
    /// Prints an informational line.
    fn say(&mut self, msg: &str);

    /// Prints a line the user should notice (invalid input, failed commands).
    fn warn(&mut self, msg: &str);

    /// Blocks until the user enters a line. Empty input is allowed.
    fn prompt(&mut self, msg: &str) -> Result<String>;
}

/// The real terminal.
#[derive(Default)]
pub struct Terminal;

impl Console for Terminal {
    fn say(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn warn(&mut self, msg: &str) {
        println!("{}", msg.yellow());
    }

    fn prompt(&mut self, msg: &str) -> Result<String> {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(msg)
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// A console fed from a fixed list of answers that records everything printed.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedConsole {
    answers: std::collections::VecDeque<String>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn say(&mut self, msg: &str) {
        self.output.push(msg.to_string());
    }

    fn warn(&mut self, msg: &str) {
        self.output.push(msg.to_string());
    }

    fn prompt(&mut self, msg: &str) -> Result<String> {
        self.prompts.push(msg.to_string());
        self.answers.pop_front().ok_or_else(|| {
            crate::error::AppError::Cli(format!("no scripted answer for prompt '{}'", msg))
        })
    }
}
