//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes collecting process arguments, parsing and dispatching command lines,
//! resolving which list a command targets, and the console used for prompts.

mod commands;
mod console;
mod resolver;

pub use commands::*;
pub use console::*;

use crate::models::Command;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// CLI tool for managing named lists stored in Redis
///
/// Flags are not parsed here: `-add`, `/add` and `--add` are all the `add` command,
/// so every argument is passed through to the dispatcher untouched.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Command followed by its arguments, e.g. `add todo buy,milk`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Renders the command table shown by `help`.
pub fn help_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Command", "Description"]);
    for command in Command::ALL {
        table.add_row(vec![command.keyword(), command.description()]);
    }
    table
}
