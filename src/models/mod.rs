//! Defines the data structures and models used throughout the application.
//!
//! Currently this is the command table and the shape of a parsed command line.

mod command;

pub use command::*;
