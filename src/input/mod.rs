//! Input adapters: translate what the user typed into parameters and
//! navigation commands.

pub mod cli;
