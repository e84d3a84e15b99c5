//! Command line interface for Milozvuk.

pub mod args;
pub mod commands;
pub mod output;
