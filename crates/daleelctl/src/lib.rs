//! Daleel Control - command-line front end for the Daleel engine.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod output;
pub mod repl;
