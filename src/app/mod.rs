//! Application glue module
//!
//! Configuration for the command line tool.

mod config;

pub use config::Config;
