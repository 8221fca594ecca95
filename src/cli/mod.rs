//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod hash;
pub mod init;
pub mod scan;
pub mod show;
pub mod token;

pub use args::{Cli, Commands};
