//! Binary crate for the `wunder` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Level-keyed, optionally colorized console output
//! - Human-friendly summary formatting

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod display;
mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
