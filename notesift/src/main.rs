// src/main.rs
use anyhow::Result;
use clap::Parser;

use notesift::cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
