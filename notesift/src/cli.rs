// src/cli.rs
use anyhow::{Context as _, Result};
use clap::builder::PossibleValue;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::core::count::{CountPolicy, count_notes};
use crate::core::filter::filter_notes;
use crate::core::loader::{collect_json_files, load_notes, write_notes};
use crate::models::CountReport;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count notes and comments in scraped JSON exports
    Count {
        /// JSON file, or directory of JSON files counted as one corpus
        input: PathBuf,

        /// Counting mode: 'raw' counts every record, 'strict' applies the
        /// skip rules
        #[arg(short, long, value_enum, default_value = "strict")]
        mode: CountPolicy,

        /// Keyword filter applied in strict mode (case-insensitive)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Directories to skip when scanning (comma-separated)
        #[arg(short, long, default_value = ".git")]
        exclude: String,
    },

    /// Write a filtered copy of scraped JSON exports
    Filter {
        /// JSON file, or directory of JSON files
        input: PathBuf,

        /// Output file, or output directory when the input is a directory
        output: PathBuf,

        /// Keyword filter (case-insensitive)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Directories to skip when scanning (comma-separated)
        #[arg(short, long, default_value = ".git")]
        exclude: String,
    },
}

// Implement ValueEnum for CountPolicy to work with clap
impl ValueEnum for CountPolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Raw, Self::Strict]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Raw => PossibleValue::new("raw"),
            Self::Strict => PossibleValue::new("strict"),
        })
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Count {
            input,
            mode,
            keyword,
            exclude,
        } => {
            let exclude_dirs: Vec<&str> = exclude.split(',').collect();
            let files = collect_json_files(&input, &exclude_dirs)
                .with_context(|| format!("Failed to resolve input: {}", input.display()))?;

            let mut report = CountReport::new();
            for file in &files {
                let notes = load_notes(file)?;
                report.merge(&count_notes(&notes, mode, keyword.as_deref()));
            }
            println!("{report}");
        }
        Command::Filter {
            input,
            output,
            keyword,
            exclude,
        } => {
            let exclude_dirs: Vec<&str> = exclude.split(',').collect();
            let files = collect_json_files(&input, &exclude_dirs)
                .with_context(|| format!("Failed to resolve input: {}", input.display()))?;
            let batch = input.is_dir();

            for file in &files {
                let notes = load_notes(file)?;
                let filtered = filter_notes(&notes, keyword.as_deref());

                let target = if batch {
                    output.join(file_name(file)?)
                } else {
                    output.clone()
                };
                write_notes(&target, &filtered)?;

                println!("Filtered data written to: {}", target.display());
                if filtered.is_empty() {
                    println!("Warning: the filtered data is empty, no notes matched.");
                }
            }
        }
    }

    Ok(())
}

fn file_name(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name()
        .with_context(|| format!("Input has no file name: {}", path.display()))
}
