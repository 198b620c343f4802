// SPDX-FileCopyrightText: 2026 apstyle contributors
// SPDX-License-Identifier: MIT
//! apstyle CLI - checks Markdown links for AP style title case.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use similar::TextDiff;

use apstyle::config::{Config, ConfigError};
use apstyle::{Options, Violation, check, fix};

/// A Markdown linter that enforces AP style title case in link text and
/// link titles.
#[derive(Parser, Debug)]
#[command(name = "apstyle")]
#[command(version, about, long_about = None)]
struct Args {
    /// Markdown file(s) to check. Reads stdin when none are given and the
    /// configuration has no include patterns.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Rewrite non-conforming link text and titles in place.
    #[arg(short, long)]
    fix: bool,

    /// Print a unified diff of the fixes instead of applying them.
    #[arg(long)]
    diff: bool,

    /// Read input from stdin.
    #[arg(long)]
    stdin: bool,

    /// Configuration file to use instead of discovering .apstyle.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

struct FileOutcome {
    violations: Vec<Violation>,
    diff: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let options = config.to_options();

    let mut files = args.files.clone();
    if files.is_empty() && !args.stdin {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match config.collect_files(&base_dir) {
            Ok(collected) => files.extend(collected),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if args.stdin || files.is_empty() {
        return run_stdin(&args, &options);
    }

    let results: Vec<(PathBuf, Result<FileOutcome, io::Error>)> = files
        .par_iter()
        .map(|file| (file.clone(), process_file(file, &args, &options)))
        .collect();

    let mut all_clean = true;
    for (file, result) in results {
        match result {
            Ok(outcome) => {
                for violation in &outcome.violations {
                    println!(
                        "{}:{}:{}: {}",
                        file.display(),
                        violation.line,
                        violation.column,
                        violation.message
                    );
                }
                if let Some(diff) = outcome.diff {
                    print!("{}", diff);
                }
                if !outcome.violations.is_empty() {
                    all_clean = false;
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", file.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    if all_clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    if let Some(path) = &args.config {
        return Config::from_file(path);
    }
    let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(Config::discover(&start_dir)?
        .map(|(_, config)| config)
        .unwrap_or_default())
}

fn run_stdin(args: &Args, options: &Options) -> ExitCode {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading stdin: {}", e);
        return ExitCode::FAILURE;
    }

    if args.fix {
        print!("{}", fix(&input, options));
        return ExitCode::SUCCESS;
    }

    if args.diff {
        let output = fix(&input, options);
        if output != input {
            let diff = TextDiff::from_lines(input.as_str(), output.as_str());
            print!("{}", diff.unified_diff().header("stdin", "stdin (fixed)"));
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let violations = check(&input, options);
    for violation in &violations {
        println!(
            "stdin:{}:{}: {}",
            violation.line, violation.column, violation.message
        );
    }
    if violations.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn process_file(file: &Path, args: &Args, options: &Options) -> Result<FileOutcome, io::Error> {
    let input = fs::read_to_string(file)?;

    if args.fix {
        let output = fix(&input, options);
        if output != input {
            fs::write(file, &output)?;
        }
        // Report whatever a rewrite could not resolve.
        return Ok(FileOutcome {
            violations: check(&output, options),
            diff: None,
        });
    }

    let violations = check(&input, options);
    let diff = if args.diff {
        let output = fix(&input, options);
        (output != input).then(|| {
            TextDiff::from_lines(input.as_str(), output.as_str())
                .unified_diff()
                .header(
                    &format!("a/{}", file.display()),
                    &format!("b/{}", file.display()),
                )
                .to_string()
        })
    } else {
        None
    };

    Ok(FileOutcome { violations, diff })
}
