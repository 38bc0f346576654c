//! # Stockpad Entry Point
//!
//! Parses arguments, runs one command and maps the outcome to an exit code.
//! Results go to stdout; warnings and errors go to stderr, except that with
//! `--json` an error is also printed to stdout as a JSON object.

use clap::Parser;
use std::process::ExitCode;

use stockpad_cli::commands::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match stockpad_cli::run(cli).await {
        Ok(output) => {
            if !output.stdout.is_empty() {
                println!("{}", output.stdout);
            }
            for warning in &output.warnings {
                eprintln!("warning: {}", warning);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if json {
                if let Ok(body) = serde_json::to_string(&err) {
                    println!("{}", body);
                }
            }
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
