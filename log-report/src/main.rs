mod analyzer;
mod config;
mod models;
mod parser;
mod report;

use std::{fs, io, path::PathBuf, process::ExitCode};

use analyzer::Analyzer;
use clap::Parser;
use config::{Config, MalformedPolicy, OutputTarget};
use derive_more::{Display, Error};
use parser::ParseError;
use report::{LineCounters, Report};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Generate a JSON report from a web access log", long_about = None)]
struct Args {
    /// Path to the JSON configuration file.
    config: PathBuf,
}

#[derive(Debug, Display, Error)]
enum RunError {
    #[display("cannot read log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[display("malformed log line {line_number}: {source}")]
    Malformed {
        line_number: usize,
        source: ParseError,
    },
    #[display("cannot render report: {_0}")]
    Render(serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading file or configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(rendered) => {
            match config.output {
                OutputTarget::Stdout => println!("{rendered}"),
            }
            ExitCode::SUCCESS
        }
        Err(e @ RunError::LogFile { .. }) => {
            eprintln!("Error reading file or configuration: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("An error occurred during analysis: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<String, RunError> {
    let text = fs::read_to_string(&config.log_file).map_err(|source| RunError::LogFile {
        path: config.log_file.clone(),
        source,
    })?;

    let mut entries = Vec::new();
    let mut total = 0;
    let mut skipped = 0;
    for (index, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        total += 1;
        match parser::parse_line(line) {
            Ok(entry) => entries.push(entry),
            Err(source) => match config.on_malformed {
                MalformedPolicy::Skip => {
                    warn!(line_number = index + 1, error = %source, "skipping malformed line");
                    skipped += 1;
                }
                MalformedPolicy::Fail => {
                    return Err(RunError::Malformed {
                        line_number: index + 1,
                        source,
                    });
                }
            },
        }
    }

    let analyzer = Analyzer::new(&entries);
    let report = Report::new(
        analyzer.top_ips(config.top_ip_count),
        analyzer.status_counts(),
        &config.user_agent_filter,
        analyzer.user_agent_hits(&config.user_agent_filter),
        LineCounters {
            total,
            parsed: entries.len(),
            skipped,
        },
    );
    report.to_json().map_err(RunError::Render)
}
