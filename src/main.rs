mod commands;
mod feed;
mod feed_source;
mod http;
mod merge;
mod store;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use feed_source::FeedSource;

/// Collect attributed writing from RSS/Atom feeds into a JSON file
#[derive(Parser)]
struct Args {
    /// JSON file holding the collected entries [env: WRITING_DATA]
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// JSON file replacing the built-in feed table [env: WRITING_FEEDS]
    #[arg(long, global = true)]
    feeds: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch feeds and merge new entries into the data file (default)
    Update,
    /// List the configured feeds
    Feeds,
}

const DEFAULT_DATA_FILE: &str = "data/writing.json";

/// Exit code telling the caller that the data file gained entries.
const EXIT_CHANGED: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn data_file(arg: Option<PathBuf>) -> PathBuf {
    arg.or_else(|| std::env::var("WRITING_DATA").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

fn feed_table(arg: Option<PathBuf>) -> anyhow::Result<Vec<FeedSource>> {
    match arg.or_else(|| std::env::var("WRITING_FEEDS").ok().map(PathBuf::from)) {
        Some(path) => feed_source::load(&path),
        None => Ok(feed_source::builtin()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stdout)
        .init();
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let sources = feed_table(args.feeds)?;
    match args.command.unwrap_or(Command::Update) {
        Command::Update => {
            let report = commands::update::cmd_update(&data_file(args.data), &sources)?;
            if report.added == 0 {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_CHANGED))
            }
        }
        Command::Feeds => {
            commands::feeds::cmd_feeds(&sources)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_to_update() {
        let args = Args::try_parse_from(["update-writing"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.data.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["update-writing", "feeds", "--feeds", "f.json"]).unwrap();
        assert!(matches!(args.command, Some(Command::Feeds)));
        assert_eq!(args.feeds, Some(PathBuf::from("f.json")));
    }

    #[test]
    fn test_explicit_data_flag_wins() {
        assert_eq!(
            data_file(Some(PathBuf::from("out/w.json"))),
            PathBuf::from("out/w.json")
        );
    }
}
