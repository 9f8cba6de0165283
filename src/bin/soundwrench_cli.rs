use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use soundwrench::config::AppConfig;
use soundwrench::error::{log_analysis_error, log_history_error, ErrorCode};
use soundwrench::history::{HistoryEntry, HistoryLog};
use soundwrench::{decode, report, AnalysisError, AnalysisSession};

#[derive(Parser, Debug)]
#[command(
    name = "soundwrench_cli",
    about = "Heuristic vehicle sound diagnosis from short audio clips"
)]
struct Cli {
    /// Override path of the JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override path of the history log
    #[arg(long)]
    history_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a clip and append the result to the history log
    Analyze {
        file: PathBuf,
        /// Emit the full report as JSON instead of the text card
        #[arg(long)]
        json: bool,
        /// Skip recording the result to history
        #[arg(long)]
        no_history: bool,
    },
    /// Print the feature record for a clip without diagnosing it
    Features {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print recorded analyses, newest first
    History {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    soundwrench::init_logging();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli
        .config
        .map(AppConfig::load_from_file)
        .unwrap_or_else(AppConfig::load);

    let history_path = cli
        .history_file
        .unwrap_or_else(|| config.history.file.clone());
    let history = HistoryLog::new(history_path, config.history.max_entries);

    match cli.command {
        Commands::Analyze {
            file,
            json,
            no_history,
        } => run_analyze(&history, &file, json, no_history),
        Commands::Features { file, json } => run_features(&file, json),
        Commands::History { limit, json } => run_history(&history, limit, json),
    }
}

fn run_analyze(
    history: &HistoryLog,
    file: &PathBuf,
    json: bool,
    no_history: bool,
) -> Result<ExitCode> {
    let mut session = AnalysisSession::new();
    if let Err(err) = session.load_file(file) {
        return analysis_failure(err, "load");
    }

    let analysis = match session.analyze() {
        Ok(analysis) => analysis,
        Err(err) => return analysis_failure(err, "analyze"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", report::render_text(&analysis));
    }

    if !no_history {
        let entry = HistoryEntry::from_report(&analysis);
        if let Err(err) = history.append(entry) {
            // The diagnosis above stays valid even when recording it fails
            log_history_error(&err, "append");
            eprintln!("Warning: result not recorded: {}", err.message());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_features(file: &PathBuf, json: bool) -> Result<ExitCode> {
    let clip = match decode::decode_file(file) {
        Ok(clip) => clip,
        Err(err) => return analysis_failure(err, "decode"),
    };

    let features = match soundwrench::extract(&clip.samples, clip.duration_seconds) {
        Ok(features) => features,
        Err(err) => return analysis_failure(err, "extract"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&features)?);
    } else {
        println!("{}", report::render_features(&features));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_history(history: &HistoryLog, limit: Option<usize>, json: bool) -> Result<ExitCode> {
    let mut entries = history
        .load()
        .with_context(|| format!("reading history log {}", history.path().display()))?;

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No recorded analyses in {}", history.path().display());
    } else {
        for entry in &entries {
            println!("{}", report::render_history_entry(entry));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Report a terminal analysis condition: no retry, nothing recorded
fn analysis_failure(err: AnalysisError, context: &str) -> Result<ExitCode> {
    log_analysis_error(&err, context);
    eprintln!("{}", err.message());
    Ok(ExitCode::from(2))
}
