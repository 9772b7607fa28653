use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "matchlog", about = "Import a meeting-log Markdown export into the match-log sheet")]
struct Cli {
    /// Config file (defaults to ~/.config/matchlog/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Source document id; overrides `document_id` from the config.
    #[arg(long)]
    document_id: Option<String>,
    /// Destination spreadsheet id; overrides `spreadsheet_id` from the config.
    #[arg(long)]
    spreadsheet_id: Option<String>,
    /// 1-based first row to write; defaults to the first row after existing content.
    #[arg(long)]
    start_row: Option<usize>,
    /// Parse and print the records as JSON without writing the sheet.
    #[arg(long)]
    dry_run: bool,
    /// Write debug logs to /tmp/matchlog-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/matchlog-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("matchlog debug log started, tail -f /tmp/matchlog-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let mut config = matchlog_core::config::Config::load(cli.config.as_deref())?;
    if cli.document_id.is_some() {
        config.document_id = cli.document_id;
    }
    if cli.spreadsheet_id.is_some() {
        config.spreadsheet_id = cli.spreadsheet_id;
    }
    if cli.start_row.is_some() {
        config.sheet.start_row = cli.start_row;
    }

    let report = matchlog::run(&config, cli.dry_run)?;
    match report.start_row {
        None => println!("{}", serde_json::to_string_pretty(&report.records)?),
        Some(row) => tracing::info!(records = report.records.len(), start_row = row, "import finished"),
    }
    Ok(())
}
