//! CLI entry point for the next-train tool.
//!
//! Provides subcommands for looking up station ids by name and for asking
//! when the next train on a line leaves a station.

use anyhow::Result;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use next_train::departures::fetch_next_departure;
use next_train::fetch::auth::ApiKey;
use next_train::fetch::{BasicClient, HttpClient};
use next_train::infra::transiter::{DEFAULT_ADDR, DEFAULT_SYSTEM, TransiterClient, TransiterConfig};
use next_train::output::{format_clock_time, format_countdown, write_station_table};
use next_train::selector::build_line_selector;
use next_train::stations::lookup_stations;
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "next_train")]
#[command(about = "Tells you when the next train is", long_about = None)]
struct Cli {
    /// Address of the Transiter server's API
    #[arg(short, long, global = true, env = "TRANSITER_ADDR", default_value = DEFAULT_ADDR)]
    addr: String,

    /// The transit system to query
    #[arg(short, long, global = true, env = "TRANSITER_SYSTEM", default_value = DEFAULT_SYSTEM)]
    system: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TRANSITER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Looks up the id of a station, e.g. `station-lookup Broadway Junction`
    StationLookup {
        /// Station name words
        #[arg(value_name = "NAME", required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Tells you when the next train is, e.g. `next-train -S R17 -l Q -d downtown`
    NextTrain {
        /// The station code to query
        #[arg(short = 'S', long)]
        station: String,

        /// The line to query
        #[arg(short, long)]
        line: String,

        /// The destination station code of the line
        #[arg(short = 'D', long)]
        destination: Option<String>,

        /// The direction of the train (Manhattan, Outbound, Uptown, Downtown, etc)
        #[arg(short, long)]
        direction: Option<String>,

        /// Print the time remaining until the next train instead of the clock time
        #[arg(long, default_value_t = false)]
        diff: bool,
    },
}

// One query per invocation; nothing runs in the background.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/next_train.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("next_train.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(log_filter(&env_directives("RUST_LOG"), LevelFilter::WARN));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(log_filter(&env_directives("RUST_LOG_JSON"), LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = TransiterConfig::new(&cli.addr, &cli.system)
        .with_timeout(Duration::from_secs(cli.timeout_secs))
        .with_api_key(std::env::var("TRANSITER_API_KEY").ok());

    let http = BasicClient::with_timeout(config.timeout)?;
    match &config.api_key {
        Some(key) => {
            let http = ApiKey::bearer(http, key)?;
            let client = TransiterClient::new(http, &config.addr, &config.system)?;
            run(cli.command, &client).await
        }
        None => {
            let client = TransiterClient::new(http, &config.addr, &config.system)?;
            run(cli.command, &client).await
        }
    }
}

fn env_directives(var: &str) -> String {
    std::env::var(var).unwrap_or_default()
}

/// Builds a layer filter from `directives`, falling back to `default` only
/// when no directive is given.
fn log_filter(directives: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives)
}

/// Dispatches a subcommand against the configured Transiter server.
#[tracing::instrument(skip_all, fields(system = client.system()))]
async fn run<C: HttpClient>(command: Commands, client: &TransiterClient<C>) -> Result<()> {
    match command {
        Commands::StationLookup { query } => {
            let query = query.join(" ");
            let stations = lookup_stations(client, &query).await?;
            info!(query = %query, count = stations.len(), "Stations found");
            write_station_table(std::io::stdout().lock(), &stations)?;
        }
        Commands::NextTrain {
            station,
            line,
            destination,
            direction,
            diff,
        } => {
            let selector =
                build_line_selector(client, &line, direction.as_deref(), destination.as_deref())
                    .await?;
            let departure = fetch_next_departure(client, &station, &selector).await?;

            if diff {
                println!("{}", format_countdown(departure, Utc::now()));
            } else {
                println!("{}", format_clock_time(&departure.with_timezone(&Local)));
            }
        }
    }

    Ok(())
}
