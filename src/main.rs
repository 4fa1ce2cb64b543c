use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use drone_relay::state::StateStore;
use drone_relay::web::Config;
use drone_relay::{ingest, sim, viewer, web};

#[derive(Parser)]
#[command(name = "drone-relay")]
#[command(about = "UDP-to-SSE relay for a drone simulation, with demo producer and viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay: UDP ingest plus web server
    Serve {
        /// Path to a YAML config file; defaults apply when omitted
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Run the demo physics producer against a relay
    Simulate {
        /// Relay ingest address
        #[arg(long, default_value = "127.0.0.1:8585")]
        target: String,
        /// Snapshot period in milliseconds
        #[arg(long, default_value_t = 10)]
        period_ms: u64,
    },
    /// Follow a relay's SSE stream in the terminal
    Watch {
        /// SSE endpoint URL
        #[arg(long, default_value = "http://127.0.0.1:8080/streaming")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Simulate { target, period_ms } => {
            match sim::run(&target, Duration::from_millis(period_ms.max(1))).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("producer failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Watch { url } => match viewer::watch::run(&url).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("watch failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match config_path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                log::error!("failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let store = StateStore::new();

    // The ingest task owns the only writing handle; a failed bind leaves the
    // broadcast path serving the default snapshot.
    let ingest_bind = config.ingest.bind.clone();
    let ingest_store = store.clone();
    tokio::spawn(async move {
        if let Err(e) = ingest::run(&ingest_bind, ingest_store).await {
            log::error!("udp ingest stopped: {}", e);
        }
    });

    match web::run_server(config, store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
