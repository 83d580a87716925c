//! SkyRoute application binary - composition root.
//!
//! 1. Load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the travel orchestrator over the mock inventory and reservations
//! 4. Run the user turns given on the command line, or the built-in demo

mod cli;

use std::sync::Arc;

use clap::Parser;

use skyroute_chat::TravelOrchestrator;
use skyroute_core::SkyrouteConfig;
use skyroute_tools::{MockFlightInventory, MockReservationService};

use cli::CliArgs;

/// Demo conversation: search, book by carrier, then switch to the cheapest.
const DEMO_TURNS: [&str; 3] = [
    "Find me flights from London to Paris for tomorrow.",
    "Actually, book the Lufthansa one for Robin.",
    "Wait, cancel that thought. Book the cheapest option instead for Robin.",
];

const RULE: &str = "============================================================";

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // Config. Loaded before tracing so the config level can seed the filter.
    let config_file = args.resolve_config_path();
    let loaded = SkyrouteConfig::load(&config_file);
    let config_level = match &loaded {
        Ok(config) => config.general.log_level.clone(),
        Err(_) => SkyrouteConfig::default().general.log_level,
    };

    // Tracing.
    let level = args.resolve_log_level(&config_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting SkyRoute v{}", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => {
            tracing::info!(path = %config_file.display(), "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = %config_file.display(),
                error = %e,
                "Failed to load config. Using defaults."
            );
            SkyrouteConfig::default()
        }
    };

    // Orchestrator.
    let mut orchestrator = match TravelOrchestrator::from_config(
        &config,
        Arc::new(MockFlightInventory),
        Arc::new(MockReservationService),
    ) {
        Ok(o) => o,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start travel agent");
            std::process::exit(1);
        }
    };

    let turns: Vec<String> = if args.turns.is_empty() {
        DEMO_TURNS.iter().map(|t| t.to_string()).collect()
    } else {
        args.turns
    };

    println!("{RULE}");
    println!("SkyRoute travel agent session");
    println!("{RULE}");

    for (i, turn) in turns.iter().enumerate() {
        let n = i + 1;
        println!("\n[Turn {n}] User: {turn}");
        match orchestrator.handle_request(turn).await {
            Ok(reply) => println!("[Turn {n}] Agent: {reply}"),
            Err(e) => tracing::error!(turn = n, error = %e, "Turn failed"),
        }
    }

    println!("\n{RULE}");
    println!("Session ended.");
    println!("{RULE}");
}
