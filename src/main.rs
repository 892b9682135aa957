/// Main entry point for the Solana MCP server
///
/// This file loads configuration, sets up logging, and starts the MCP server.
/// The server listens for JSON-RPC requests over stdin/stdout following the
/// MCP protocol, so logs must never go to stdout.

use clap::Parser;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};

use solana_mcp_server::config::{self, Config};
use solana_mcp_server::SolanaMcpServer;

/// Command line arguments for the Solana MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Environment file to load before reading configuration
    /// If not provided, `.env` is looked up in the usual places
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Network to use (mainnet, devnet, testnet), overriding DEFAULT_NETWORK
    #[arg(long)]
    network: Option<String>,

    /// Print the effective configuration and any problems, then exit
    #[arg(long)]
    check_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if args.verbose {
        "trace".to_string()
    } else if args.debug {
        "debug".to_string()
    } else {
        config.logging.level.to_lowercase()
    };
    let filter = format!("solana_mcp_server={}", log_level);

    match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr) // Send logs to stderr, not stdout
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_file = config::load_env_file(args.env_file.as_deref())?;

    let mut config = Config::from_env();
    if let Some(network) = &args.network {
        config = config.with_network(network);
    }

    init_logging(&args, &config)?;

    info!("Starting Solana MCP server");
    if let Some(path) = env_file {
        info!("Loaded environment from {}", path.display());
    }

    let issues = config.validate();
    for issue in &issues {
        warn!("Configuration issue: {}", issue);
    }

    if args.check_config {
        println!("{}", serde_json::to_string_pretty(&config.summary())?);
        if issues.is_empty() {
            println!("Configuration OK");
            return Ok(());
        }
        for issue in &issues {
            println!("- {}", issue);
        }
        std::process::exit(1);
    }

    info!(
        "Network: {} ({})",
        config.current_network,
        config.get_rpc_url(None)
    );

    let server = SolanaMcpServer::new(config)?;

    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Solana MCP server shutdown complete");
    Ok(())
}
