mod config;

use std::io;
use std::time::Duration;

use aqua_client::{ClientConfig, NodeClient};
use clap::Parser;
use config::AppConfig;
use log::info;

#[derive(Debug, Parser)]
#[command(name = "aquastatus")]
#[command(about = "Prints an Aquachain node's status banner", long_about = None)]
struct Cli {
    /// Node RPC endpoint URL (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long)]
    timeout: Option<u64>,

    /// Skip the admin namespace (datadir, node info)
    #[arg(long)]
    no_admin: bool,

    /// Save the effective settings as the new defaults
    #[arg(long)]
    save: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger with default level of 'warn' if RUST_LOG is not set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = rpc_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if cli.no_admin {
        config.probe_admin = false;
    }
    if cli.save {
        config.save()?;
        println!(
            "Saved configuration to {}",
            AppConfig::get_config_path()?.display()
        );
    }

    info!("querying {}", config.rpc_url);

    let client = NodeClient::connect(ClientConfig {
        url: config.rpc_url,
        timeout: Duration::from_secs(config.timeout_secs),
        probe_admin: config.probe_admin,
    })?;

    let mut stdout = io::stdout();
    aqua_client::print_welcome(&client, &mut stdout);

    Ok(())
}
