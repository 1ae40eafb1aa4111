use std::net::SocketAddr;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::lobby::{RoomRegistry, SessionRegistry};
use common::{log, logger, warn_log};
use tictactoe_server::cleanup_task::CleanupTask;
use tictactoe_server::server_config::{DEFAULT_CONFIG_PATH, ServerConfig};
use tictactoe_server::web_server::{WebServerState, run_web_server};

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    let addr: SocketAddr = config.socket_addr()?;
    log!("Loaded config from {} (default difficulty: {})", args.config, config.default_difficulty);

    let room_registry = RoomRegistry::new();
    let session_registry = SessionRegistry::new(config.ai_name.clone());

    let cleanup_task = CleanupTask::new(
        room_registry.clone(),
        session_registry.clone(),
        config.cleanup.check_interval(),
        config.cleanup.inactivity_timeout(),
    );
    let cleanup_handle = tokio::spawn(async move {
        cleanup_task.run().await;
    });

    let state = WebServerState {
        room_registry,
        session_registry,
        default_difficulty: config.default_difficulty,
    };

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn_log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    run_web_server(state, addr, shutdown_signal).await?;
    cleanup_handle.abort();

    log!("Server shut down gracefully");

    Ok(())
}
