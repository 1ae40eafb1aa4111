use std::net::SocketAddr;
use std::time::Duration;

use common::config::Validate;
use common::games::tictactoe::Difficulty;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_server.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    pub check_interval_secs: u64,
    pub inactivity_timeout_secs: u64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 300,
            inactivity_timeout_secs: 3600,
        }
    }
}

impl CleanupConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub default_difficulty: Difficulty,
    pub ai_name: String,
    pub cleanup: CleanupConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            default_difficulty: Difficulty::Hard,
            ai_name: "Computer".to_string(),
            cleanup: CleanupConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.bind_address
            .parse()
            .map_err(|e| format!("Invalid bind address '{}': {}", self.bind_address, e))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr()?;
        if self.ai_name.trim().is_empty() {
            return Err("ai_name must not be empty".to_string());
        }
        if self.cleanup.check_interval_secs == 0 {
            return Err("cleanup.check_interval_secs must be positive".to_string());
        }
        if self.cleanup.inactivity_timeout_secs == 0 {
            return Err("cleanup.inactivity_timeout_secs must be positive".to_string());
        }
        if self.cleanup.check_interval_secs > self.cleanup.inactivity_timeout_secs {
            return Err(format!(
                "cleanup.check_interval_secs ({}) cannot exceed cleanup.inactivity_timeout_secs ({})",
                self.cleanup.check_interval_secs, self.cleanup.inactivity_timeout_secs
            ));
        }
        Ok(())
    }
}
