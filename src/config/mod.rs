/// Configuration for the Solana MCP server
///
/// Everything is read from environment variables, with defaults for every
/// value. A `.env` file may seed the environment before loading; see
/// [`load_env_file`]. The resulting [`Config`] is built once at startup and
/// handed to the server; nothing reads the environment after that.
///
/// ```bash
/// export DEFAULT_NETWORK=devnet
/// export SOLANA_DEVNET_RPC_URL="https://my-devnet-node.example.com"
/// export ENABLE_DEFI_TOOLS=false
/// ```

pub mod network;

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

pub use network::{Commitment, NetworkConfig, DEVNET, MAINNET, TESTNET};

use crate::domain::{validate_solana_address, KEYPAIR_BYTES};

/// Errors raised while preparing configuration sources
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Environment variable names
mod env_vars {
    pub const SOLANA_RPC_URL: &str = "SOLANA_RPC_URL";
    pub const SOLANA_WS_URL: &str = "SOLANA_WS_URL";
    pub const SOLANA_DEVNET_RPC_URL: &str = "SOLANA_DEVNET_RPC_URL";
    pub const SOLANA_DEVNET_WS_URL: &str = "SOLANA_DEVNET_WS_URL";
    pub const SOLANA_TESTNET_RPC_URL: &str = "SOLANA_TESTNET_RPC_URL";
    pub const SOLANA_TESTNET_WS_URL: &str = "SOLANA_TESTNET_WS_URL";

    pub const DEFAULT_NETWORK: &str = "DEFAULT_NETWORK";
    pub const DEFAULT_COMMITMENT: &str = "DEFAULT_COMMITMENT";
    pub const SOLANA_PRIVATE_KEY: &str = "SOLANA_PRIVATE_KEY";
    pub const SOLANA_WALLET_PATH: &str = "SOLANA_WALLET_PATH";

    pub const MAX_TRANSACTION_AMOUNT: &str = "MAX_TRANSACTION_AMOUNT";
    pub const REQUIRE_CONFIRMATION: &str = "REQUIRE_CONFIRMATION";
    pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
    pub const ALLOWED_PROGRAMS: &str = "ALLOWED_PROGRAMS";

    pub const ENABLE_DEFI_TOOLS: &str = "ENABLE_DEFI_TOOLS";
    pub const ENABLE_NFT_TOOLS: &str = "ENABLE_NFT_TOOLS";
    pub const ENABLE_MARKET_DATA: &str = "ENABLE_MARKET_DATA";

    pub const JUPITER_API_URL: &str = "JUPITER_API_URL";
    pub const JUPITER_API_KEY: &str = "JUPITER_API_KEY";
    pub const COINGECKO_API_URL: &str = "COINGECKO_API_URL";
    pub const COINGECKO_API_KEY: &str = "COINGECKO_API_KEY";
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const LOG_FILE: &str = "LOG_FILE";
    pub const SERVER_HOST: &str = "SERVER_HOST";
    pub const SERVER_PORT: &str = "SERVER_PORT";
}

/// Public endpoints used when nothing is configured
pub mod defaults {
    pub const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";
    pub const MAINNET_WS: &str = "wss://api.mainnet-beta.solana.com";
    pub const MAINNET_EXPLORER: &str = "https://explorer.solana.com";
    pub const DEVNET_RPC: &str = "https://api.devnet.solana.com";
    pub const DEVNET_WS: &str = "wss://api.devnet.solana.com";
    pub const DEVNET_EXPLORER: &str = "https://explorer.solana.com?cluster=devnet";
    pub const TESTNET_RPC: &str = "https://api.testnet.solana.com";
    pub const TESTNET_WS: &str = "wss://api.testnet.solana.com";
    pub const TESTNET_EXPLORER: &str = "https://explorer.solana.com?cluster=testnet";

    pub const JUPITER_API: &str = "https://quote-api.jup.ag/v6";
    pub const COINGECKO_API: &str = "https://api.coingecko.com/api/v3";

    pub const MAX_TRANSACTION_AMOUNT: f64 = 1.0;
    pub const RATE_LIMIT_PER_MINUTE: i64 = 60;
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    pub const LOG_LEVEL: &str = "info";
    pub const SERVER_HOST: &str = "localhost";
    pub const SERVER_PORT: u16 = 8000;
}

/// Security limits
///
/// Loaded and validated, but no tool consults them: nothing in this server
/// signs or sends a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityConfig {
    pub max_transaction_amount: f64,
    pub require_confirmation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_programs: Option<Vec<String>>,
    pub rate_limit_per_minute: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_transaction_amount: defaults::MAX_TRANSACTION_AMOUNT,
            require_confirmation: true,
            allowed_programs: None,
            rate_limit_per_minute: defaults::RATE_LIMIT_PER_MINUTE,
        }
    }
}

/// Feature toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub defi_tools: bool,
    pub nft_tools: bool,
    pub market_data: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            defi_tools: true,
            nft_tools: true,
            market_data: true,
        }
    }
}

/// Third-party HTTP services
#[derive(Debug)]
pub struct ApiConfig {
    pub jupiter_api_url: String,
    pub jupiter_api_key: Option<SecretString>,
    pub coingecko_api_url: String,
    pub coingecko_api_key: Option<SecretString>,
    pub http_timeout: Duration,
}

/// Logging destination and default level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Host/port pair reported in the config summary
///
/// The stdio transport does not bind a socket; these are carried for
/// deployments that front the server with a network bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Main configuration
#[derive(Debug)]
pub struct Config {
    /// Always non-empty, mainnet first
    networks: Vec<NetworkConfig>,
    pub current_network: String,
    pub private_key: Option<SecretString>,
    pub wallet_path: Option<PathBuf>,
    pub commitment: Commitment,
    pub security: SecurityConfig,
    pub features: FeatureFlags,
    pub apis: ApiConfig,
    pub logging: LoggingConfig,
    pub server: ServerSettings,
}

/// Secret-free snapshot of the configuration
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub current_network: String,
    pub rpc_url: String,
    pub commitment: Commitment,
    pub wallet_configured: bool,
    pub security: SecurityConfig,
    pub features: FeatureFlags,
    pub server: ServerSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values count as unset. Values that fail to parse fall back to
    /// their default with a warning; loading itself never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());
        let flag = |key: &str, default: bool| {
            get(key)
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(default)
        };

        let networks = vec![
            NetworkConfig::new(
                MAINNET,
                get_or(env_vars::SOLANA_RPC_URL, defaults::MAINNET_RPC),
                Some(get_or(env_vars::SOLANA_WS_URL, defaults::MAINNET_WS)),
                Some(defaults::MAINNET_EXPLORER.to_string()),
            ),
            NetworkConfig::new(
                DEVNET,
                get_or(env_vars::SOLANA_DEVNET_RPC_URL, defaults::DEVNET_RPC),
                Some(get_or(env_vars::SOLANA_DEVNET_WS_URL, defaults::DEVNET_WS)),
                Some(defaults::DEVNET_EXPLORER.to_string()),
            ),
            NetworkConfig::new(
                TESTNET,
                get_or(env_vars::SOLANA_TESTNET_RPC_URL, defaults::TESTNET_RPC),
                Some(get_or(env_vars::SOLANA_TESTNET_WS_URL, defaults::TESTNET_WS)),
                Some(defaults::TESTNET_EXPLORER.to_string()),
            ),
        ];

        let commitment = match get(env_vars::DEFAULT_COMMITMENT) {
            Some(raw) => raw.parse::<Commitment>().unwrap_or_else(|e: String| {
                tracing::warn!("{}; using {}", e, Commitment::default());
                Commitment::default()
            }),
            None => Commitment::default(),
        };

        let security = SecurityConfig {
            max_transaction_amount: parse_or(
                env_vars::MAX_TRANSACTION_AMOUNT,
                get(env_vars::MAX_TRANSACTION_AMOUNT),
                defaults::MAX_TRANSACTION_AMOUNT,
            ),
            require_confirmation: flag(env_vars::REQUIRE_CONFIRMATION, true),
            allowed_programs: get(env_vars::ALLOWED_PROGRAMS).map(|raw| {
                raw.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            }),
            rate_limit_per_minute: parse_or(
                env_vars::RATE_LIMIT_PER_MINUTE,
                get(env_vars::RATE_LIMIT_PER_MINUTE),
                defaults::RATE_LIMIT_PER_MINUTE,
            ),
        };

        let features = FeatureFlags {
            defi_tools: flag(env_vars::ENABLE_DEFI_TOOLS, true),
            nft_tools: flag(env_vars::ENABLE_NFT_TOOLS, true),
            market_data: flag(env_vars::ENABLE_MARKET_DATA, true),
        };

        let apis = ApiConfig {
            jupiter_api_url: get_or(env_vars::JUPITER_API_URL, defaults::JUPITER_API),
            jupiter_api_key: get(env_vars::JUPITER_API_KEY).map(SecretString::from),
            coingecko_api_url: get_or(env_vars::COINGECKO_API_URL, defaults::COINGECKO_API),
            coingecko_api_key: get(env_vars::COINGECKO_API_KEY).map(SecretString::from),
            http_timeout: Duration::from_secs(parse_or(
                env_vars::HTTP_TIMEOUT_SECS,
                get(env_vars::HTTP_TIMEOUT_SECS),
                defaults::HTTP_TIMEOUT_SECS,
            )),
        };

        let server = ServerSettings {
            host: get_or(env_vars::SERVER_HOST, defaults::SERVER_HOST),
            port: parse_or(
                env_vars::SERVER_PORT,
                get(env_vars::SERVER_PORT),
                defaults::SERVER_PORT,
            ),
        };

        Self {
            networks,
            current_network: get_or(env_vars::DEFAULT_NETWORK, MAINNET).to_lowercase(),
            private_key: get(env_vars::SOLANA_PRIVATE_KEY).map(SecretString::from),
            wallet_path: get(env_vars::SOLANA_WALLET_PATH).map(PathBuf::from),
            commitment,
            security,
            features,
            apis,
            logging: LoggingConfig {
                level: get_or(env_vars::LOG_LEVEL, defaults::LOG_LEVEL).to_lowercase(),
                file: get(env_vars::LOG_FILE).map(PathBuf::from),
            },
            server,
        }
    }

    /// Override the selected network (e.g. from a CLI flag)
    pub fn with_network(mut self, network: &str) -> Self {
        self.current_network = network.trim().to_lowercase();
        self
    }

    /// All configured networks, mainnet first
    pub fn networks(&self) -> &[NetworkConfig] {
        &self.networks
    }

    /// Network configuration by name, defaulting to the current network
    ///
    /// Unknown names fall back to mainnet.
    pub fn get_network_config(&self, network: Option<&str>) -> &NetworkConfig {
        let name = network.unwrap_or(&self.current_network);
        self.find_network(name).unwrap_or(&self.networks[0])
    }

    fn find_network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.iter().find(|n| n.name == name)
    }

    /// RPC URL by network name, defaulting to the current network
    pub fn get_rpc_url(&self, network: Option<&str>) -> &str {
        &self.get_network_config(network).rpc_url
    }

    pub fn is_mainnet(&self) -> bool {
        self.current_network == MAINNET
    }

    pub fn is_devnet(&self) -> bool {
        self.current_network == DEVNET
    }

    /// Check the configuration and list every problem found
    ///
    /// This is diagnostic only; the server starts regardless.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.find_network(&self.current_network).is_none() {
            issues.push(format!("Unknown network: {}", self.current_network));
        }

        if let Some(private_key) = &self.private_key {
            match bs58::decode(private_key.expose_secret()).into_vec() {
                Ok(bytes) if bytes.len() != KEYPAIR_BYTES => {
                    issues.push("Invalid private key length".to_string());
                }
                Ok(_) => {}
                Err(_) => issues.push("Invalid private key format".to_string()),
            }
        }

        // Written as a negation so NaN is rejected too
        if !(self.security.max_transaction_amount > 0.0) {
            issues.push("Max transaction amount must be positive".to_string());
        }

        if self.security.rate_limit_per_minute <= 0 {
            issues.push("Rate limit must be positive".to_string());
        }

        if self.apis.http_timeout.is_zero() {
            issues.push("HTTP timeout must be positive".to_string());
        }

        if let Some(programs) = &self.security.allowed_programs {
            for program in programs {
                if !validate_solana_address(program) {
                    issues.push(format!("Invalid allowed program address: {}", program));
                }
            }
        }

        issues
    }

    /// Secret-free snapshot for logging and `--check-config`
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            current_network: self.current_network.clone(),
            rpc_url: self.get_rpc_url(None).to_string(),
            commitment: self.commitment,
            wallet_configured: self.private_key.is_some(),
            security: self.security.clone(),
            features: self.features,
            server: self.server.clone(),
        }
    }
}

/// Load a `.env` file into the process environment
///
/// Existing variables win over values in the file. With no explicit path the
/// usual lookup applies: `.env` in the working directory or any parent, then
/// `solana-mcp/.env` under the user's config directory. A missing default
/// file is not an error.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = path {
        dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Some(path.to_path_buf()));
    }

    if let Some(found) = found_env_file(dotenvy::dotenv())? {
        return Ok(Some(found));
    }

    if let Some(mut fallback) = dirs::config_dir() {
        fallback.push("solana-mcp");
        fallback.push(".env");
        if fallback.is_file() {
            dotenvy::from_path(&fallback).map_err(|source| ConfigError::EnvFile {
                path: fallback.clone(),
                source,
            })?;
            return Ok(Some(fallback));
        }
    }

    Ok(None)
}

/// A missing default `.env` falls through to the next location; any other
/// failure, such as a malformed line, is reported
fn found_env_file(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, ConfigError> {
    match result {
        Ok(found) => Ok(Some(found)),
        Err(e) if e.not_found() => Ok(None),
        Err(source) => Err(ConfigError::EnvFile {
            path: PathBuf::from(".env"),
            source,
        }),
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value '{}' for {}; using {}", value, key, default);
            default
        }),
        None => default,
    }
}
