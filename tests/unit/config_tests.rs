/// Configuration loading and validation
use solana_mcp_server::config::{load_env_file, Commitment, Config};
use solana_mcp_server::domain::Keypair;
use std::io::Write;

fn config_with(vars: &[(&str, &str)]) -> Config {
    let vars: Vec<(String, String)> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_lookup(move |key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
}

#[test]
fn test_defaults() {
    let config = config_with(&[]);

    assert_eq!(config.current_network, "mainnet");
    assert!(config.is_mainnet());
    assert_eq!(config.get_rpc_url(None), "https://api.mainnet-beta.solana.com");
    assert_eq!(config.commitment, Commitment::Confirmed);
    assert!(config.features.market_data);
    assert!(config.validate().is_empty());
}

#[test]
fn test_testnet_is_selectable() {
    let config = config_with(&[("SOLANA_TESTNET_RPC_URL", "http://testnet.local")]).with_network("testnet");
    assert_eq!(config.get_rpc_url(None), "http://testnet.local");
}

#[test]
fn test_unknown_network() {
    let config = config_with(&[("DEFAULT_NETWORK", "localnet")]);

    assert_eq!(config.get_network_config(None).name, "mainnet");
    assert_eq!(config.validate(), vec!["Unknown network: localnet".to_string()]);
}

#[test]
fn test_private_key_issues() {
    let config = config_with(&[("SOLANA_PRIVATE_KEY", "0OIl")]);
    assert!(config.validate().contains(&"Invalid private key format".to_string()));

    let config = config_with(&[("SOLANA_PRIVATE_KEY", "3mJr7AoUXx2Wqd")]);
    assert!(config.validate().contains(&"Invalid private key length".to_string()));

    let key = Keypair::generate().to_base58();
    let config = config_with(&[("SOLANA_PRIVATE_KEY", key.as_str())]);
    assert!(config.validate().is_empty());
    assert!(config.summary().wallet_configured);
}

#[test]
fn test_limits_must_be_positive() {
    let config = config_with(&[("MAX_TRANSACTION_AMOUNT", "0"), ("RATE_LIMIT_PER_MINUTE", "-5")]);
    let issues = config.validate();

    assert!(issues.contains(&"Max transaction amount must be positive".to_string()));
    assert!(issues.contains(&"Rate limit must be positive".to_string()));
}

#[test]
fn test_summary_has_no_secrets() {
    let key = Keypair::generate().to_base58();
    let config = config_with(&[("SOLANA_PRIVATE_KEY", key.as_str()), ("JUPITER_API_KEY", "jup-secret")]);

    let summary = serde_json::to_string(&config.summary()).unwrap();
    assert!(!summary.contains(&key));
    assert!(!summary.contains("jup-secret"));
}

#[test]
fn test_explicit_env_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "SOLANA_MCP_UNIT_TEST_MARKER=loaded").unwrap();

    let loaded = load_env_file(Some(file.path())).unwrap();
    assert_eq!(loaded.as_deref(), Some(file.path()));
    assert_eq!(std::env::var("SOLANA_MCP_UNIT_TEST_MARKER").as_deref(), Ok("loaded"));
}

#[test]
fn test_missing_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.env");
    assert!(load_env_file(Some(&missing)).is_err());
}
