use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chaincfg::Network;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub network: Network,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_network_names() {
        let config = Config::parse("network = \"regnet\"").unwrap();
        assert_eq!(config.network, Network::RegNet);
        let config = Config::parse("network = \"testnet3\"").unwrap();
        assert_eq!(config.network, Network::TestNet3);
    }

    #[test]
    fn rejects_unknown_networks() {
        assert!(Config::parse("network = \"fakenet\"").is_err());
        assert!(Config::parse("").is_err());
    }
}
