//! Process-wide registry of network parameters.
//!
//! Each network's parameters are built once, validated, and never touched
//! again. Inconsistent parameters abort initialization: a node running with
//! them would diverge from the rest of its network.

use static_init::dynamic;
use tracing::{debug, error, info};

use crate::error::{ConfigError, Result};
use crate::network::{CurrencyNet, Network};
use crate::networks::{mainnet, regnet, simnet, testnet};
use crate::params::Params;

#[dynamic(lazy)]
static MAINNET: Params = build(mainnet::params);

#[dynamic(lazy)]
static TESTNET3: Params = build(testnet::params);

#[dynamic(lazy)]
static SIMNET: Params = build(simnet::params);

#[dynamic(lazy)]
static REGNET: Params = build(regnet::params);

fn build(literal: fn() -> Params) -> Params {
    let params = literal();
    if let Err(e) = params.validate() {
        error!("inconsistent network parameters: {e}");
        panic!("inconsistent {} parameters: {e}", params.name);
    }
    debug!(network = params.name, "network parameters built and validated");
    params
}

pub fn params(network: Network) -> &'static Params {
    match network {
        Network::MainNet => &*MAINNET,
        Network::TestNet3 => &*TESTNET3,
        Network::SimNet => &*SIMNET,
        Network::RegNet => &*REGNET,
    }
}

/// Builds and validates every network's parameters. Meant to be called once at
/// startup so an inconsistency stops the process before anything reads them.
pub fn init() {
    for network in Network::ALL {
        let params = network.params();
        info!(
            network = params.name,
            magic = %params.net,
            genesis = %params.genesis_hash,
            "network parameters ready"
        );
    }
}

pub fn all() -> impl Iterator<Item = &'static Params> {
    Network::ALL.into_iter().map(params)
}

pub fn params_for_name(name: &str) -> Result<&'static Params> {
    name.parse::<Network>().map(params)
}

pub fn params_for_net(net: CurrencyNet) -> Result<&'static Params> {
    Network::from_magic(net)
        .map(params)
        .ok_or(ConfigError::UnknownNetworkMagic(net))
}

/// Maps an extended private key prefix to the public key prefix of the same
/// network.
pub fn hd_private_to_public_key_id(id: [u8; 4]) -> Result<[u8; 4]> {
    all()
        .find(|params| params.hd_private_key_id == id)
        .map(|params| params.hd_public_key_id)
        .ok_or(ConfigError::UnknownHdKeyId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_network_builds() {
        init();
        for network in Network::ALL {
            let params = network.params();
            assert_eq!(params.network, network);
            assert_eq!(params.name, network.name());
            assert_eq!(params.net, network.magic());
        }
    }

    #[test]
    fn lookup_by_name_and_magic() {
        assert_eq!(params_for_name("regnet").unwrap().default_port, 10319);
        assert_eq!(params_for_name("testnet").unwrap().name, "testnet3");
        assert_eq!(
            params_for_name("nope").unwrap_err(),
            ConfigError::UnknownNetwork("nope".to_owned())
        );
        assert_eq!(params_for_net(CurrencyNet::SIMNET).unwrap().name, "simnet");
        assert_eq!(
            params_for_net(CurrencyNet(7)).unwrap_err(),
            ConfigError::UnknownNetworkMagic(CurrencyNet(7))
        );
    }

    #[test]
    fn lookups_return_the_same_instance() {
        let a = params(Network::MainNet);
        let b = params_for_name("mainnet").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn hd_key_id_mapping() {
        assert_eq!(
            hd_private_to_public_key_id([0x02, 0xfd, 0xa4, 0xe8]),
            Ok([0x02, 0xfd, 0xa9, 0x26])
        );
        assert_eq!(
            hd_private_to_public_key_id([0xea, 0xb4, 0x04, 0x48]),
            Ok([0xea, 0xb4, 0xf9, 0x87])
        );
        assert_eq!(
            hd_private_to_public_key_id([0; 4]),
            Err(ConfigError::UnknownHdKeyId([0; 4]))
        );
    }
}
