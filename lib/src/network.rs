use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;

/// Magic number identifying the network a peer message belongs to. Encoded
/// little-endian at the start of every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyNet(pub u32);

impl CurrencyNet {
    pub const MAINNET: CurrencyNet = CurrencyNet(0xd9b4_00f9);
    pub const TESTNET3: CurrencyNet = CurrencyNet(0xb194_aa75);
    pub const SIMNET: CurrencyNet = CurrencyNet(0x1214_1c16);
    pub const REGNET: CurrencyNet = CurrencyNet(0xe6d4_e2fa);

    pub fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for CurrencyNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// The networks this crate carries parameters for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// The production network.
    MainNet,
    /// The public test network, version 3.
    TestNet3,
    /// Private simulation network used for integration testing between
    /// wallets, pools and other services.
    SimNet,
    /// Regression test network used by unit and RPC tests.
    RegNet,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::MainNet,
        Network::TestNet3,
        Network::SimNet,
        Network::RegNet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Network::MainNet => "mainnet",
            Network::TestNet3 => "testnet3",
            Network::SimNet => "simnet",
            Network::RegNet => "regnet",
        }
    }

    pub fn magic(self) -> CurrencyNet {
        match self {
            Network::MainNet => CurrencyNet::MAINNET,
            Network::TestNet3 => CurrencyNet::TESTNET3,
            Network::SimNet => CurrencyNet::SIMNET,
            Network::RegNet => CurrencyNet::REGNET,
        }
    }

    pub fn from_magic(magic: CurrencyNet) -> Option<Network> {
        Network::ALL.into_iter().find(|net| net.magic() == magic)
    }

    /// The registry entry for this network, built and validated on first use.
    pub fn params(self) -> &'static Params {
        crate::registry::params(self)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::MainNet),
            "testnet3" | "testnet" => Ok(Network::TestNet3),
            "simnet" => Ok(Network::SimNet),
            "regnet" => Ok(Network::RegNet),
            other => Err(ConfigError::UnknownNetwork(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for net in Network::ALL {
            assert_eq!(net.to_string().parse::<Network>().unwrap(), net);
        }
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::TestNet3);
        assert_eq!(
            "fakenet".parse::<Network>(),
            Err(ConfigError::UnknownNetwork("fakenet".to_owned()))
        );
    }

    #[test]
    fn magics_are_distinct_and_reversible() {
        for net in Network::ALL {
            assert_eq!(Network::from_magic(net.magic()), Some(net));
        }
        assert_eq!(Network::from_magic(CurrencyNet(0)), None);
        assert_eq!(CurrencyNet::MAINNET.to_le_bytes(), [0xf9, 0x00, 0xb4, 0xd9]);
    }
}
