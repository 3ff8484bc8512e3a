//! Literal parameter tables, one module per network.

pub(crate) mod mainnet;
pub(crate) mod regnet;
pub(crate) mod simnet;
pub(crate) mod testnet;

use crate::hash::Hash;
use crate::types::{Block, BlockHeader, Transaction};

/// Atoms per coin.
pub(crate) const ATOMS_PER_COIN: u64 = 100_000_000;

/// Merkle root recorded in the mainnet genesis header. The simulation and
/// regression networks reuse it even though their coinbase differs.
const GENESIS_MERKLE_ROOT: &str =
    "66aa7491b9adce110585ccab7e3fb5fe280de174530cca10eba2c6c3df01c10d";

/// Output script of the mainnet and testnet3 genesis coinbase.
const GENESIS_PK_SCRIPT: &str = "801679e98561ada96caec2949a5d41c4cab3851eb740d951c10ecbcf265c1fd9";

/// Coinbase signature script shared by the simulation and regression networks.
const TEST_GENESIS_SIG_SCRIPT: &str = "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73";
/// Coinbase output script shared by the simulation and regression networks.
const TEST_GENESIS_PK_SCRIPT: &str = "4104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac";

pub(crate) fn hex_script(s: &str) -> Vec<u8> {
    hex::decode(s).expect("BUG: malformed script literal")
}

/// Fields of a genesis header that differ between networks. Everything else
/// is zero.
pub(crate) struct GenesisHeader {
    pub version: i32,
    pub merkle_root: &'static str,
    pub bits: u32,
    pub sbits: i64,
    pub timestamp: u32,
    pub nonce: u32,
    pub stake_version: u32,
}

pub(crate) fn genesis_block(header: GenesisHeader, coinbase: Transaction) -> Block {
    Block {
        header: BlockHeader {
            version: header.version,
            prev_block: Hash::ZERO,
            merkle_root: Hash::literal(header.merkle_root),
            stake_root: Hash::ZERO,
            vote_bits: 0,
            final_state: [0; 6],
            voters: 0,
            fresh_stake: 0,
            revocations: 0,
            pool_size: 0,
            bits: header.bits,
            sbits: header.sbits,
            height: 0,
            size: 0,
            timestamp: header.timestamp,
            nonce: header.nonce,
            extra_data: [0; 32],
            stake_version: header.stake_version,
        },
        transactions: vec![coinbase],
        stake_transactions: vec![],
    }
}

pub(crate) fn main_genesis_coinbase() -> Transaction {
    crate::types::genesis_coinbase(vec![0x00, 0x00], hex_script(GENESIS_PK_SCRIPT))
}

pub(crate) fn test_genesis_coinbase() -> Transaction {
    crate::types::genesis_coinbase(
        hex_script(TEST_GENESIS_SIG_SCRIPT),
        hex_script(TEST_GENESIS_PK_SCRIPT),
    )
}
