//! Regression test network.
//!
//! Not to be confused with the public test network or the simulation network.
//! It exists for unit and RPC server tests, so its values may change even when
//! that would fork the chain.

use std::collections::BTreeMap;

use chrono::TimeDelta;

use super::{ATOMS_PER_COIN, GENESIS_MERKLE_ROOT, GenesisHeader, genesis_block, hex_script};
use crate::U256;
use crate::hash::Hash;
use crate::network::{CurrencyNet, Network};
use crate::params::{Params, TokenPayout};
use crate::vote::{
    ALWAYS_AVAILABLE, Choice, ConsensusDeployment, NEVER_EXPIRES, VOTE_ID_LN_FEATURES,
    VOTE_ID_MAX_BLOCK_SIZE, VOTE_ID_SDIFF_ALGORITHM, Vote,
};

pub(crate) fn params() -> Params {
    Params {
        network: Network::RegNet,
        name: "regnet",
        net: CurrencyNet::REGNET,
        default_port: 10319,
        // there must never be any seeds
        dns_seeds: vec![],

        genesis_block: genesis_block(
            GenesisHeader {
                version: 1,
                merkle_root: GENESIS_MERKLE_ROOT,
                bits: 0x207fffff,
                sbits: 0,
                timestamp: 1_538_524_800, // 2018-10-03 00:00:00 UTC
                nonce: 0,
                stake_version: 0,
            },
            super::test_genesis_coinbase(),
        ),
        genesis_hash: Hash::literal(
            "2ced94b4ae95bba344cfa043268732d230649c640f92dce2d9518823d3057cb0",
        ),

        pow_limit: U256::MAX >> 1usize,
        pow_limit_bits: 0x207fffff,
        reduce_min_difficulty: false,
        min_diff_reduction_time: TimeDelta::zero(),
        generate_supported: true,
        maximum_block_sizes: vec![1_000_000, 1_310_720],
        max_tx_size: 1_000_000,
        target_time_per_block: TimeDelta::seconds(1),
        work_diff_alpha: 1,
        work_diff_window_size: 8,
        work_diff_windows: 4,
        target_timespan: TimeDelta::seconds(8), // time per block * window size
        retarget_adjustment_factor: 4,

        base_subsidy: 50_000_000_000,
        mul_subsidy: 100,
        div_subsidy: 101,
        subsidy_reduction_interval: 128,
        work_reward_proportion: 6,
        stake_reward_proportion: 3,
        block_tax_proportion: 1,

        checkpoints: vec![],

        rule_change_activation_quorum: 160, // 10% of interval * tickets per block
        rule_change_activation_multiplier: 3, // 75%
        rule_change_activation_divisor: 4,
        rule_change_activation_interval: 320,
        deployments: BTreeMap::from([
            (
                4,
                vec![ConsensusDeployment {
                    vote: Vote {
                        id: VOTE_ID_MAX_BLOCK_SIZE,
                        description: "Change maximum allowed block size from 1MiB to 1.25MB",
                        mask: 0x0006, // bits 1 and 2
                        choices: vec![
                            Choice::abstain("abstain voting for change"),
                            Choice::no("reject changing max allowed block size", 0x0002),
                            Choice::yes("accept changing max allowed block size", 0x0004),
                        ],
                    },
                    start_time: ALWAYS_AVAILABLE,
                    expire_time: NEVER_EXPIRES,
                }],
            ),
            (
                5,
                vec![ConsensusDeployment {
                    vote: Vote {
                        id: VOTE_ID_SDIFF_ALGORITHM,
                        description: "Change stake difficulty algorithm as defined in DCP0001",
                        mask: 0x0006,
                        choices: vec![
                            Choice::abstain("abstain voting for change"),
                            Choice::no("keep the existing algorithm", 0x0002),
                            Choice::yes("change to the new algorithm", 0x0004),
                        ],
                    },
                    start_time: ALWAYS_AVAILABLE,
                    expire_time: NEVER_EXPIRES,
                }],
            ),
            (
                6,
                vec![ConsensusDeployment {
                    vote: Vote {
                        id: VOTE_ID_LN_FEATURES,
                        description: "Enable features defined in DCP0002 and DCP0003 necessary to support Lightning Network (LN)",
                        mask: 0x0006,
                        choices: vec![
                            Choice::abstain("abstain voting for change"),
                            Choice::no("keep the existing consensus rules", 0x0002),
                            Choice::yes("change to the new consensus rules", 0x0004),
                        ],
                    },
                    start_time: ALWAYS_AVAILABLE,
                    expire_time: NEVER_EXPIRES,
                }],
            ),
        ]),

        // enforce the current block version at 51%, reject older ones at 75%
        block_enforce_num_required: 51,
        block_reject_num_required: 75,
        block_upgrade_num_to_check: 100,

        accept_non_std_txs: true,

        network_address_prefix: "XCC",
        pubkey_addr_id: [0x25, 0xe5],      // Rk
        pubkey_hash_addr_id: [0x0e, 0x00], // Rs
        pkh_edwards_addr_id: [0x0d, 0xe0], // Re
        pkh_schnorr_addr_id: [0x0d, 0xc2], // RS
        script_hash_addr_id: [0x0d, 0xdb], // Rc
        private_key_id: [0x22, 0xfe],      // Pr
        hd_private_key_id: [0xea, 0xb4, 0x04, 0x48], // rprv
        hd_public_key_id: [0xea, 0xb4, 0xf9, 0x87],  // rpub
        slip0044_coin_type: 1, // testnet, all coins
        legacy_coin_type: 1,

        minimum_stake_diff: 20_000,
        ticket_pool_size: 64,
        tickets_per_block: 5,
        ticket_maturity: 16,
        ticket_expiry: 384, // 6 * ticket pool size
        coinbase_maturity: 16,
        sstx_change_maturity: 1,
        ticket_pool_size_weight: 4,
        stake_diff_alpha: 1,
        stake_diff_window_size: 8,
        stake_diff_windows: 8,
        stake_version_interval: 8 * 2 * 7,
        max_fresh_stake_per_block: 20,        // 4 * tickets per block
        stake_enabled_height: 16 + 16,        // coinbase maturity + ticket maturity
        stake_validation_height: 16 + 64 * 2, // coinbase maturity + ticket pool size * 2
        stake_base_sig_script: vec![0x73, 0x57],
        stake_majority_multiplier: 3,
        stake_majority_divisor: 4,

        // 3-of-3 P2SH treasury, RcQR65gasxuzf7mUeBXeAux6Z37joPuUwUN. The same
        // wallet owns the block one ledger outputs.
        organization_pk_script: hex_script("a9146913bcc838bd0087fb3f6b3c868423d5e300078d87"),
        organization_pk_script_version: 0,
        block_one_ledger: vec![
            TokenPayout {
                address: "RsKrWb7Vny1jnzL1sDLgKTAteh9RZcRqDw",
                amount: 100_000 * ATOMS_PER_COIN,
            },
            TokenPayout {
                address: "Rs8ca5cDALtsMVD4PV3xvFTC7dmuU1juvLv",
                amount: 100_000 * ATOMS_PER_COIN,
            },
            TokenPayout {
                address: "RsHzbGt6YajuHpurtpqXXHz57LmYZK8w9tX",
                amount: 100_000 * ATOMS_PER_COIN,
            },
        ],
    }
}
