//! Simulation test network, for integration tests between wallets, voting
//! service providers, mining pools, block explorers and other services.

use std::collections::BTreeMap;

use chrono::TimeDelta;

use super::{ATOMS_PER_COIN, GENESIS_MERKLE_ROOT, GenesisHeader, genesis_block, hex_script};
use crate::U256;
use crate::hash::Hash;
use crate::network::{CurrencyNet, Network};
use crate::params::{Params, TokenPayout};
use crate::vote::{
    ALWAYS_AVAILABLE, Choice, ConsensusDeployment, NEVER_EXPIRES, VOTE_ID_FIX_LN_SEQ_LOCKS,
    VOTE_ID_LN_FEATURES, VOTE_ID_MAX_BLOCK_SIZE, VOTE_ID_SDIFF_ALGORITHM, Vote,
};

fn always_open(vote: Vote) -> Vec<ConsensusDeployment> {
    vec![ConsensusDeployment {
        vote,
        start_time: ALWAYS_AVAILABLE,
        expire_time: NEVER_EXPIRES,
    }]
}

pub(crate) fn params() -> Params {
    Params {
        network: Network::SimNet,
        name: "simnet",
        net: CurrencyNet::SIMNET,
        default_port: 18555,
        dns_seeds: vec![],

        genesis_block: genesis_block(
            GenesisHeader {
                version: 1,
                merkle_root: GENESIS_MERKLE_ROOT,
                bits: 0x207fffff,
                sbits: 0,
                timestamp: 1_401_292_357, // 2014-05-28 15:52:37 UTC
                nonce: 0,
                stake_version: 0,
            },
            super::test_genesis_coinbase(),
        ),
        genesis_hash: Hash::literal(
            "5bec7567af40504e0994db3b573c186fffcc4edefe096ff2e58d00523bd7e8a6",
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
        target_timespan: TimeDelta::seconds(8),
        retarget_adjustment_factor: 4,

        base_subsidy: 50_000_000_000,
        mul_subsidy: 100,
        div_subsidy: 101,
        subsidy_reduction_interval: 128,
        work_reward_proportion: 6,
        stake_reward_proportion: 3,
        block_tax_proportion: 1,

        checkpoints: vec![],

        rule_change_activation_quorum: 160,
        rule_change_activation_multiplier: 3,
        rule_change_activation_divisor: 4,
        rule_change_activation_interval: 320, // full ticket pool, 320 seconds
        deployments: BTreeMap::from([
            (
                4,
                always_open(Vote {
                    id: VOTE_ID_MAX_BLOCK_SIZE,
                    description: "Change maximum allowed block size from 1MiB to 1.25MB",
                    mask: 0x0006,
                    choices: vec![
                        Choice::abstain("abstain voting for change"),
                        Choice::no("reject changing max allowed block size", 0x0002),
                        Choice::yes("accept changing max allowed block size", 0x0004),
                    ],
                }),
            ),
            (
                5,
                always_open(Vote {
                    id: VOTE_ID_SDIFF_ALGORITHM,
                    description: "Change stake difficulty algorithm as defined in DCP0001",
                    mask: 0x0006,
                    choices: vec![
                        Choice::abstain("abstain voting for change"),
                        Choice::no("keep the existing algorithm", 0x0002),
                        Choice::yes("change to the new algorithm", 0x0004),
                    ],
                }),
            ),
            (
                6,
                always_open(Vote {
                    id: VOTE_ID_LN_FEATURES,
                    description: "Enable features defined in DCP0002 and DCP0003 necessary to support Lightning Network (LN)",
                    mask: 0x0006,
                    choices: vec![
                        Choice::abstain("abstain voting for change"),
                        Choice::no("keep the existing consensus rules", 0x0002),
                        Choice::yes("change to the new consensus rules", 0x0004),
                    ],
                }),
            ),
            (
                7,
                always_open(Vote {
                    id: VOTE_ID_FIX_LN_SEQ_LOCKS,
                    description: "Modify sequence lock handling as defined in DCP0004",
                    mask: 0x0006,
                    choices: vec![
                        Choice::abstain("abstain voting for change"),
                        Choice::no("keep the existing consensus rules", 0x0002),
                        Choice::yes("change to the new consensus rules", 0x0004),
                    ],
                }),
            ),
        ]),

        block_enforce_num_required: 51,
        block_reject_num_required: 75,
        block_upgrade_num_to_check: 100,

        accept_non_std_txs: true,

        network_address_prefix: "S",
        pubkey_addr_id: [0x27, 0x6f],      // Sk
        pubkey_hash_addr_id: [0x0e, 0x91], // Ss
        pkh_edwards_addr_id: [0x0e, 0x71], // Se
        pkh_schnorr_addr_id: [0x0e, 0x53], // SS
        script_hash_addr_id: [0x0e, 0x6c], // Sc
        private_key_id: [0x23, 0x07],      // Ps
        hd_private_key_id: [0x04, 0x20, 0xb9, 0x03], // sprv
        hd_public_key_id: [0x04, 0x20, 0xbd, 0x3d],  // spub
        slip0044_coin_type: 1,
        legacy_coin_type: 115, // ASCII for s

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
        max_fresh_stake_per_block: 20,
        stake_enabled_height: 16 + 16,
        stake_validation_height: 16 + 64 * 2,
        stake_base_sig_script: vec![0xde, 0xad, 0xbe, 0xef],
        stake_majority_multiplier: 3,
        stake_majority_divisor: 4,

        organization_pk_script: hex_script("a914cbb08d6ca783b533b2c7d24a51fbca92d937bf9987"),
        organization_pk_script_version: 0,
        block_one_ledger: vec![
            TokenPayout {
                address: "Sshw6S86G2bV6W32cbc7EhtFy8f93rU6pae",
                amount: 100_000 * ATOMS_PER_COIN,
            },
            TokenPayout {
                address: "SsjXRK6Xz6CFuBt6PugBvrkdAa4xGbcZ18w",
                amount: 100_000 * ATOMS_PER_COIN,
            },
            TokenPayout {
                address: "SsfXiYkYkCoo31CuVQw428N6wWKus2ZEw5X",
                amount: 100_000 * ATOMS_PER_COIN,
            },
        ],
    }
}
