//! Public test network, version 3.

use std::collections::BTreeMap;

use chrono::TimeDelta;

use super::{GenesisHeader, genesis_block, hex_script, main_genesis_coinbase};
use crate::U256;
use crate::checkpoint::Checkpoint;
use crate::hash::Hash;
use crate::network::{CurrencyNet, Network};
use crate::params::{DnsSeed, Params};
use crate::vote::{Choice, ConsensusDeployment, VOTE_ID_FIX_LN_SEQ_LOCKS, Vote};

pub(crate) fn params() -> Params {
    Params {
        network: Network::TestNet3,
        name: "testnet3",
        net: CurrencyNet::TESTNET3,
        default_port: 19108,
        dns_seeds: vec![
            DnsSeed {
                host: "testnet-seed.decred.mindcry.org",
                has_filtering: true,
            },
            DnsSeed {
                host: "testnet-seed.decred.netpurgatory.com",
                has_filtering: true,
            },
            DnsSeed {
                host: "testnet-seed.decred.org",
                has_filtering: true,
            },
        ],

        genesis_block: genesis_block(
            GenesisHeader {
                version: 6,
                merkle_root: "e7dfbceac9fccd6025c70a1dfa9302b3e7b5aa22fa51c98a69164ad403d60a2c",
                bits: 0x1e00ffff,
                sbits: 20_000_000,
                timestamp: 1_533_513_600, // 2018-08-06 00:00:00 UTC
                nonce: 0x18aea41a,
                stake_version: 6,
            },
            main_genesis_coinbase(),
        ),
        genesis_hash: Hash::literal(
            "a649dce53918caf422e9c711c858837e08d626ecfcd198969b24f7b634a49bac",
        ),

        pow_limit: U256::MAX >> 24usize,
        pow_limit_bits: 0x1e00ffff,
        reduce_min_difficulty: true,
        // about 99.3% of blocks are found before the reduction kicks in
        min_diff_reduction_time: TimeDelta::minutes(10),
        generate_supported: true,
        maximum_block_sizes: vec![1_310_720],
        max_tx_size: 1_000_000,
        target_time_per_block: TimeDelta::minutes(2),
        work_diff_alpha: 1,
        work_diff_window_size: 144,
        work_diff_windows: 20,
        target_timespan: TimeDelta::minutes(2 * 144),
        retarget_adjustment_factor: 4,

        base_subsidy: 2_500_000_000, // 25 coins
        mul_subsidy: 100,
        div_subsidy: 101,
        subsidy_reduction_interval: 2048,
        work_reward_proportion: 6,
        stake_reward_proportion: 3,
        block_tax_proportion: 1,

        checkpoints: vec![Checkpoint::literal(
            83520,
            "0000000001e6244e6ebb6e4e3d1c17b4bfe4ed44e4b3a4e6dbd3bc72ba79ca37",
        )],

        rule_change_activation_quorum: 2520, // 10% of interval * tickets per block
        rule_change_activation_multiplier: 3,
        rule_change_activation_divisor: 4,
        rule_change_activation_interval: 5040, // 1 week
        deployments: BTreeMap::from([(
            7,
            vec![ConsensusDeployment {
                vote: Vote {
                    id: VOTE_ID_FIX_LN_SEQ_LOCKS,
                    description: "Modify sequence lock handling as defined in DCP0004",
                    mask: 0x0006,
                    choices: vec![
                        Choice::abstain("abstain voting for change"),
                        Choice::no("keep the existing consensus rules", 0x0002),
                        Choice::yes("change to the new consensus rules", 0x0004),
                    ],
                },
                start_time: 1_548_633_600,  // 2019-01-28
                expire_time: 1_580_169_600, // 2020-01-28
            }],
        )]),

        block_enforce_num_required: 51,
        block_reject_num_required: 75,
        block_upgrade_num_to_check: 100,

        accept_non_std_txs: true,

        network_address_prefix: "T",
        pubkey_addr_id: [0x28, 0xf7],      // Tk
        pubkey_hash_addr_id: [0x0f, 0x21], // Ts
        pkh_edwards_addr_id: [0x0f, 0x01], // Te
        pkh_schnorr_addr_id: [0x0e, 0xe3], // TS
        script_hash_addr_id: [0x0e, 0xfc], // Tc
        private_key_id: [0x23, 0x0e],      // Pt
        hd_private_key_id: [0x04, 0x35, 0x83, 0x97], // tprv
        hd_public_key_id: [0x04, 0x35, 0x87, 0xd1],  // tpub
        slip0044_coin_type: 1,
        legacy_coin_type: 11,

        minimum_stake_diff: 20_000_000, // 0.2 coins
        ticket_pool_size: 1024,
        tickets_per_block: 5,
        ticket_maturity: 16,
        ticket_expiry: 6144, // 6 * ticket pool size
        coinbase_maturity: 16,
        sstx_change_maturity: 1,
        ticket_pool_size_weight: 4,
        stake_diff_alpha: 1,
        stake_diff_window_size: 144,
        stake_diff_windows: 20,
        stake_version_interval: 144 * 2 * 7, // ~1 week
        max_fresh_stake_per_block: 20,
        stake_enabled_height: 16 + 16,
        // arbitrary, does not follow coinbase maturity + ticket pool size * 2
        stake_validation_height: 768,
        stake_base_sig_script: vec![0x00, 0x00],
        stake_majority_multiplier: 3,
        stake_majority_divisor: 4,

        organization_pk_script: hex_script("a914d585cd7426d25b4ea5faf1e6987aacfeda3db94287"),
        organization_pk_script_version: 0,
        block_one_ledger: vec![],
    }
}
