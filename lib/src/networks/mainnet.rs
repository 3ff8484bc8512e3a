//! The production network.

use std::collections::BTreeMap;

use chrono::TimeDelta;

use super::{
    GENESIS_MERKLE_ROOT, GenesisHeader, genesis_block, hex_script, main_genesis_coinbase,
};
use crate::U256;
use crate::checkpoint::Checkpoint;
use crate::hash::Hash;
use crate::network::{CurrencyNet, Network};
use crate::params::{DnsSeed, Params};
use crate::vote::{
    Choice, ConsensusDeployment, VOTE_ID_FIX_LN_SEQ_LOCKS, VOTE_ID_LN_FEATURES, VOTE_ID_LN_SUPPORT,
    VOTE_ID_SDIFF_ALGORITHM, Vote,
};

pub(crate) fn params() -> Params {
    Params {
        network: Network::MainNet,
        name: "mainnet",
        net: CurrencyNet::MAINNET,
        default_port: 9108,
        dns_seeds: vec![
            DnsSeed {
                host: "mainnet-seed.decred.mindcry.org",
                has_filtering: true,
            },
            DnsSeed {
                host: "mainnet-seed.decred.netpurgatory.com",
                has_filtering: true,
            },
            DnsSeed {
                host: "mainnet-seed.decred.org",
                has_filtering: true,
            },
        ],

        genesis_block: genesis_block(
            GenesisHeader {
                version: 1,
                merkle_root: GENESIS_MERKLE_ROOT,
                bits: 0x1b01ffff, // difficulty 32767
                sbits: 200_000_000,
                timestamp: 1_454_954_400, // 2016-02-08 18:00:00 UTC
                nonce: 0,
                stake_version: 0,
            },
            main_genesis_coinbase(),
        ),
        genesis_hash: Hash::literal(
            "298e5cc3d985bfe7f81dc135f360abe089edd4396b86d2de66b0cef42b21d980",
        ),

        pow_limit: U256::MAX >> 32usize,
        pow_limit_bits: 0x1d00ffff,
        reduce_min_difficulty: false,
        min_diff_reduction_time: TimeDelta::zero(),
        generate_supported: false,
        maximum_block_sizes: vec![393_216],
        max_tx_size: 393_216,
        target_time_per_block: TimeDelta::minutes(5),
        work_diff_alpha: 1,
        work_diff_window_size: 144,
        work_diff_windows: 20,
        target_timespan: TimeDelta::minutes(5 * 144),
        retarget_adjustment_factor: 4,

        base_subsidy: 3_119_582_664, // 21m coins
        mul_subsidy: 100,
        div_subsidy: 101,
        subsidy_reduction_interval: 6144,
        work_reward_proportion: 6,
        stake_reward_proportion: 3,
        block_tax_proportion: 1,

        checkpoints: vec![
            Checkpoint::literal(
                440,
                "0000000000002203eb2c95ee96906730bb56b2985e174518f90eb4db29232d93",
            ),
            Checkpoint::literal(
                24480,
                "0000000000000c9d4239c4ef7ef3fb5aaeed940244bc69c57c8c5e1f071b28a6",
            ),
            Checkpoint::literal(
                48590,
                "0000000000000d5e0de21a96d3c965f5f2db2c82612acd7389c140c9afe92ba7",
            ),
            Checkpoint::literal(
                54770,
                "00000000000009293d067b1126b7de07fc9b2b94ee50dfe0d48c239a7adb072c",
            ),
            Checkpoint::literal(
                60720,
                "0000000000000a64475d68ffb9ad89a3d147c0f8138db26b40da9a2fb1d13c47",
            ),
            Checkpoint::literal(
                65270,
                "0000000000000021f107601962789b201f0a0cbb98ac5f8c12b93d94e795b441",
            ),
            Checkpoint::literal(
                75380,
                "0000000000000e7d13cfc85806aa720fe3670980f5b7d33253e4f41985558372",
            ),
        ],

        rule_change_activation_quorum: 4032, // 10% of interval * tickets per block
        rule_change_activation_multiplier: 3, // 75%
        rule_change_activation_divisor: 4,
        rule_change_activation_interval: 2016 * 4, // 4 weeks
        deployments: BTreeMap::from([
            (
                4,
                vec![
                    ConsensusDeployment {
                        vote: Vote {
                            id: VOTE_ID_SDIFF_ALGORITHM,
                            description: "Change stake difficulty algorithm as defined in DCP0001",
                            mask: 0x0006, // bits 1 and 2
                            choices: vec![
                                Choice::abstain("abstain voting for change"),
                                Choice::no("keep the existing algorithm", 0x0002),
                                Choice::yes("change to the new algorithm", 0x0004),
                            ],
                        },
                        start_time: 1_493_164_800,  // 2017-04-26
                        expire_time: 1_524_700_800, // 2018-04-26
                    },
                    ConsensusDeployment {
                        vote: Vote {
                            id: VOTE_ID_LN_SUPPORT,
                            description: "Request developers begin work on Lightning Network (LN) integration",
                            mask: 0x0018, // bits 3 and 4
                            choices: vec![
                                Choice::abstain("abstain from voting"),
                                Choice::no("no, do not work on integrating LN support", 0x0008),
                                Choice::yes("yes, begin work on integrating LN support", 0x0010),
                            ],
                        },
                        start_time: 1_493_164_800,  // 2017-04-26
                        expire_time: 1_508_976_000, // 2017-10-26
                    },
                ],
            ),
            (
                5,
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
                    start_time: 1_505_260_800,  // 2017-09-13
                    expire_time: 1_536_796_800, // 2018-09-13
                }],
            ),
            (
                6,
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
            ),
        ]),

        // enforce the current block version at 75%, reject older ones at 95%
        block_enforce_num_required: 750,
        block_reject_num_required: 950,
        block_upgrade_num_to_check: 1000,

        accept_non_std_txs: false,

        network_address_prefix: "D",
        pubkey_addr_id: [0x13, 0x86],      // Dk
        pubkey_hash_addr_id: [0x07, 0x3f], // Ds
        pkh_edwards_addr_id: [0x07, 0x1f], // De
        pkh_schnorr_addr_id: [0x07, 0x01], // DS
        script_hash_addr_id: [0x07, 0x1a], // Dc
        private_key_id: [0x22, 0xde],      // Pm
        hd_private_key_id: [0x02, 0xfd, 0xa4, 0xe8], // dprv
        hd_public_key_id: [0x02, 0xfd, 0xa9, 0x26],  // dpub
        slip0044_coin_type: 42,
        legacy_coin_type: 20,

        minimum_stake_diff: 200_000_000, // 2 coins
        ticket_pool_size: 8192,
        tickets_per_block: 5,
        ticket_maturity: 256,
        ticket_expiry: 40960, // 5 * ticket pool size
        coinbase_maturity: 256,
        sstx_change_maturity: 1,
        ticket_pool_size_weight: 4,
        stake_diff_alpha: 1,
        stake_diff_window_size: 144,
        stake_diff_windows: 20,
        stake_version_interval: 144 * 2 * 7, // ~1 week
        max_fresh_stake_per_block: 20,
        stake_enabled_height: 256 + 256, // coinbase maturity + ticket maturity
        stake_validation_height: 4096,   // ~14 days
        stake_base_sig_script: vec![0x00, 0x00],
        stake_majority_multiplier: 3,
        stake_majority_divisor: 4,

        organization_pk_script: hex_script("a914f5916158e3e2c4551c1796708db8367207ed13bb87"),
        organization_pk_script_version: 0,
        block_one_ledger: vec![],
    }
}
