//! Consensus parameters of a single network.
//!
//! A [`Params`] value is plain data plus a handful of pure derivations. The
//! registry builds one per network, runs [`Params::validate`] once and hands
//! out `&'static` references from then on.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::U256;
use crate::checkpoint::{self, Checkpoint};
use crate::error::{ConfigError, Result};
use crate::hash::Hash;
use crate::network::{CurrencyNet, Network};
use crate::pow::compact_to_target;
use crate::types::{Block, HeaderHasher};
use crate::vote::{self, ConsensusDeployment, VOTE_ID_MAX_BLOCK_SIZE, Vote};

/// The work, stake and tax proportions of every network add up to this.
pub const SUBSIDY_PROPORTION_TOTAL: u16 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsSeed {
    pub host: &'static str,
    /// Whether the seeder can filter the addresses it returns by service bits.
    pub has_filtering: bool,
}

/// An output credited by the block after genesis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPayout {
    pub address: &'static str,
    /// Amount in atoms.
    pub amount: u64,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub network: Network,
    pub name: &'static str,
    pub net: CurrencyNet,
    pub default_port: u16,
    pub dns_seeds: Vec<DnsSeed>,

    pub genesis_block: Block,
    pub genesis_hash: Hash,

    /// Highest proof-of-work target, i.e. the lowest difficulty.
    pub pow_limit: U256,
    /// `pow_limit` in compact form.
    pub pow_limit_bits: u32,
    /// Whether a block may use the minimum difficulty once no block has been
    /// found for `min_diff_reduction_time`.
    pub reduce_min_difficulty: bool,
    pub min_diff_reduction_time: TimeDelta,
    /// Whether CPU mining through the node is allowed.
    pub generate_supported: bool,
    pub maximum_block_sizes: Vec<u32>,
    pub max_tx_size: u32,
    pub target_time_per_block: TimeDelta,
    /// Exponential decay factor applied to older retarget windows.
    pub work_diff_alpha: u64,
    pub work_diff_window_size: u64,
    pub work_diff_windows: u64,
    pub target_timespan: TimeDelta,
    /// Bound on how much a single retarget may move the difficulty.
    pub retarget_adjustment_factor: u64,

    /// Subsidy of the first reduction interval, in atoms.
    pub base_subsidy: u64,
    pub mul_subsidy: u64,
    pub div_subsidy: u64,
    pub subsidy_reduction_interval: u64,
    pub work_reward_proportion: u16,
    pub stake_reward_proportion: u16,
    pub block_tax_proportion: u16,

    pub checkpoints: Vec<Checkpoint>,

    /// Non-abstaining votes needed for a rule change vote to count.
    pub rule_change_activation_quorum: u32,
    pub rule_change_activation_multiplier: u32,
    pub rule_change_activation_divisor: u32,
    /// Blocks per voting period.
    pub rule_change_activation_interval: u32,
    /// Votes keyed by the stake version that introduced them.
    pub deployments: BTreeMap<u32, Vec<ConsensusDeployment>>,

    pub block_enforce_num_required: u64,
    pub block_reject_num_required: u64,
    pub block_upgrade_num_to_check: u64,

    /// Mempool policy: relay non-standard transactions.
    pub accept_non_std_txs: bool,

    pub network_address_prefix: &'static str,
    pub pubkey_addr_id: [u8; 2],
    pub pubkey_hash_addr_id: [u8; 2],
    pub pkh_edwards_addr_id: [u8; 2],
    pub pkh_schnorr_addr_id: [u8; 2],
    pub script_hash_addr_id: [u8; 2],
    pub private_key_id: [u8; 2],
    pub hd_private_key_id: [u8; 4],
    pub hd_public_key_id: [u8; 4],
    /// SLIP-0044 coin type used in BIP-44 derivation paths.
    pub slip0044_coin_type: u32,
    /// Coin type used before the SLIP-0044 registration.
    pub legacy_coin_type: u32,

    pub minimum_stake_diff: u64,
    pub ticket_pool_size: u16,
    pub tickets_per_block: u16,
    pub ticket_maturity: u16,
    pub ticket_expiry: u32,
    pub coinbase_maturity: u16,
    pub sstx_change_maturity: u16,
    pub ticket_pool_size_weight: u16,
    pub stake_diff_alpha: u64,
    pub stake_diff_window_size: u64,
    pub stake_diff_windows: u64,
    pub stake_version_interval: u64,
    pub max_fresh_stake_per_block: u8,
    /// First height at which tickets may be purchased and mature.
    pub stake_enabled_height: u64,
    /// First height at which blocks must carry votes.
    pub stake_validation_height: u64,
    pub stake_base_sig_script: Vec<u8>,
    pub stake_majority_multiplier: u16,
    pub stake_majority_divisor: u16,

    pub organization_pk_script: Vec<u8>,
    pub organization_pk_script_version: u16,
    pub block_one_ledger: Vec<TokenPayout>,
}

impl Params {
    pub fn total_subsidy_proportions(&self) -> u16 {
        self.work_reward_proportion + self.stake_reward_proportion + self.block_tax_proportion
    }

    pub fn is_stake_enabled_height(&self, height: u64) -> bool {
        height >= self.stake_enabled_height
    }

    pub fn is_stake_validation_height(&self, height: u64) -> bool {
        height >= self.stake_validation_height
    }

    /// Maximum block size for blocks of the given version.
    ///
    /// Each `maxblocksize` vote deployed below `version` moves one entry up the
    /// size table. The table only ever grows, so versions past the last entry
    /// use the last entry.
    pub fn block_max_size_for_version(&self, version: u32) -> u32 {
        let index = self
            .deployments
            .range(..version)
            .flat_map(|(_, deployments)| deployments)
            .filter(|deployment| deployment.vote.id == VOTE_ID_MAX_BLOCK_SIZE)
            .count();
        let last = self.maximum_block_sizes.len().saturating_sub(1);
        self.maximum_block_sizes
            .get(index.min(last))
            .copied()
            .unwrap_or(self.max_tx_size)
    }

    /// Number of yes votes out of a full interval needed to pass a rule change.
    pub fn rule_change_activation_threshold(&self) -> u32 {
        let total = u64::from(self.rule_change_activation_interval) * u64::from(self.tickets_per_block);
        let threshold = total * u64::from(self.rule_change_activation_multiplier)
            / u64::from(self.rule_change_activation_divisor.max(1));
        u32::try_from(threshold).unwrap_or(u32::MAX)
    }

    pub fn deployments_at(&self, version: u32) -> &[ConsensusDeployment] {
        self.deployments
            .get(&version)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Votes deployed at `version` that are open at `time`. A version with no
    /// deployments simply has no votes.
    pub fn votes_at(&self, version: u32, time: DateTime<Utc>) -> Vec<&Vote> {
        self.deployments_at(version)
            .iter()
            .filter(|deployment| deployment.is_open_at(time))
            .map(|deployment| &deployment.vote)
            .collect()
    }

    pub fn deployment_by_vote_id(&self, id: &str) -> Option<(u32, &ConsensusDeployment)> {
        self.deployments.iter().find_map(|(version, deployments)| {
            deployments
                .iter()
                .find(|deployment| deployment.vote.id == id)
                .map(|deployment| (*version, deployment))
        })
    }

    pub fn checkpoint_at(&self, height: u64) -> Option<&Checkpoint> {
        checkpoint::find(&self.checkpoints, height)
    }

    pub fn latest_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    pub fn genesis_time(&self) -> DateTime<Utc> {
        self.genesis_block.header.time()
    }

    /// Hashes the genesis header with the chain's hash function and compares
    /// the result with the recorded genesis hash.
    pub fn check_genesis_hash(&self, hasher: &impl HeaderHasher) -> Result<()> {
        let computed = self.genesis_block.header.hash_with(hasher);
        if computed != self.genesis_hash {
            return Err(ConfigError::GenesisHashMismatch {
                network: self.name,
                expected: self.genesis_hash,
                computed,
            });
        }
        Ok(())
    }

    fn expected_timespan(&self) -> Option<TimeDelta> {
        let window = i32::try_from(self.work_diff_window_size).ok()?;
        self.target_time_per_block.checked_mul(window)
    }

    /// Checks every cross-field invariant. Any error means the node must not
    /// start with these parameters.
    pub fn validate(&self) -> Result<()> {
        let network = self.name;

        if self.expected_timespan() != Some(self.target_timespan) {
            return Err(ConfigError::TargetTimespan { network });
        }

        let limit_from_bits = compact_to_target(self.pow_limit_bits);
        if limit_from_bits.is_zero() || limit_from_bits > self.pow_limit {
            return Err(ConfigError::PowLimitBits {
                network,
                bits: self.pow_limit_bits,
            });
        }

        let sum = self.total_subsidy_proportions();
        if sum != SUBSIDY_PROPORTION_TOTAL {
            return Err(ConfigError::SubsidyProportions {
                network,
                sum,
                expected: SUBSIDY_PROPORTION_TOTAL,
            });
        }
        if self.mul_subsidy == 0
            || self.mul_subsidy >= self.div_subsidy
            || self.subsidy_reduction_interval == 0
        {
            return Err(ConfigError::SubsidyDecay {
                network,
                mul: self.mul_subsidy,
                div: self.div_subsidy,
                interval: self.subsidy_reduction_interval,
            });
        }

        let sizes_ok = !self.maximum_block_sizes.is_empty()
            && self.maximum_block_sizes.windows(2).all(|pair| pair[0] <= pair[1])
            && self.max_tx_size <= self.maximum_block_sizes[0];
        if !sizes_ok {
            return Err(ConfigError::BlockSizes { network });
        }

        if self.rule_change_activation_multiplier == 0
            || self.rule_change_activation_multiplier > self.rule_change_activation_divisor
        {
            return Err(ConfigError::RuleChangeFraction {
                network,
                mul: self.rule_change_activation_multiplier,
                div: self.rule_change_activation_divisor,
            });
        }
        let votes_per_interval =
            u64::from(self.rule_change_activation_interval) * u64::from(self.tickets_per_block);
        if self.rule_change_activation_quorum == 0
            || u64::from(self.rule_change_activation_quorum) > votes_per_interval
        {
            return Err(ConfigError::RuleChangeQuorum {
                network,
                quorum: self.rule_change_activation_quorum,
                total: u32::try_from(votes_per_interval).unwrap_or(u32::MAX),
            });
        }

        if self.stake_majority_multiplier == 0
            || self.stake_majority_multiplier > self.stake_majority_divisor
        {
            return Err(ConfigError::StakeMajority {
                network,
                mul: self.stake_majority_multiplier,
                div: self.stake_majority_divisor,
            });
        }

        self.validate_stake_heights()?;

        let (enforce, reject, check) = (
            self.block_enforce_num_required,
            self.block_reject_num_required,
            self.block_upgrade_num_to_check,
        );
        if enforce == 0 || enforce > reject || reject > check {
            return Err(ConfigError::UpgradeThresholds {
                network,
                enforce,
                reject,
                check,
            });
        }

        if let Some((previous, height)) = checkpoint::first_out_of_order(&self.checkpoints) {
            return Err(ConfigError::CheckpointOrder {
                network,
                height,
                previous,
            });
        }

        for (version, deployments) in &self.deployments {
            vote::validate_version(deployments).map_err(|source| ConfigError::Deployment {
                network,
                version: *version,
                source,
            })?;
        }

        if let Some(magic) = self.duplicate_magic() {
            return Err(ConfigError::DuplicateAddressMagic { network, magic });
        }

        Ok(())
    }

    fn validate_stake_heights(&self) -> Result<()> {
        let fail = |reason| {
            Err(ConfigError::StakeHeights {
                network: self.name,
                reason,
            })
        };

        if self.tickets_per_block == 0 || self.ticket_pool_size == 0 {
            return fail("ticket pool and tickets per block must be nonzero");
        }
        if u32::from(self.ticket_maturity) >= self.ticket_expiry {
            return fail("tickets expire before they mature");
        }
        if self.stake_enabled_height < u64::from(self.coinbase_maturity) {
            return fail("stake enabled before the first coinbase matures");
        }
        if self.stake_enabled_height > self.stake_validation_height {
            return fail("stake validation starts before stake is enabled");
        }
        Ok(())
    }
}
