use thiserror::Error;

use crate::hash::Hash;
use crate::network::CurrencyNet;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("unknown network magic: {0}")]
    UnknownNetworkMagic(CurrencyNet),
    #[error("unknown hd private key id: {}", hex::encode(.0))]
    UnknownHdKeyId([u8; 4]),

    #[error("{network}: target timespan must be target time per block * work diff window size")]
    TargetTimespan { network: &'static str },
    #[error("{network}: subsidy proportions sum to {sum}, expected {expected}")]
    SubsidyProportions {
        network: &'static str,
        sum: u16,
        expected: u16,
    },
    #[error("{network}: subsidy decay {mul}/{div} over {interval} blocks would not decrease")]
    SubsidyDecay {
        network: &'static str,
        mul: u64,
        div: u64,
        interval: u64,
    },
    #[error("{network}: maximum block sizes must be non-empty, non-decreasing and cover the max tx size")]
    BlockSizes { network: &'static str },
    #[error("{network}: rule change fraction {mul}/{div} is not in (0, 1]")]
    RuleChangeFraction {
        network: &'static str,
        mul: u32,
        div: u32,
    },
    #[error("{network}: rule change quorum {quorum} exceeds the {total} votes in an interval")]
    RuleChangeQuorum {
        network: &'static str,
        quorum: u32,
        total: u32,
    },
    #[error("{network}: stake majority {mul}/{div} is not in (0, 1]")]
    StakeMajority {
        network: &'static str,
        mul: u16,
        div: u16,
    },
    #[error("{network}: stake heights are inconsistent ({reason})")]
    StakeHeights {
        network: &'static str,
        reason: &'static str,
    },
    #[error("{network}: block upgrade thresholds {enforce}/{reject} out of {check} are inconsistent")]
    UpgradeThresholds {
        network: &'static str,
        enforce: u64,
        reject: u64,
        check: u64,
    },
    #[error("{network}: pow limit bits {bits:#010x} decode to a target above the pow limit")]
    PowLimitBits { network: &'static str, bits: u32 },
    #[error("{network}: checkpoint at height {height} does not follow height {previous}")]
    CheckpointOrder {
        network: &'static str,
        height: u64,
        previous: u64,
    },
    #[error("{network}: magic {} is used by more than one address or key kind", hex::encode(.magic))]
    DuplicateAddressMagic {
        network: &'static str,
        magic: Vec<u8>,
    },
    #[error("{network}: genesis hash {expected} does not match header hash {computed}")]
    GenesisHashMismatch {
        network: &'static str,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network}: deployment at version {version}: {source}")]
    Deployment {
        network: &'static str,
        version: u32,
        source: VoteError,
    },
}

/// Violations of the vote and choice encoding rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error("vote {0} has an empty mask")]
    EmptyMask(&'static str),
    #[error("vote {vote} has {count} abstain choices, expected exactly one")]
    AbstainCount { vote: &'static str, count: usize },
    #[error("vote {vote}: abstain choice {choice} must have zero bits")]
    AbstainBits {
        vote: &'static str,
        choice: &'static str,
    },
    #[error("vote {vote}: choice {choice} bits {bits:#06x} fall outside mask {mask:#06x}")]
    BitsOutsideMask {
        vote: &'static str,
        choice: &'static str,
        bits: u16,
        mask: u16,
    },
    #[error("vote {vote}: non-abstain choice {choice} has zero bits")]
    ZeroBits {
        vote: &'static str,
        choice: &'static str,
    },
    #[error("vote {vote}: choices {first} and {second} share bits {bits:#06x}")]
    DuplicateBits {
        vote: &'static str,
        first: &'static str,
        second: &'static str,
        bits: u16,
    },
    #[error("votes {first} and {second} have overlapping masks")]
    OverlappingMasks {
        first: &'static str,
        second: &'static str,
    },
    #[error("vote id {0} is deployed more than once")]
    DuplicateVoteId(&'static str),
    #[error("vote {vote} expires at {expire_time}, not after its start {start_time}")]
    EmptyWindow {
        vote: &'static str,
        start_time: i64,
        expire_time: i64,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
