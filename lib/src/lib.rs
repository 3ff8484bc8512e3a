//! Consensus parameters for every supported network.
//!
//! A node picks its network once at startup and reads everything that must
//! match the rest of that network from the returned [`Params`]: the genesis
//! block, proof-of-work and stake retargeting, the subsidy schedule, address
//! prefixes, checkpoints and the votes that gate rule changes.
//!
//! ```
//! use chaincfg::Network;
//!
//! let params = Network::RegNet.params();
//! assert_eq!(params.stake_validation_height, 144);
//! assert_eq!(params.subsidy_at(0), params.base_subsidy);
//! ```

pub mod address;
pub mod checkpoint;
pub mod error;
pub mod hash;
pub mod network;
mod networks;
pub mod params;
pub mod pow;
pub mod registry;
mod subsidy;
pub mod types;
pub mod vote;

use uint::construct_uint;

construct_uint! {
    // unsigned 256-bit integer, 4 x 64bit limbs
    pub struct U256(4);
}

pub use address::{AddressKind, HdKeyKind};
pub use checkpoint::Checkpoint;
pub use error::{ConfigError, VoteError};
pub use hash::Hash;
pub use network::{CurrencyNet, Network};
pub use params::{DnsSeed, Params, SUBSIDY_PROPORTION_TOTAL, TokenPayout};
pub use types::HeaderHasher;
pub use vote::{Choice, ChoiceKind, ConsensusDeployment, Vote};
