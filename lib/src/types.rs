//! The slice of the wire types needed to carry genesis blocks as literal data.
//!
//! Only the block header has a byte encoding here, since the genesis hash is
//! defined over it. Transaction serialization belongs to the wire layer.

mod block;
mod transaction;

pub use block::*;
pub use transaction::*;

pub(crate) use transaction::genesis_coinbase;
