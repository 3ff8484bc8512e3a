use chrono::{DateTime, Utc};

use crate::hash::Hash;
use crate::types::Transaction;

/// Size in bytes of a serialized block header.
pub const BLOCK_HEADER_SIZE: usize = 180;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    /// block version, also carries the rule-change version of the block.
    pub version: i32,
    pub prev_block: Hash,
    /// merkle root of the regular transaction tree.
    pub merkle_root: Hash,
    /// merkle root of the stake transaction tree.
    pub stake_root: Hash,
    pub vote_bits: u16,
    /// state of the lottery at the end of the previous block.
    pub final_state: [u8; 6],
    pub voters: u16,
    pub fresh_stake: u8,
    pub revocations: u8,
    pub pool_size: u32,
    /// compact proof-of-work target.
    pub bits: u32,
    /// stake difficulty, i.e. the price of a ticket.
    pub sbits: i64,
    pub height: u32,
    pub size: u32,
    /// seconds since the Unix epoch.
    pub timestamp: u32,
    pub nonce: u32,
    pub extra_data: [u8; 32],
    pub stake_version: u32,
}

impl BlockHeader {
    /// Canonical little-endian encoding. This is the preimage of the block hash.
    pub fn serialize(&self) -> [u8; BLOCK_HEADER_SIZE] {
        let mut buf = [0u8; BLOCK_HEADER_SIZE];
        let mut pos = 0;
        let mut put = |bytes: &[u8]| {
            buf[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        };

        put(&self.version.to_le_bytes());
        put(self.prev_block.as_bytes());
        put(self.merkle_root.as_bytes());
        put(self.stake_root.as_bytes());
        put(&self.vote_bits.to_le_bytes());
        put(&self.final_state);
        put(&self.voters.to_le_bytes());
        put(&[self.fresh_stake, self.revocations]);
        put(&self.pool_size.to_le_bytes());
        put(&self.bits.to_le_bytes());
        put(&self.sbits.to_le_bytes());
        put(&self.height.to_le_bytes());
        put(&self.size.to_le_bytes());
        put(&self.timestamp.to_le_bytes());
        put(&self.nonce.to_le_bytes());
        put(&self.extra_data);
        put(&self.stake_version.to_le_bytes());

        buf
    }

    pub fn time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(i64::from(self.timestamp), 0)
            .expect("BUG: u32 timestamps are always representable")
    }

    pub fn hash_with(&self, hasher: &impl HeaderHasher) -> Hash {
        hasher.hash_header(&self.serialize())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    pub stake_transactions: Vec<Transaction>,
}

/// The chain's block hash function. Supplied by the caller, since hashing is
/// not part of this crate.
pub trait HeaderHasher {
    fn hash_header(&self, header: &[u8]) -> Hash;
}

impl<F> HeaderHasher for F
where
    F: Fn(&[u8]) -> Hash,
{
    fn hash_header(&self, header: &[u8]) -> Hash {
        self(header)
    }
}
