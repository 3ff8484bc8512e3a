//! 32-byte block hash as stored on the wire.
//!
//! Hashes are kept in their internal (little-endian) byte order and displayed
//! byte-reversed, which is the form found in block explorers and in the
//! checkpoint tables of this crate.

use std::fmt;
use std::str::FromStr;

pub const HASH_SIZE: usize = 32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    pub const ZERO: Hash = Hash([0; HASH_SIZE]);

    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; HASH_SIZE]
    }

    /// Parses a literal from the tables in `networks`. A malformed literal is a
    /// bug in the registry itself, so this panics instead of returning an error.
    pub(crate) fn literal(s: &str) -> Self {
        s.parse().expect("BUG: malformed hash literal")
    }
}

impl FromStr for Hash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(Hash(bytes))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        f.write_str(&hex::encode(reversed))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_byte_reversed() {
        let mut bytes = [0u8; HASH_SIZE];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let hash = Hash::from_bytes(bytes);
        let shown = hash.to_string();
        assert!(shown.starts_with("01"));
        assert!(shown.ends_with("ab"));
        assert_eq!(shown.parse::<Hash>().unwrap(), hash);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("abcd".parse::<Hash>().is_err());
        assert!(Hash::ZERO.is_zero());
    }
}
