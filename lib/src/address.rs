//! Prefix bytes identifying encoded addresses and keys.
//!
//! The encoders and decoders live with the base58 codec; this is the table
//! they consult.

use crate::params::Params;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay to a secp256k1 public key.
    PubKey,
    /// Pay to the hash of a secp256k1 public key.
    PubKeyHash,
    /// Pay to the hash of an Ed25519 public key.
    PubKeyHashEdwards,
    /// Pay to the hash of a secp256k1 Schnorr public key.
    PubKeyHashSchnorr,
    ScriptHash,
    /// WIF private key.
    PrivateKey,
}

impl AddressKind {
    pub const ALL: [AddressKind; 6] = [
        AddressKind::PubKey,
        AddressKind::PubKeyHash,
        AddressKind::PubKeyHashEdwards,
        AddressKind::PubKeyHashSchnorr,
        AddressKind::ScriptHash,
        AddressKind::PrivateKey,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HdKeyKind {
    Private,
    Public,
}

impl Params {
    pub fn address_magic(&self, kind: AddressKind) -> [u8; 2] {
        match kind {
            AddressKind::PubKey => self.pubkey_addr_id,
            AddressKind::PubKeyHash => self.pubkey_hash_addr_id,
            AddressKind::PubKeyHashEdwards => self.pkh_edwards_addr_id,
            AddressKind::PubKeyHashSchnorr => self.pkh_schnorr_addr_id,
            AddressKind::ScriptHash => self.script_hash_addr_id,
            AddressKind::PrivateKey => self.private_key_id,
        }
    }

    pub fn address_kind(&self, magic: [u8; 2]) -> Option<AddressKind> {
        AddressKind::ALL
            .into_iter()
            .find(|kind| self.address_magic(*kind) == magic)
    }

    pub fn hd_key_magic(&self, kind: HdKeyKind) -> [u8; 4] {
        match kind {
            HdKeyKind::Private => self.hd_private_key_id,
            HdKeyKind::Public => self.hd_public_key_id,
        }
    }

    pub fn hd_key_kind(&self, magic: [u8; 4]) -> Option<HdKeyKind> {
        [HdKeyKind::Private, HdKeyKind::Public]
            .into_iter()
            .find(|kind| self.hd_key_magic(*kind) == magic)
    }

    /// First magic shared by two address kinds or by both hd key kinds.
    pub(crate) fn duplicate_magic(&self) -> Option<Vec<u8>> {
        for (i, kind) in AddressKind::ALL.iter().enumerate() {
            let magic = self.address_magic(*kind);
            if AddressKind::ALL[..i]
                .iter()
                .any(|earlier| self.address_magic(*earlier) == magic)
            {
                return Some(magic.to_vec());
            }
        }
        if self.hd_private_key_id == self.hd_public_key_id {
            return Some(self.hd_private_key_id.to_vec());
        }
        None
    }
}
