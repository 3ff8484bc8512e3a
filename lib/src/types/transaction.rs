use crate::hash::Hash;

/// Block height recorded in inputs whose origin is not known.
pub const NULL_BLOCK_HEIGHT: u32 = 0x0000_0000;
/// Block index recorded in inputs whose origin is not known.
pub const NULL_BLOCK_INDEX: u32 = 0xffff_ffff;
/// Input value recorded when the spent amount is not known.
pub const NULL_VALUE_IN: i64 = -1;

/// Which parts of a transaction are present in its serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxSerializeType {
    Full,
    NoWitness,
    OnlyWitness,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
    /// 0 for the regular transaction tree, 1 for the stake tree.
    pub tree: i8,
}

impl OutPoint {
    /// The outpoint spent by coinbase inputs.
    pub const fn null() -> Self {
        OutPoint {
            hash: Hash::ZERO,
            index: u32::MAX,
            tree: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    pub previous_out_point: OutPoint,
    pub sequence: u32,
    pub value_in: i64,
    pub block_height: u32,
    pub block_index: u32,
    pub signature_script: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    pub value: i64,
    pub version: u16,
    pub pk_script: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub ser_type: TxSerializeType,
    pub version: u16,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
    pub expiry: u32,
}

impl Transaction {
    /// A coinbase spends exactly one input, and that input has the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        matches!(self.inputs.as_slice(), [input] if input.previous_out_point == OutPoint::null())
    }
}

/// Builds the single-input, single-output coinbase every genesis block carries.
pub(crate) fn genesis_coinbase(signature_script: Vec<u8>, pk_script: Vec<u8>) -> Transaction {
    Transaction {
        ser_type: TxSerializeType::Full,
        version: 1,
        inputs: vec![TransactionInput {
            previous_out_point: OutPoint::null(),
            sequence: u32::MAX,
            value_in: NULL_VALUE_IN,
            block_height: NULL_BLOCK_HEIGHT,
            block_index: NULL_BLOCK_INDEX,
            signature_script,
        }],
        outputs: vec![TransactionOutput {
            value: 0,
            version: 0,
            pk_script,
        }],
        lock_time: 0,
        expiry: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_coinbase_is_a_coinbase() {
        let tx = genesis_coinbase(vec![0x00, 0x00], vec![0x51]);
        assert!(tx.is_coinbase());

        let mut spend = tx.clone();
        spend.inputs[0].previous_out_point.index = 0;
        assert!(!spend.is_coinbase());
    }
}
