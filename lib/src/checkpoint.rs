use crate::hash::Hash;

/// A known good block. Blocks at or below the latest checkpoint may be trusted
/// without full script validation; a checkpoint is never a substitute for
/// checking that the chain actually connects through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: Hash,
}

impl Checkpoint {
    pub(crate) fn literal(height: u64, hash: &str) -> Self {
        Checkpoint {
            height,
            hash: Hash::literal(hash),
        }
    }
}

/// Finds the checkpoint at exactly `height` in a table sorted by height.
pub fn find(checkpoints: &[Checkpoint], height: u64) -> Option<&Checkpoint> {
    checkpoints
        .binary_search_by_key(&height, |checkpoint| checkpoint.height)
        .ok()
        .map(|idx| &checkpoints[idx])
}

/// Returns the first pair of neighbours whose heights do not strictly increase.
pub(crate) fn first_out_of_order(checkpoints: &[Checkpoint]) -> Option<(u64, u64)> {
    checkpoints
        .windows(2)
        .find(|pair| pair[1].height <= pair[0].height)
        .map(|pair| (pair[0].height, pair[1].height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Checkpoint> {
        [10u64, 20, 35]
            .into_iter()
            .map(|height| Checkpoint {
                height,
                hash: Hash::from_bytes([height as u8; 32]),
            })
            .collect()
    }

    #[test]
    fn finds_exact_heights_only() {
        let checkpoints = table();
        assert_eq!(find(&checkpoints, 20).unwrap().hash, Hash::from_bytes([20; 32]));
        assert!(find(&checkpoints, 21).is_none());
        assert!(find(&checkpoints, 0).is_none());
        assert!(find(&[], 10).is_none());
    }

    #[test]
    fn detects_ordering_violations() {
        let mut checkpoints = table();
        assert_eq!(first_out_of_order(&checkpoints), None);
        checkpoints[2].height = 20;
        assert_eq!(first_out_of_order(&checkpoints), Some((20, 20)));
    }
}
