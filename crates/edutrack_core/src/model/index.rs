//! One-based display index for list-targeting commands.

/// Index of a person as shown in the displayed list.
///
/// Users type 1-based positions; the model stores 0-based positions.
/// Holding a `DisplayedIndex` says nothing about bounds; commands must
/// check it against the current filtered list before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedIndex {
    zero_based: usize,
}

impl DisplayedIndex {
    /// Builds an index from a 1-based position. Returns `None` for zero.
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(|zero_based| Self { zero_based })
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }
}

#[cfg(test)]
mod tests {
    use super::DisplayedIndex;

    #[test]
    fn one_based_maps_to_zero_based() {
        let index = DisplayedIndex::from_one_based(1).unwrap();
        assert_eq!(index.zero_based(), 0);
        assert_eq!(index.one_based(), 1);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(DisplayedIndex::from_one_based(0).is_none());
    }
}
