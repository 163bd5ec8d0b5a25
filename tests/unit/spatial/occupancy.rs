//! Tests for bit-per-cell occupancy snapshots

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;
    use occugrid::{GridError, HalfExtents, Occupancy};

    fn cube() -> HalfExtents {
        HalfExtents::new(1, 1, 1).unwrap_or(HalfExtents::ZERO)
    }

    // Tests uniform snapshots count cells correctly
    // Verified by inverting the fill bit in all_blocked
    #[test]
    fn test_uniform_snapshots() {
        let blocked = Occupancy::all_blocked(cube());
        assert_eq!(blocked.len(), 27);
        assert_eq!(blocked.blocked_count(), 27);
        assert_eq!(blocked.free_count(), 0);

        let free = Occupancy::all_free(cube());
        assert_eq!(free.free_count(), 27);
        assert!(!free.is_empty());
    }

    // Tests cell updates land on the addressed cell only
    // Verified by indexing bits with the storage index
    #[test]
    fn test_set_and_query_cells() {
        let mut occupancy = Occupancy::all_blocked(cube());
        assert!(occupancy.set_blocked([1, -1, 0], false));

        assert_eq!(occupancy.is_blocked([1, -1, 0]), Some(false));
        assert_eq!(occupancy.is_blocked([-1, 1, 0]), Some(true));
        assert_eq!(occupancy.free_count(), 1);
        assert_eq!(occupancy.flags().first_zero(), Some(19));
    }

    // Tests cells outside the extents are ignored
    // Verified by clamping out-of-range cells
    #[test]
    fn test_out_of_range_cells() {
        let mut occupancy = Occupancy::all_blocked(cube());
        assert!(!occupancy.set_blocked([2, 0, 0], false));
        assert_eq!(occupancy.is_blocked([0, 0, -2]), None);
        assert_eq!(occupancy.free_count(), 0);
    }

    // Tests flags must cover every cell exactly
    // Verified by accepting any flag count
    #[test]
    fn test_from_flags_checks_length() {
        let result = Occupancy::from_flags(cube(), bitvec![1; 26]);
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                parameter: "blocked",
                ..
            })
        ));

        let occupancy = Occupancy::from_flags(cube(), bitvec![0; 27]);
        assert!(occupancy.is_ok_and(|o| o.free_count() == 27));
    }

    // Tests iteration pairs cells in traversal order with their flags
    // Verified by iterating flags in reverse
    #[test]
    fn test_iter_pairs_cells_with_flags() {
        let mut occupancy = Occupancy::all_blocked(cube());
        occupancy.set_blocked([-1, -1, 0], false);

        let entries: Vec<_> = occupancy.iter().collect();
        assert_eq!(entries.len(), 27);
        assert_eq!(entries.first(), Some(&([-1, -1, -1], true)));
        assert_eq!(entries.get(1), Some(&([-1, -1, 0], false)));
        assert_eq!(occupancy.extents(), cube());
    }
}
