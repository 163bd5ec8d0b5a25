//! Tests for half-extent validation and coordinate/slot mapping

#[cfg(test)]
mod tests {
    use occugrid::io::configuration::MAX_HALF_EXTENT;
    use occugrid::{GridError, HalfExtents};
    use std::collections::HashSet;

    fn extents(x: u32, y: u32, z: u32) -> HalfExtents {
        HalfExtents::new(x, y, z).unwrap_or(HalfExtents::ZERO)
    }

    // Tests spans and storage shape use 2 * half + 1 slots per axis
    // Verified by dropping the +1 padding from shape()
    #[test]
    fn test_dimensions_and_shape() {
        let e = extents(1, 2, 3);
        assert_eq!((e.width(), e.height(), e.depth()), (2, 4, 6));
        assert_eq!(e.shape(), (5, 3, 7));
        assert_eq!(e.slot_count(), 105);
        assert_eq!(HalfExtents::ZERO.slot_count(), 1);
    }

    // Tests extents beyond the configured maximum are rejected
    // Verified by removing the limit check
    #[test]
    fn test_rejects_oversized_extents() {
        let result = HalfExtents::new(0, MAX_HALF_EXTENT + 1, 0);
        assert!(matches!(
            result,
            Err(GridError::InvalidExtent {
                parameter: "half_height",
                ..
            })
        ));
        assert!(HalfExtents::new(MAX_HALF_EXTENT, 0, 0).is_ok());
    }

    // Tests inclusive bounds on every axis
    // Verified by using exclusive upper bounds
    #[test]
    fn test_contains_is_inclusive() {
        let e = extents(1, 2, 3);
        assert!(e.contains([1, 2, 3]));
        assert!(e.contains([-1, -2, -3]));
        assert!(!e.contains([2, 0, 0]));
        assert!(!e.contains([0, -3, 0]));
        assert!(!e.contains([0, 0, 4]));
        assert!(!e.contains([i32::MIN, 0, 0]));
        assert!(!e.contains([0, i32::MAX, 0]));
    }

    // Tests the linear index formula with Y slowest and Z fastest
    // Verified by swapping the X and Y strides
    #[test]
    fn test_linear_index_formula() {
        let e = extents(1, 2, 3);
        assert_eq!(e.linear_index([-1, -2, -3]), Some(0));
        assert_eq!(e.linear_index([-1, -2, -2]), Some(1));
        assert_eq!(e.linear_index([0, -2, -3]), Some(7));
        assert_eq!(e.linear_index([-1, -1, -3]), Some(21));
        assert_eq!(e.linear_index([1, 2, 3]), Some(104));
        for [x, y, z] in e.cells() {
            let expected = (y + 2) * 3 * 7 + (x + 1) * 7 + (z + 3);
            assert_eq!(e.linear_index([x, y, z]), usize::try_from(expected).ok());
        }
    }

    // Tests the index is a bijection between valid cells and slots
    // Verified by mapping z with the x stride
    #[test]
    fn test_linear_index_is_bijective() {
        for e in [extents(0, 0, 0), extents(2, 1, 0), extents(1, 2, 3), extents(3, 3, 3)] {
            let indices: HashSet<usize> = e.cells().filter_map(|c| e.linear_index(c)).collect();
            assert_eq!(indices.len(), e.slot_count());
            assert!(indices.iter().all(|&i| i < e.slot_count()));
            for cell in e.cells() {
                let index = e.linear_index(cell);
                assert_eq!(index.and_then(|i| e.coordinate_at(i)), Some(cell));
            }
        }
    }

    // Tests out-of-range lookups never produce an index
    // Verified by removing the bounds check in storage_index
    #[test]
    fn test_out_of_range_has_no_index() {
        let e = extents(1, 1, 1);
        assert_eq!(e.linear_index([2, 0, 0]), None);
        assert_eq!(e.storage_index([0, 0, -2]), None);
        assert_eq!(e.traversal_index([0, 5, 0]), None);
        assert_eq!(e.coordinate_at(e.slot_count()), None);
    }

    // Tests traversal runs X outer, Y middle, Z inner
    // Verified by iterating in storage order instead
    #[test]
    fn test_cells_traversal_order() {
        let e = extents(1, 1, 1);
        let cells: Vec<[i32; 3]> = e.cells().collect();
        assert_eq!(cells.len(), 27);
        assert_eq!(cells.first(), Some(&[-1, -1, -1]));
        assert_eq!(cells.get(1), Some(&[-1, -1, 0]));
        assert_eq!(cells.get(3), Some(&[-1, 0, -1]));
        assert_eq!(cells.get(9), Some(&[0, -1, -1]));
        assert_eq!(cells.last(), Some(&[1, 1, 1]));

        for (position, cell) in cells.iter().enumerate() {
            assert_eq!(e.traversal_index(*cell), Some(position));
        }
    }

    // Tests traversal and storage orders genuinely differ
    // Verified by returning the linear index from traversal_index
    #[test]
    fn test_traversal_differs_from_storage_order() {
        let e = extents(1, 1, 0);
        assert_eq!(e.traversal_index([1, -1, 0]), Some(6));
        assert_eq!(e.linear_index([1, -1, 0]), Some(2));
    }

    // Tests storage indices map back to coordinates
    // Verified by swapping row and column in coordinate_from_storage
    #[test]
    fn test_storage_index_round_trip() {
        let e = extents(2, 1, 3);
        assert_eq!(e.storage_index([-2, 1, 0]), Some([2, 0, 3]));
        assert_eq!(e.coordinate_from_storage([2, 0, 3]), [-2, 1, 0]);
    }

    // Tests display lists the three half-extents
    // Verified by printing full widths
    #[test]
    fn test_display() {
        assert_eq!(extents(1, 2, 3).to_string(), "±1x±2x±3");
    }
}
