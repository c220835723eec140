//! Property-based tests for `Collection` invariants.
//!
//! Verifies the ordering, key-preservation, and reconstruction laws of the
//! transformation operations using proptest.

use gather::Collection;
use proptest::prelude::*;

fn values_of<K: Clone, V: Clone>(collection: &Collection<K, V>) -> Vec<V> {
    collection.values().cloned().collect()
}

// =============================================================================
// Construction Laws
// =============================================================================

proptest! {
    /// Round-trip law: constructing from a sequence reproduces it.
    #[test]
    fn prop_construction_round_trip(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::from(elements.clone());
        let expected: Vec<(usize, i32)> = elements.into_iter().enumerate().collect();
        prop_assert_eq!(collection.all(), expected);
    }

    /// Keyed round-trip law: distinct keyed pairs reproduce in order.
    #[test]
    fn prop_keyed_round_trip(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let pairs: Vec<(String, i32)> = values
            .iter()
            .enumerate()
            .map(|(index, value)| (format!("key-{index}"), *value))
            .collect();
        let collection: Collection<String, i32> = pairs.clone().into_iter().collect();
        prop_assert_eq!(collection.all(), pairs);
    }
}

// =============================================================================
// Filter and Partition Laws
// =============================================================================

proptest! {
    /// Filter preserves the original key of every survivor.
    #[test]
    fn prop_filter_preserves_keys(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::from(elements.clone());
        let filtered = collection.filter(|_, value| value % 2 == 0);

        let expected: Vec<(usize, i32)> = elements
            .into_iter()
            .enumerate()
            .filter(|(_, value)| value % 2 == 0)
            .collect();
        prop_assert_eq!(filtered.all(), expected);
    }

    /// Filter and reject are complementary and reconstruct the receiver.
    #[test]
    fn prop_filter_reject_reconstruct(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::from(elements);
        let kept = collection.filter(|_, value| *value > 0);
        let dropped = collection.reject(|_, value| *value > 0);

        prop_assert_eq!(kept.len() + dropped.len(), collection.len());
        for (key, value) in &collection {
            let in_kept = kept.get(key) == Some(value);
            let in_dropped = dropped.get(key) == Some(value);
            prop_assert!(in_kept != in_dropped);
        }
    }

    /// Partition reconstructs the receiver disjointly by key.
    #[test]
    fn prop_partition_reconstructs(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::from(elements);
        let (matching, non_matching) = collection.partition(|_, value| value % 3 == 0);

        prop_assert_eq!(matching.len() + non_matching.len(), collection.len());
        for (key, value) in &collection {
            prop_assert!(
                matching.get(key) == Some(value) || non_matching.get(key) == Some(value)
            );
        }
        for (key, _) in &matching {
            prop_assert!(!non_matching.contains_key(key));
        }
    }
}

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    /// Map preserves count and key sequence.
    #[test]
    fn prop_map_preserves_keys(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::from(elements);
        let mapped = collection.map(|value| i64::from(*value) * 2);

        prop_assert_eq!(mapped.len(), collection.len());
        let original_keys: Vec<usize> = collection.keys().copied().collect();
        let mapped_keys: Vec<usize> = mapped.keys().copied().collect();
        prop_assert_eq!(mapped_keys, original_keys);
    }

    /// Group-by is a partition of the value multiset, in encounter order
    /// within each group.
    #[test]
    fn prop_group_by_is_a_partition(elements in prop::collection::vec(0i32..10, 0..50)) {
        let collection = Collection::from(elements.clone());
        let groups = collection.group_by(|_, value| value % 4);

        let mut regrouped: Vec<i32> = groups
            .values()
            .flat_map(values_of)
            .collect();
        let mut original = elements;
        regrouped.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(regrouped, original);

        for (group_key, group) in &groups {
            prop_assert!(group.is_not_empty());
            for value in group.values() {
                prop_assert_eq!(value % 4, *group_key);
            }
        }
    }
}

// =============================================================================
// Combination Laws
// =============================================================================

proptest! {
    /// Zip length is the minimum of both sides, pairing by position.
    #[test]
    fn prop_zip_length_and_pairing(
        left in prop::collection::vec(any::<i32>(), 0..30),
        right in prop::collection::vec(any::<i32>(), 0..30),
    ) {
        let left_collection = Collection::from(left.clone());
        let right_collection = Collection::from(right.clone());
        let zipped = left_collection.zip(&right_collection);

        prop_assert_eq!(zipped.len(), left.len().min(right.len()));
        let expected: Vec<(i32, i32)> = left.into_iter().zip(right).collect();
        prop_assert_eq!(values_of(&zipped), expected);
    }

    /// Concat preserves order and never deduplicates.
    #[test]
    fn prop_concat_is_order_preserving(
        left in prop::collection::vec(any::<i32>(), 0..30),
        right in prop::collection::vec(any::<i32>(), 0..30),
    ) {
        let joined = Collection::from(left.clone()).concat(&Collection::from(right.clone()));

        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(values_of(&joined), expected);
    }

    /// Collapse concatenates the inner sequences in order.
    #[test]
    fn prop_collapse_concatenates_in_order(
        nested in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..5), 0..10),
    ) {
        let collection = Collection::from(nested.clone());
        let flat = collection.collapse();

        let expected: Vec<i32> = nested.into_iter().flatten().collect();
        prop_assert_eq!(values_of(&flat), expected);
    }

    /// Join with a uniform separator matches the standard join.
    #[test]
    fn prop_join_matches_std_join(words in prop::collection::vec("[a-z]{0,6}", 0..10)) {
        let collection = Collection::from(words.clone());
        prop_assert_eq!(collection.join(","), words.join(","));
    }
}

// =============================================================================
// Slicing Laws
// =============================================================================

proptest! {
    /// Take yields min(n, len) entries, renumbered from zero.
    #[test]
    fn prop_take_count(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0isize..60,
    ) {
        let collection = Collection::from(elements.clone());
        let taken = collection.take(count);

        prop_assert_eq!(taken.len(), elements.len().min(count.unsigned_abs()));
        let keys: Vec<usize> = taken.keys().copied().collect();
        let dense: Vec<usize> = (0..taken.len()).collect();
        prop_assert_eq!(keys, dense);
    }

    /// Skip keeps the suffix with its original keys.
    #[test]
    fn prop_skip_preserves_suffix_keys(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0usize..60,
    ) {
        let collection = Collection::from(elements.clone());
        let rest = collection.skip(count);

        let expected: Vec<(usize, i32)> = elements
            .into_iter()
            .enumerate()
            .skip(count)
            .collect();
        prop_assert_eq!(rest.all(), expected);
    }

    /// Take-while and skip-while split the receiver at the same boundary.
    #[test]
    fn prop_take_while_skip_while_split(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let collection = Collection::from(elements);
        let prefix = collection.take_while(|_, value| *value != 0);
        let suffix = collection.skip_while(|_, value| *value != 0);

        let mut rebuilt = prefix.all();
        rebuilt.extend(suffix.all());
        prop_assert_eq!(rebuilt, collection.all());
    }

    /// Chunks are full-sized except possibly the last, and reconstruct the
    /// receiver in order.
    #[test]
    fn prop_chunk_sizes_and_reconstruction(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        size in 1usize..8,
    ) {
        let collection = Collection::from(elements);
        let chunks = collection.chunk(size);

        let expected_count = collection.len().div_ceil(size);
        prop_assert_eq!(chunks.len(), expected_count);

        let mut rebuilt = Vec::new();
        for (position, chunk) in &chunks {
            if *position + 1 < chunks.len() {
                prop_assert_eq!(chunk.len(), size);
            } else {
                prop_assert!(chunk.len() <= size);
                prop_assert!(chunk.is_not_empty());
            }
            rebuilt.extend(chunk.all());
        }
        prop_assert_eq!(rebuilt, collection.all());
    }

    /// Slice is clamped to the collection bounds and preserves keys.
    #[test]
    fn prop_slice_clamps_and_preserves_keys(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        start in 0usize..60,
        length in 0usize..60,
    ) {
        let collection = Collection::from(elements.clone());
        let window = collection.slice(start..start.saturating_add(length));

        let expected: Vec<(usize, i32)> = elements
            .into_iter()
            .enumerate()
            .skip(start)
            .take(length)
            .collect();
        prop_assert_eq!(window.all(), expected);
    }
}
