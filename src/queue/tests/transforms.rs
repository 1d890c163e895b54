//! Structural transform tests: delete-middle, dedup, swap and reversals

#[cfg(test)]
mod tests {
    use crate::queue::api::QueueStore;
    use crate::queue::tests::queue_of;

    #[test]
    fn test_delete_middle_indices() {
        // size -> values left after removing index size / 2
        let cases: [(&[&str], &[&str]); 5] = [
            (&["a"], &[]),
            (&["a", "b"], &["a"]),
            (&["a", "b", "c"], &["a", "c"]),
            (&["a", "b", "c", "d"], &["a", "b", "d"]),
            (&["a", "b", "c", "d", "e"], &["a", "b", "d", "e"]),
        ];

        for (input, expected) in cases {
            let mut store = QueueStore::new();
            let queue = queue_of(&mut store, input);
            assert!(store.delete_middle(queue));
            assert_eq!(store.values(queue), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_delete_middle_empty() {
        let mut store = QueueStore::new();
        let queue = store.create().unwrap();
        assert!(!store.delete_middle(queue));
    }

    #[test]
    fn test_delete_middle_frees_slot() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "c"]);
        let before = store.slots_in_use();
        store.delete_middle(queue);
        assert_eq!(store.slots_in_use(), before - 1);
    }

    #[test]
    fn test_dedup_collapses_runs_entirely() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "a", "b", "c", "c", "c", "d"]);

        assert!(store.delete_adjacent_duplicates(queue));
        assert_eq!(store.values(queue), ["b", "d"]);
    }

    #[test]
    fn test_dedup_all_duplicates() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["z", "z", "z"]);

        assert!(store.delete_adjacent_duplicates(queue));
        assert!(store.is_empty(queue));
        assert_eq!(store.slots_in_use(), 1);
    }

    #[test]
    fn test_dedup_trailing_run() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "b"]);
        store.delete_adjacent_duplicates(queue);
        assert_eq!(store.values(queue), ["a"]);
    }

    #[test]
    fn test_dedup_no_duplicates() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "c"]);
        store.delete_adjacent_duplicates(queue);
        assert_eq!(store.values(queue), ["a", "b", "c"]);
    }

    #[test]
    fn test_dedup_empty_reports_failure() {
        let mut store = QueueStore::new();
        let queue = store.create().unwrap();
        assert!(!store.delete_adjacent_duplicates(queue));
    }

    #[test]
    fn test_swap_pairs() {
        let mut store = QueueStore::new();
        let even = queue_of(&mut store, &["1", "2", "3", "4"]);
        let odd = queue_of(&mut store, &["1", "2", "3", "4", "5"]);

        store.swap_pairs(even);
        store.swap_pairs(odd);

        assert_eq!(store.values(even), ["2", "1", "4", "3"]);
        assert_eq!(store.values(odd), ["2", "1", "4", "3", "5"]);
    }

    #[test]
    fn test_reverse() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "c", "d"]);
        store.reverse(queue);
        assert_eq!(store.values(queue), ["d", "c", "b", "a"]);

        // Links must still be consistent from the back
        assert_eq!(store.remove_back(queue, None).unwrap().value(), "a");
        assert_eq!(store.remove_front(queue, None).unwrap().value(), "d");
    }

    #[test]
    fn test_reverse_single_and_empty() {
        let mut store = QueueStore::new();
        let single = queue_of(&mut store, &["only"]);
        let empty = store.create().unwrap();

        store.reverse(single);
        store.reverse(empty);

        assert_eq!(store.values(single), ["only"]);
        assert!(store.is_empty(empty));
    }

    #[test]
    fn test_reverse_k_group_leaves_short_tail() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["1", "2", "3", "4", "5", "6", "7", "8"]);

        store.reverse_k_group(queue, 3);
        assert_eq!(
            store.values(queue),
            ["3", "2", "1", "6", "5", "4", "7", "8"]
        );
    }

    #[test]
    fn test_reverse_k_group_k_equals_size() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "c"]);
        store.reverse_k_group(queue, 3);
        assert_eq!(store.values(queue), ["c", "b", "a"]);
    }

    #[test]
    fn test_reverse_k_group_k_larger_than_size() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "c"]);
        store.reverse_k_group(queue, 4);
        assert_eq!(store.values(queue), ["a", "b", "c"]);
    }

    #[test]
    fn test_reverse_k_group_small_k_is_noop() {
        let mut store = QueueStore::new();
        let queue = queue_of(&mut store, &["a", "b", "c"]);
        store.reverse_k_group(queue, 0);
        store.reverse_k_group(queue, 1);
        assert_eq!(store.values(queue), ["a", "b", "c"]);
    }
}
