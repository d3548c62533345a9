//! Exchange sort implementations

use crate::Sorter;
use tracing::trace;

/// Counters collected while bubble sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Outer passes started
    pub passes: usize,
    /// Adjacent comparisons made
    pub comparisons: usize,
    /// Adjacent exchanges made
    pub swaps: usize,
}

/// Classic O(n²) bubble sort: every pass runs, even once the data is in order.
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn sort<T: Ord>(&self, data: &mut [T]) {
        exchange_sort(data, false);
    }

    fn name(&self) -> &'static str {
        "bubble"
    }
}

/// Bubble sort that stops after a pass with no exchange
pub struct EarlyExitBubbleSorter;

impl Sorter for EarlyExitBubbleSorter {
    fn sort<T: Ord>(&self, data: &mut [T]) {
        exchange_sort(data, true);
    }

    fn name(&self) -> &'static str {
        "bubble_early_exit"
    }
}

/// Standard library stable sort, used as the reference
pub struct StdSorter;

impl Sorter for StdSorter {
    #[inline]
    fn sort<T: Ord>(&self, data: &mut [T]) {
        data.sort();
    }

    fn name(&self) -> &'static str {
        "std"
    }
}

/// Sort `data` in place with [`BubbleSorter`]
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    BubbleSorter.sort(data);
}

/// Bubble sort `data` in place and report how much work it took
pub fn bubble_sort_with_stats<T: Ord>(data: &mut [T], early_exit: bool) -> SortStats {
    exchange_sort(data, early_exit)
}

fn exchange_sort<T: Ord>(data: &mut [T], early_exit: bool) -> SortStats {
    let mut stats = SortStats::default();
    let n = data.len();
    if n <= 1 {
        return stats;
    }

    for i in 0..n {
        stats.passes += 1;
        let mut swapped = false;

        // The last i elements are already in their final place
        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            // Strict comparison keeps equal elements in order
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }

        if early_exit && !swapped {
            break;
        }
    }

    trace!(
        len = n,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "exchange sort finished"
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Orders by `key` only, so `tag` exposes whether ties moved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Keyed {
        key: i32,
        tag: char,
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    fn keyed(pairs: &[(i32, char)]) -> Vec<Keyed> {
        pairs.iter().map(|&(key, tag)| Keyed { key, tag }).collect()
    }

    #[test]
    fn sorts_the_demo_input() {
        let mut nums = vec![5, 1, 4, 2, 8];
        bubble_sort(&mut nums);
        assert_eq!(nums, vec![1, 2, 4, 5, 8]);
    }

    #[test]
    fn equal_elements_keep_their_order() {
        let mut data = keyed(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
        BubbleSorter.sort(&mut data);
        assert_eq!(data, keyed(&[(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]));

        let mut data = keyed(&[(3, 'x'), (3, 'y'), (3, 'z')]);
        EarlyExitBubbleSorter.sort(&mut data);
        assert_eq!(data, keyed(&[(3, 'x'), (3, 'y'), (3, 'z')]));
    }

    #[test]
    fn sorts_non_integer_elements() {
        let mut words = vec!["pear", "apple", "fig"];
        bubble_sort(&mut words);
        assert_eq!(words, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn trivial_inputs_do_no_work() {
        let mut empty: Vec<u8> = vec![];
        assert_eq!(bubble_sort_with_stats(&mut empty, false), SortStats::default());

        let mut single = vec![9];
        assert_eq!(bubble_sort_with_stats(&mut single, true), SortStats::default());
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn full_sort_makes_quadratic_comparisons() {
        let mut data: Vec<i32> = (0..10).rev().collect();
        let stats = bubble_sort_with_stats(&mut data, false);
        assert_eq!(stats.passes, 10);
        assert_eq!(stats.comparisons, 45);
        // Reversed input: every comparison swaps
        assert_eq!(stats.swaps, 45);
    }

    #[test]
    fn early_exit_stops_after_a_clean_pass() {
        let mut sorted: Vec<i32> = (0..10).collect();
        let stats = bubble_sort_with_stats(&mut sorted, true);
        assert_eq!(stats.passes, 1);
        assert_eq!(stats.comparisons, 9);
        assert_eq!(stats.swaps, 0);

        let mut sorted: Vec<i32> = (0..10).collect();
        let stats = bubble_sort_with_stats(&mut sorted, false);
        assert_eq!(stats.passes, 10);
        assert_eq!(stats.comparisons, 45);
    }

    #[test]
    fn demo_input_stats() {
        let mut nums = vec![5, 1, 4, 2, 8];
        let stats = bubble_sort_with_stats(&mut nums, true);
        assert_eq!(nums, vec![1, 2, 4, 5, 8]);
        // 5 bubbles past 1, 4 and 2; then 4 past 2; third pass is clean
        assert_eq!(stats.swaps, 4);
        assert_eq!(stats.passes, 3);
    }
}
