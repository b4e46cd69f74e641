//! Uniform shuffle primitive.

use crate::core::DeckRng;

/// Return a uniformly random permutation of `items`.
///
/// Fisher-Yates over a copy: walk `i` from the last index down to 1 and
/// swap it with a uniformly chosen `j` in `0..=i`. The input is untouched.
/// Empty and single-element inputs come back as they are.
///
/// ```
/// use party_deck::core::DeckRng;
/// use party_deck::deck::shuffled;
///
/// let mut rng = DeckRng::new(3);
/// let mut out = shuffled(&[1, 2, 3, 4], &mut rng);
/// out.sort();
/// assert_eq!(out, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn shuffled<T: Clone>(items: &[T], rng: &mut DeckRng) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range_inclusive(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = DeckRng::new(42);
        let data: Vec<u32> = (1..=10).collect();

        let mut out = shuffled(&data, &mut rng);

        // Same elements, different order (very likely)
        assert_eq!(out.len(), data.len());
        assert_ne!(out, data);

        out.sort();
        assert_eq!(out, data);
    }

    #[test]
    fn test_input_not_mutated() {
        let mut rng = DeckRng::new(1);
        let data = vec!["a", "b", "c"];
        let _ = shuffled(&data, &mut rng);
        assert_eq!(data, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut rng = DeckRng::new(1);
        let empty: Vec<u8> = vec![];
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&[7], &mut rng), vec![7]);
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let data: Vec<u32> = (0..20).collect();
        let a = shuffled(&data, &mut DeckRng::new(99));
        let b = shuffled(&data, &mut DeckRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_orderings_reachable_and_balanced() {
        // 3! = 6 orderings, each expected ~1000 times out of 6000
        let mut rng = DeckRng::new(2024);
        let mut counts: FxHashMap<Vec<u8>, u32> = FxHashMap::default();
        for _ in 0..6000 {
            *counts.entry(shuffled(&[0u8, 1, 2], &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (order, count) in counts {
            assert!((800..1200).contains(&count), "{order:?} seen {count} times");
        }
    }
}
