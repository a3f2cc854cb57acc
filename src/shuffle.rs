//! Shuffling the field sequence and pairing it into cards.
//!
//! The whole line sequence is permuted first, so which two fields end up on
//! the same card is itself random.

use rand::Rng;

/// Shuffle in place with a backward Fisher–Yates pass: for `i` from the last
/// index down to 1, swap `i` with a uniform index in `[0, i]`.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The two text fields of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardText<'a> {
    /// Upper field (drawn upright)
    pub top: &'a str,
    /// Lower field (drawn rotated); empty when the sequence has odd length
    pub bottom: &'a str,
}

/// Number of cards produced from `line_count` fields: `ceil(L / 2)`
pub fn card_count(line_count: usize) -> usize {
    line_count.div_ceil(2)
}

/// Pair consecutive fields into cards. Cards are derived on demand.
pub fn cards(lines: &[String]) -> impl ExactSizeIterator<Item = CardText<'_>> + '_ {
    lines.chunks(2).map(|pair| CardText {
        top: pair[0].as_str(),
        bottom: pair.get(1).map(String::as_str).unwrap_or(""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn card_count_rounds_up() {
        assert_eq!(card_count(0), 0);
        assert_eq!(card_count(1), 1);
        assert_eq!(card_count(4), 2);
        assert_eq!(card_count(5), 3);
        assert_eq!(card_count(20), 10);
    }

    #[test]
    fn pairing_matches_card_count() {
        for n in 0..40 {
            let lines = numbered(n);
            assert_eq!(cards(&lines).len(), card_count(n), "for {n} lines");
        }
    }

    #[test]
    fn odd_sequence_leaves_last_bottom_empty() {
        let lines = numbered(3);
        let all: Vec<_> = cards(&lines).collect();
        assert_eq!(all[0], CardText { top: "line 0", bottom: "line 1" });
        assert_eq!(all[1], CardText { top: "line 2", bottom: "" });
    }

    #[test]
    fn shuffle_is_a_permutation() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let original = numbered(17);
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);

            let mut a = original.clone();
            let mut b = shuffled.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b, "seed {seed} lost or duplicated an element");
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut first = numbered(30);
        let mut second = numbered(30);
        shuffle(&mut first, &mut StdRng::seed_from_u64(7));
        shuffle(&mut second, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn short_sequences_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<String> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = numbered(1);
        shuffle(&mut one, &mut rng);
        assert_eq!(one, numbered(1));
    }

    #[test]
    fn every_position_is_reachable() {
        // Element 0 of a 4-element sequence should land in each slot with
        // probability 1/4; allow a generous band over 4000 trials.
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            let pos = items.iter().position(|&v| v == 0).unwrap();
            hits[pos] += 1;
        }
        for (slot, &count) in hits.iter().enumerate() {
            assert!((800..1200).contains(&count), "slot {slot} hit {count} times");
        }
    }
}
