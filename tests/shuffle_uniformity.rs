use std::collections::HashMap;

use roster_split::{DeterministicRng, shuffle};

const LEN: usize = 4;
const PERMUTATIONS: usize = 24;
const TRIALS: usize = 48_000;

fn lehmer_rank(perm: &[usize]) -> usize {
    let mut rank = 0;
    for i in 0..perm.len() {
        let smaller_after = perm[i + 1..].iter().filter(|v| **v < perm[i]).count();
        rank = rank * (perm.len() - i) + smaller_after;
    }
    rank
}

#[test]
fn lehmer_rank_covers_all_permutations() {
    assert_eq!(lehmer_rank(&[0, 1, 2, 3]), 0);
    assert_eq!(lehmer_rank(&[3, 2, 1, 0]), PERMUTATIONS - 1);
}

#[test]
fn shuffle_of_four_is_uniform_over_all_permutations() {
    let mut rng = DeterministicRng::new(2024);
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let mut items: Vec<usize> = (0..LEN).collect();
        shuffle(&mut items, &mut rng);
        *counts.entry(lehmer_rank(&items)).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), PERMUTATIONS, "every permutation appears");

    let expected = TRIALS as f64 / PERMUTATIONS as f64;
    let chi_square: f64 = counts
        .values()
        .map(|observed| {
            let diff = *observed as f64 - expected;
            diff * diff / expected
        })
        .sum();
    // 23 degrees of freedom; the 0.999 quantile is ~49.7.
    assert!(chi_square < 80.0, "chi-square too large: {chi_square}");
}

#[test]
fn every_position_receives_every_element() {
    let mut rng = DeterministicRng::new(17);
    let mut seen = [[0usize; LEN]; LEN];
    for _ in 0..4_000 {
        let mut items: Vec<usize> = (0..LEN).collect();
        shuffle(&mut items, &mut rng);
        for (position, value) in items.iter().enumerate() {
            seen[position][*value] += 1;
        }
    }
    for row in seen {
        for hits in row {
            assert!((800..1200).contains(&hits), "skewed placement: {hits}");
        }
    }
}
