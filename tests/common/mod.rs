//! Planted-anagram generator shared by the integration tests and benchmarks.
//!
//! Each case plants `reps` shuffled copies of a random lowercase pattern,
//! each followed by a run of one repeated noise letter. `reps` is a lower
//! bound on the number of abelian occurrences: noise next to a copy can form
//! further anagrams.

#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct PlantedCase {
    pub pattern: Vec<u8>,
    pub text: Vec<u8>,
    pub reps: usize,
}

fn random_lowercase(rng: &mut SmallRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
}

pub fn planted_case(rng: &mut SmallRng, pattern_len: usize, max_reps: usize) -> PlantedCase {
    let pattern = random_lowercase(rng, pattern_len);
    let reps = rng.gen_range(1..=max_reps);

    let mut text = Vec::new();
    for _ in 0..reps {
        let mut copy = pattern.clone();
        copy.shuffle(rng);
        text.extend_from_slice(&copy);

        let noise = rng.gen_range(b'a'..=b'z');
        let run = rng.gen_range(1..=pattern_len.max(1));
        text.extend(std::iter::repeat(noise).take(run));
    }

    PlantedCase {
        pattern,
        text,
        reps,
    }
}

/// `count` cases with pattern lengths `step, 2·step, ...`, sorted by text
/// length.
pub fn planted_cases(seed: u64, count: usize, step: usize, max_reps: usize) -> Vec<PlantedCase> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut cases: Vec<_> = (1..=count)
        .map(|i| planted_case(&mut rng, i * step, max_reps))
        .collect();
    cases.sort_by_key(|c| c.text.len());
    cases
}
