//! Random rank assignment under the null hypothesis.
//!
//! Each trial builds the label sequence `1 (n1 times), 2 (n2 times), ...`,
//! applies a uniformly random permutation and hands out ranks `1..=N` in the
//! resulting order.  Every trial gets its own generator, derived from the
//! run seed and the trial index, so parallel trials never share random
//! state and a seeded run is reproducible whatever the thread count.

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::groups::GroupSizes;

/// Group labels in rank order: the label at position `i` has rank `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSample {
    labels: Vec<u32>,
}

#[allow(clippy::len_without_is_empty)]
impl RankedSample {
    /// Build a sample from an explicit assignment of labels to ranks.
    pub fn from_labels(labels: Vec<u32>) -> Self {
        Self { labels }
    }

    /// Sample size N
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// (label, rank) pairs in increasing rank order
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.labels.iter().enumerate().map(|(i, &l)| (l, i + 1))
    }

    /// Ranks assigned to group `label`, in increasing order
    pub fn ranks(&self, label: u32) -> impl Iterator<Item = usize> + '_ {
        self.iter().filter(move |(l, _)| *l == label).map(|(_, r)| r)
    }

    /// Number of members of group `label`
    pub fn count(&self, label: u32) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }

    /// Largest label present (0 for an empty sample)
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }
}

/// Seeded generator for one trial.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Derive the seed for trial `ix` of a run started with `base`.
///
/// SplitMix64 finaliser applied to the golden-ratio stepped seed, so
/// neighbouring trial indices give unrelated streams.
pub fn trial_seed(base: u64, ix: usize) -> u64 {
    let step = (ix as u64).wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    let mut z = base.wrapping_add(step);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Draw one random rank assignment for the given group sizes.
pub fn random_ranks<R: Rng + ?Sized>(groups: &GroupSizes, rng: &mut R) -> RankedSample {
    let mut labels = Vec::with_capacity(groups.total());
    for (i, &n) in groups.sizes().iter().enumerate() {
        labels.extend(std::iter::repeat((i + 1) as u32).take(n));
    }
    labels.shuffle(rng);
    RankedSample { labels }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn ranks_are_permutation(
            seed in 0_u64..10000,
            sizes in proptest::collection::vec(0_i64..30, 2..6),
        ) {
            prop_assume!(sizes.iter().sum::<i64>() > 0);
            let g = GroupSizes::new(&sizes).unwrap();
            let s = random_ranks(&g, &mut create_rng(seed));
            prop_assert_eq!(s.len(), g.total());

            let mut ranks: Vec<usize> = s.iter().map(|(_, r)| r).collect();
            ranks.sort_unstable();
            prop_assert_eq!(ranks, (1..=g.total()).collect::<Vec<_>>());

            for label in 1..=g.n_groups() {
                prop_assert_eq!(s.count(label as u32), g.n(label));
            }
        }
    }
}
