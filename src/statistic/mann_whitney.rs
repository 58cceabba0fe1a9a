use crate::sampler::RankedSample;

/// Mann-Whitney U for group `label`: the rank sum of the group less its
/// smallest possible value n(n+1)/2.  An empty group gives 0.
pub fn u_statistic(sample: &RankedSample, label: u32) -> f64 {
    // Calculate group size and rank sum in one pass
    let (n, rank_sum) = sample
        .ranks(label)
        .fold((0usize, 0usize), |(n, s), r| (n + 1, s + r));
    rank_sum as f64 - ((n * (n + 1)) >> 1) as f64
}

/// U1, the raw (unnormalised) Mann-Whitney statistic of group 1
pub fn mann_whitney(sample: &RankedSample) -> f64 {
    u_statistic(sample, 1)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{
        groups::GroupSizes,
        sampler::{create_rng, random_ranks},
    };
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn u1_plus_u2_is_n1_n2(
            seed in 0_u64..10000,
            n1 in 1_i64..40,
            n2 in 1_i64..40,
        ) {
            let g = GroupSizes::new(&[n1, n2]).unwrap();
            let s = random_ranks(&g, &mut create_rng(seed));
            let u1 = u_statistic(&s, 1);
            let u2 = u_statistic(&s, 2);
            prop_assert_eq!(u1 + u2, (n1 * n2) as f64);
            prop_assert!(u1 >= 0.0 && u1 <= (n1 * n2) as f64);
        }
    }
}
