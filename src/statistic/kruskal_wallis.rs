use crate::{
    error::{comp_err, McResult},
    sampler::RankedSample,
};

/// Kruskal-Wallis H without tie correction.
///
/// H = (N - 1) Σ_g n_g (r̄_g - r̄)² / Σ_x (x - r̄)², where r̄ = (N + 1) / 2
/// and the outer sum runs over the groups present in the sample.  Fails if
/// the denominator vanishes (N < 2).
pub fn kruskal_wallis(sample: &RankedSample) -> McResult<f64> {
    let n = sample.len();
    let rbar = 0.5 * ((n + 1) as f64);
    let k = sample.max_label() as usize;

    // Per group counts and rank sums, indexed by label
    let mut cts = vec![0usize; k + 1];
    let mut rank_sums = vec![0usize; k + 1];
    let mut divisor = 0.0;
    for (label, rank) in sample.iter() {
        cts[label as usize] += 1;
        rank_sums[label as usize] += rank;
        let d = rank as f64 - rbar;
        divisor += d * d;
    }

    let numerator: f64 = cts
        .iter()
        .zip(rank_sums.iter())
        .filter(|&(&c, _)| c > 0)
        .map(|(&c, &s)| {
            let d = s as f64 / c as f64 - rbar;
            (c as f64) * d * d
        })
        .sum();

    if divisor > 0.0 {
        Ok(((n as f64) - 1.0) * numerator / divisor)
    } else {
        Err(comp_err(format!(
            "Kruskal-Wallis denominator is zero for sample of size {}",
            n
        )))
    }
}
