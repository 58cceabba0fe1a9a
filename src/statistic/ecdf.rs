//! Two sample statistics based on the difference between the empirical
//! distribution functions of groups 1 and 2.
//!
//! The ECDFs are evaluated at every rank `1..=N` of the realised sample,
//! which covers every point where either function can jump.

use crate::{
    error::{comp_err, McResult},
    sampler::RankedSample,
};

/// Largest values of F1 - F2 and F2 - F1 over the ranks of the sample.
///
/// Both are >= 0 since the difference is 0 at the largest rank.
pub fn ecdf_extremes(sample: &RankedSample) -> McResult<(f64, f64)> {
    let n1 = sample.count(1);
    let n2 = sample.count(2);
    if n1 == 0 || n2 == 0 {
        return Err(comp_err(format!(
            "ECDF comparison needs members in groups 1 and 2 (found {} and {})",
            n1, n2
        )));
    }
    let (n1, n2) = (n1 as f64, n2 as f64);
    let (mut c1, mut c2) = (0usize, 0usize);
    let (mut d_pos, mut d_neg) = (0.0f64, 0.0f64);
    for &label in sample.labels() {
        match label {
            1 => c1 += 1,
            2 => c2 += 1,
            _ => (),
        }
        let d = c1 as f64 / n1 - c2 as f64 / n2;
        d_pos = d_pos.max(d);
        d_neg = d_neg.max(-d);
    }
    Ok((d_pos, d_neg))
}

/// Two sample Kolmogorov-Smirnov D = max |F1 - F2|
pub fn kolmogorov_smirnov(sample: &RankedSample) -> McResult<f64> {
    ecdf_extremes(sample).map(|(d_pos, d_neg)| d_pos.max(d_neg))
}

/// Kuiper V = max (F1 - F2) + max (F2 - F1)
pub fn kuiper(sample: &RankedSample) -> McResult<f64> {
    ecdf_extremes(sample).map(|(d_pos, d_neg)| d_pos + d_neg)
}
