//! Summaries of a simulated null distribution: quantile critical values
//! and the p-value of an observed statistic.
//!
//! Quantiles use the R-7 linear interpolation rule (the default in R and
//! NumPy).  For sorted values `x[0..n]` and `p ∈ [0, 1]`, with
//! `h = (n - 1) p`, `j = ⌊h⌋` and `g = h - j`, the quantile is
//! `x[j] + g (x[j+1] - x[j])`.
//!
//! Reference: Hyndman & Fan (1996), "Sample Quantiles in Statistical
//! Packages", *The American Statistician* 50(4).

use std::{
    fmt,
    io::{self, Write},
};

/// Simulated statistic values, held sorted.
#[derive(Debug, Clone)]
pub struct DistributionSample {
    sorted: Vec<f64>,
}

impl DistributionSample {
    pub fn new(mut values: Vec<f64>) -> Self {
        values.sort_unstable_by(|a, b| a.total_cmp(b));
        Self { sorted: values }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Values in non-decreasing order
    pub fn values(&self) -> &[f64] {
        &self.sorted
    }

    pub fn min(&self) -> Option<f64> {
        self.sorted.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.sorted.last().copied()
    }

    /// R-7 quantile.  `None` if the sample is empty or `p` is outside [0, 1].
    pub fn quantile(&self, p: f64) -> Option<f64> {
        let n = self.sorted.len();
        if n == 0 || !(0.0..=1.0).contains(&p) {
            return None;
        }
        let h = (n - 1) as f64 * p;
        let j = h.floor() as usize;
        let g = h - h.floor();
        let x = &self.sorted;
        if j + 1 >= n {
            Some(x[n - 1])
        } else {
            Some(x[j] + g * (x[j + 1] - x[j]))
        }
    }

    /// Proportion of the sample strictly above (`reverse`) or strictly
    /// below the observed value.
    pub fn p_value(&self, observed: f64, reverse: bool) -> f64 {
        let n = self.sorted.len();
        if n == 0 {
            return 0.0;
        }
        let count = if reverse {
            n - self.sorted.partition_point(|&x| x <= observed)
        } else {
            self.sorted.partition_point(|&x| x < observed)
        };
        count as f64 / n as f64
    }

    /// Critical values for each requested quantile, in request order.
    /// Quantiles outside [0, 1] are skipped.
    pub fn critical_values(&self, quantiles: &[f64]) -> CriticalValueTable {
        let entries = quantiles
            .iter()
            .filter_map(|&q| self.quantile(q).map(|x| (q, x)))
            .collect();
        CriticalValueTable { entries }
    }
}

/// Quantile to critical value pairs, in the order the quantiles were
/// requested.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalValueTable {
    entries: Vec<(f64, f64)>,
}

impl CriticalValueTable {
    /// Critical value for quantile `q` if it was requested
    pub fn get(&self, q: f64) -> Option<f64> {
        self.entries
            .iter()
            .find(|(q1, _)| *q1 == q)
            .map(|(_, x)| *x)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn quantiles(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(q, _)| *q)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for CriticalValueTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>9}  {:>14}", "Quantile", "Critical Value")?;
        for (q, x) in self.entries.iter() {
            write!(f, "\n{:>9}  {:>14.4}", q, x)?;
        }
        Ok(())
    }
}

/// Interpret a user supplied observed value.
///
/// Anything that does not parse as a finite number gives `None`; this is
/// never an error, the caller just gets no p-value.
pub fn parse_observed(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Write the critical value table, and the p-value line if there is one.
pub fn write_report<W: Write>(
    wrt: &mut W,
    table: &CriticalValueTable,
    p_value: Option<f64>,
    reverse: bool,
) -> io::Result<()> {
    writeln!(wrt, "\n{}", table)?;
    if let Some(p) = p_value {
        writeln!(
            wrt,
            "Percent of distribution {} the observed value: {:.4}",
            if reverse { "above" } else { "below" },
            p
        )?;
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn quantile_within_range(
            data in proptest::collection::vec(-100.0_f64..100.0, 1..200),
            p in 0.0_f64..=1.0,
        ) {
            let d = DistributionSample::new(data);
            let q = d.quantile(p).unwrap();
            prop_assert!(q >= d.min().unwrap() && q <= d.max().unwrap());
        }

        #[test]
        fn p_values_complement(
            data in proptest::collection::vec(0_u8..20, 1..200),
            obs in 0_u8..20,
        ) {
            let d = DistributionSample::new(data.iter().map(|&x| x as f64).collect());
            let ties = data.iter().filter(|&&x| x == obs).count() as f64 / data.len() as f64;
            let total = d.p_value(obs as f64, true) + d.p_value(obs as f64, false) + ties;
            prop_assert!((total - 1.0).abs() < 1e-12);
        }
    }
}
