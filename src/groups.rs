use std::fmt;

use crate::error::{config_err, McResult};

/// Partition of the pooled sample into groups.
///
/// Group labels are 1-based, so `n(1)` is the size of the first group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSizes {
    sizes: Box<[usize]>,
    total: usize,
}

impl GroupSizes {
    /// Validate a list of group sizes.
    ///
    /// At least two groups are required, no size may be negative and the
    /// total sample size must be positive.  Individual groups may be empty;
    /// whether that is acceptable depends on the test (see
    /// [`RankTest::check_groups`](crate::statistic::RankTest::check_groups)).
    pub fn new(sizes: &[i64]) -> McResult<Self> {
        if sizes.len() < 2 {
            return Err(config_err(format!(
                "At least 2 groups are required (found {})",
                sizes.len()
            )));
        }
        let mut v = Vec::with_capacity(sizes.len());
        for (ix, &n) in sizes.iter().enumerate() {
            let n = usize::try_from(n).map_err(|_| {
                config_err(format!("Negative size ({}) for group {}", n, ix + 1))
            })?;
            v.push(n);
        }
        let total = v
            .iter()
            .try_fold(0usize, |t, &n| t.checked_add(n))
            .ok_or_else(|| config_err("Total sample size overflows"))?;
        if total == 0 {
            return Err(config_err("Total sample size is zero"));
        }
        Ok(Self {
            sizes: v.into_boxed_slice(),
            total,
        })
    }

    /// Number of groups
    pub fn n_groups(&self) -> usize {
        self.sizes.len()
    }

    /// Total sample size N
    pub fn total(&self) -> usize {
        self.total
    }

    /// Size of group `label` (1-based).  Unknown labels have size 0.
    pub fn n(&self, label: usize) -> usize {
        label
            .checked_sub(1)
            .and_then(|i| self.sizes.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl fmt::Display for GroupSizes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, n) in self.sizes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, ")")
    }
}
