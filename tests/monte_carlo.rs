//! End to end runs checked against known critical values.
//!
//! Seeds are fixed, so these are deterministic; the tolerances are wide
//! enough to hold for any seed with overwhelming probability.

use rank_mc::{compute_critical_values, GroupSizes, McError, McParams, RankTest};

fn params(reps: usize, seed: u64) -> McParams {
    McParams {
        reps,
        print: false,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn mann_whitney_20_20() {
    let g = GroupSizes::new(&[20, 20]).unwrap();
    let p = McParams {
        observed: Some(130.0),
        ..params(10000, 2024)
    };
    let res = RankTest::MannWhitney
        .compute_critical_values(&g, &p)
        .unwrap();

    assert_eq!(
        res.table.quantiles().collect::<Vec<_>>(),
        vec![0.01, 0.025, 0.05, 0.1]
    );
    // Normal approximation: 200 - 1.645 * sqrt(400 * 41 / 12)
    let cv = res.table.get(0.05).unwrap();
    assert!((cv - 139.2).abs() < 7.0, "5% critical value {cv}");
    let cvs: Vec<f64> = res.table.iter().map(|(_, x)| x).collect();
    assert!(cvs.windows(2).all(|w| w[0] <= w[1]));

    let pv = res.p_value.unwrap();
    assert!((0.0..=1.0).contains(&pv));
    assert!(pv > 0.015 && pv < 0.045, "p-value {pv}");
}

#[test]
fn mann_whitney_rerun_converges() {
    let g = GroupSizes::new(&[20, 20]).unwrap();
    let a = compute_critical_values(RankTest::MannWhitney, &g, &params(10000, 1)).unwrap();
    let b = compute_critical_values(RankTest::MannWhitney, &g, &params(10000, 2)).unwrap();
    assert_ne!(a.distribution.values(), b.distribution.values());
    // Monte Carlo standard error of these quantiles is 1-2
    for ((q, x), (_, y)) in a.table.iter().zip(b.table.iter()) {
        assert!((x - y).abs() <= 10.0, "quantile {q}: {x} vs {y}");
    }
}

#[test]
fn kruskal_wallis_25_25_25() {
    let g = GroupSizes::new(&[25, 25, 25]).unwrap();
    let res = RankTest::KruskalWallis
        .compute_critical_values(&g, &params(20000, 77))
        .unwrap();
    // Chi-squared with 2 degrees of freedom
    let cv = res.table.get(0.95).unwrap();
    assert!((cv - 5.991).abs() < 0.05 * 5.991, "95% critical value {cv}");
    let cv = res.table.get(0.9).unwrap();
    assert!((cv - 4.605).abs() < 0.05 * 4.605, "90% critical value {cv}");
}

#[test]
fn kolmogorov_smirnov_12_12() {
    let g = GroupSizes::new(&[12, 12]).unwrap();
    let res = RankTest::KolmogorovSmirnov
        .compute_critical_values(&g, &params(10000, 5))
        .unwrap();
    let cv = res.table.get(0.95).unwrap();
    assert!(
        cv > 5.0 / 12.0 - 1e-9 && cv < 7.0 / 12.0 + 1e-9,
        "95% critical value {cv}"
    );
    assert!(res.distribution.max().unwrap() <= 1.0);
    assert!(res.distribution.min().unwrap() > 0.0);
}

#[test]
fn kuiper_12_12() {
    let g = GroupSizes::new(&[12, 12]).unwrap();
    let res = RankTest::Kuiper
        .compute_critical_values(&g, &params(10000, 6))
        .unwrap();
    let cv = res.table.get(0.95).unwrap();
    assert!(
        cv > 0.5 - 1e-9 && cv < 0.75 + 1e-9,
        "95% critical value {cv}"
    );
    // Kuiper V is never below the KS D of the same sample
    let ks = RankTest::KolmogorovSmirnov
        .compute_critical_values(&g, &params(10000, 6))
        .unwrap();
    for (v, d) in res.distribution.values().iter().zip(ks.distribution.values()) {
        assert!(v + 1e-12 >= *d);
    }
}

#[test]
fn seeded_runs_reproducible() {
    let g = GroupSizes::new(&[9, 11]).unwrap();
    let one = McParams {
        threads: Some(1),
        ..params(3000, 42)
    };
    let many = McParams {
        threads: Some(4),
        ..params(3000, 42)
    };
    let a = compute_critical_values(RankTest::Kuiper, &g, &one).unwrap();
    let b = compute_critical_values(RankTest::Kuiper, &g, &many).unwrap();
    assert_eq!(a.table, b.table);
    assert_eq!(a.distribution.values(), b.distribution.values());
}

#[test]
fn text_observed_value() {
    let g = GroupSizes::new(&[10, 10]).unwrap();
    let res = compute_critical_values(
        RankTest::MannWhitney,
        &g,
        &params(500, 3).with_observed_str("one hundred"),
    )
    .unwrap();
    assert!(res.p_value.is_none());
    assert_eq!(res.table.len(), 4);
}

#[test]
fn configuration_errors_before_trials() {
    assert!(matches!(GroupSizes::new(&[]), Err(McError::Configuration(_))));
    assert!(matches!(
        GroupSizes::new(&[10, -2]),
        Err(McError::Configuration(_))
    ));
    let g = GroupSizes::new(&[10, 10, 10]).unwrap();
    assert!(matches!(
        compute_critical_values(RankTest::KolmogorovSmirnov, &g, &params(100, 1)),
        Err(McError::Configuration(_))
    ));
}
