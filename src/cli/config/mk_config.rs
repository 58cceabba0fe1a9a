use clap::ArgMatches;

use rank_mc::{parse_observed, GroupSizes, McParams, RankTest, DEFAULT_REPS};

use super::Config;

impl Config {
    pub fn from_matches(m: &ArgMatches) -> anyhow::Result<Self> {
        let (name, m) = m
            .subcommand()
            .ok_or_else(|| anyhow!("No test specified"))?;
        let test =
            RankTest::from_cli_name(name).ok_or_else(|| anyhow!("Unknown test {}", name))?;

        let sizes: Vec<i64> = m
            .get_many::<i64>("sizes")
            .ok_or_else(|| anyhow!("Missing group sizes"))?
            .copied()
            .collect();
        let groups = GroupSizes::new(&sizes)?;
        test.check_groups(&groups)?;
        debug!("{} test with group sizes {}", test, groups);

        let reps = m.get_one::<usize>("reps").copied().unwrap_or(DEFAULT_REPS);
        let seed = m.get_one::<u64>("seed").copied();
        let threads = m.get_one::<usize>("threads").copied();

        let observed = m.get_one::<String>("observed").and_then(|s| {
            let x = parse_observed(s);
            if x.is_none() {
                warn!(
                    "Observed value '{}' is not a finite number; no p-value will be reported",
                    s
                );
            }
            x
        });

        let quantiles = m
            .get_many::<f64>("quantiles")
            .map(|v| v.copied().collect::<Vec<_>>());

        let reverse = if m.get_flag("reverse") {
            Some(true)
        } else if m.get_flag("no_reverse") {
            Some(false)
        } else {
            None
        };

        let print = !m.get_flag("quiet");

        Ok(Config {
            test,
            groups,
            params: McParams {
                reps,
                observed,
                print,
                quantiles,
                reverse,
                seed,
                threads,
            },
        })
    }
}
