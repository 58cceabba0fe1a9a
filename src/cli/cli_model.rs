use clap::{command, value_parser, Arg, ArgAction, Command};

use rank_mc::{RankTest, DEFAULT_REPS};

use crate::log_utils::LogLevel;

pub(super) fn cli_model() -> Command {
    let cmd = command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("info")
                .global(true)
                .help("Set log level"),
        );
    RankTest::ALL
        .iter()
        .fold(cmd, |cmd, t| cmd.subcommand(test_command(*t)))
}

fn fmt_quantiles(q: &[f64]) -> String {
    q.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn test_command(test: RankTest) -> Command {
    let n_groups = match test {
        RankTest::KruskalWallis => "two or more",
        _ => "two",
    };
    let dflt = |x: bool| if x == test.default_reverse() { " [default]" } else { "" };
    Command::new(test.cli_name())
        .visible_alias(test.cli_alias())
        .about(format!(
            "Simulate critical values for the {} test",
            test.name()
        ))
        .arg(
            Arg::new("sizes")
                .value_parser(value_parser!(i64))
                .num_args(1..)
                .value_delimiter(',')
                .allow_negative_numbers(true)
                .required(true)
                .value_name("SIZES")
                .help(format!("Group sizes ({} groups)", n_groups)),
        )
        .next_help_heading("Simulation")
        .arg(
            Arg::new("reps")
                .short('r')
                .long("reps")
                .value_parser(value_parser!(usize))
                .value_name("INT")
                .help(format!("Number of Monte Carlo trials [default: {}]", DEFAULT_REPS)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64))
                .value_name("SEED")
                .help("Random seed [default: taken from system entropy]"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_parser(value_parser!(usize))
                .value_name("INT")
                .help("Number of worker threads [default: number of logical CPUs]"),
        )
        .next_help_heading("Summary")
        .arg(
            Arg::new("observed")
                .short('x')
                .long("observed")
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true)
                .value_name("VALUE")
                .help("Observed statistic; report the proportion of the simulated distribution beyond it"),
        )
        .arg(
            Arg::new("quantiles")
                .short('q')
                .long("quantiles")
                .num_args(1..)
                .value_delimiter(',')
                .value_parser(value_parser!(f64))
                .value_name("Q1,Q2,..")
                .help(format!(
                    "Quantiles to report [default: {}]",
                    fmt_quantiles(test.default_quantiles())
                )),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .action(ArgAction::SetTrue)
                .conflicts_with("no_reverse")
                .help(format!("Report proportion above the observed value{}", dflt(true))),
        )
        .arg(
            Arg::new("no_reverse")
                .long("no-reverse")
                .action(ArgAction::SetTrue)
                .help(format!("Report proportion below the observed value{}", dflt(false))),
        )
        .next_help_heading("Output")
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("No progress or table; write tab separated results to stdout"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_is_valid() {
        cli_model().debug_assert();
    }

    #[test]
    fn test_subcommands() {
        let m = cli_model()
            .try_get_matches_from(["rank-mc", "kw", "25,25,25", "-r", "500"])
            .unwrap();
        let (name, sm) = m.subcommand().unwrap();
        assert_eq!(name, "kruskal-wallis");
        let sizes: Vec<i64> = sm.get_many::<i64>("sizes").unwrap().copied().collect();
        assert_eq!(sizes, vec![25, 25, 25]);
        assert_eq!(sm.get_one::<usize>("reps"), Some(&500));
    }

    #[test]
    fn test_reverse_conflict() {
        let res = cli_model().try_get_matches_from([
            "rank-mc",
            "mann-whitney",
            "20",
            "20",
            "--reverse",
            "--no-reverse",
        ]);
        assert!(res.is_err());
    }
}
