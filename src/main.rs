#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

use std::io::{self, BufWriter, Write};

use rank_mc::McOutcome;

mod cli;
mod log_utils;

/// Tab separated results for quiet mode: one `quantile\tvalue` line per
/// critical value, then `p\tvalue` if a p-value was computed.
fn output_tsv(res: &McOutcome) -> io::Result<()> {
    let mut wrt = BufWriter::new(io::stdout().lock());
    for (q, x) in res.table.iter() {
        writeln!(wrt, "{}\t{}", q, x)?;
    }
    if let Some(p) = res.p_value {
        writeln!(wrt, "p\t{}", p)?;
    }
    wrt.flush()
}

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli()?;
    let res = cfg
        .test()
        .compute_critical_values(cfg.groups(), cfg.params())?;
    debug!("Run used seed {}", res.seed);
    if !cfg.params().print {
        output_tsv(&res)?
    }
    Ok(())
}
