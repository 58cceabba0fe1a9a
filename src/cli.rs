mod cli_model;
mod config;

pub use config::Config;

pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model::cli_model().get_matches();
    crate::log_utils::init_log(&m)?;
    Config::from_matches(&m)
}
