pub mod config_cmd;
pub mod quote;
pub mod rates;
pub mod serve;

use std::path::Path;

use parkrate_config::{Config, config_path, load_config};
use parkrate_core::RateRule;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load configuration honoring `--config`.
pub(crate) fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(load_config(global.config.as_deref())?)
}

/// Resolve the rates document from a flag override or the config, and
/// expand it. One-shot commands need a table to work against.
pub(crate) fn load_rules(flag: Option<&Path>, config: &Config) -> Result<Vec<RateRule>, CliError> {
    let path = flag
        .or(config.rates.rates_filepath.as_deref())
        .ok_or_else(|| CliError::NoRates {
            path: config_path().display().to_string(),
        })?;
    Ok(parkrate_config::load_rates_file(path)?)
}
