use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = super::load(global)?;
            output::print_output(parkrate_config::to_toml(&cfg)?.trim_end());
        }
        ConfigCommand::Path => {
            let path = global
                .config
                .clone()
                .unwrap_or_else(parkrate_config::config_path);
            output::print_output(&path.display().to_string());
        }
    }
    Ok(())
}
