use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        info("Initializing progressdash…");
        info(format!("Config file : {}", path.display()));

        Config::init_at(&path, *force)?;

        success(format!("Configuration written to {}", path.display()));
    }
    Ok(())
}
