use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (unless one exists and --force is not given)
///  - the data directory the roster and day files live in
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    let written = Config::init_all(path, cli.data_dir.as_deref(), force)?;
    if written {
        success(format!("Config file: {}", path.display()));
    } else {
        warning(format!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        ));
    }

    let cfg = Config::load(path)?;
    info(format!("Data directory: {}", cfg.data_path().display()));
    info(format!(
        "Expected files: {} and one <Day>.csv per school day ({})",
        cfg.roster_file,
        cfg.school_days.join(", ")
    ));
    Ok(())
}
