use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Locator;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::web;
use std::sync::Arc;

/// Handle the `serve` command: run the HTTP server until interrupted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        let locator = Arc::new(Locator::from_config(&cfg)?);
        let addr = cfg.bind_address();
        info(format!(
            "Serving timetables from {} on http://{}",
            cfg.data_path().display(),
            addr
        ));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(web::serve(locator, &addr))?;
    }
    Ok(())
}
