use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Locator;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Times { day } = cmd {
        let locator = Locator::from_config(cfg)?;
        let (day, times) = locator.start_times(day.as_deref());

        if times.is_empty() {
            warning(format!("No sessions listed for {day}."));
            return Ok(());
        }

        println!("Start times on {day}:");
        for t in times {
            println!("  {t}");
        }
    }
    Ok(())
}
