use crate::cli::commands::print_pane;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::client::{DeviceClient, HttpDeviceClient};
use crate::core::render::LogPane;
use crate::errors::AppResult;

/// Handle the `log` subcommand.
///
/// Unlike the refresh after a `send`, a failed fetch is an error here:
/// there is no previous log to fall back to.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { all } = cmd {
        let client = HttpDeviceClient::new(cfg.device_url.clone())?;
        let policy = cfg.time_policy()?;
        let height = if *all { 0 } else { cfg.log_view_lines };

        let records = client.fetch_log()?;
        let mut pane = LogPane::new(height);
        pane.replace(&records, &policy);

        print_pane(&pane, cfg.color)?;
    }

    Ok(())
}
