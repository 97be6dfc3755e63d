use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::client::HttpDeviceClient;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let client = HttpDeviceClient::new(cfg.device_url.clone())?;
        ExportLogic::export(&client, &cfg.time_policy()?, *format, file, *force)?;
    }
    Ok(())
}
