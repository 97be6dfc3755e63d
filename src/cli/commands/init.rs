use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Writes the configuration file with default values (skipped in test
/// mode) and prints where everything lives.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing wordlink…");

    let path = Config::init_all(cli.config.as_deref(), cli.test)?;
    let cfg = Config::load(cli.config.as_deref())?;

    if cli.test {
        println!("📄 Config file : {} (test mode, not written)", path.display());
    } else {
        println!("✅ Config file : {}", path.display());
    }
    println!("📡 Device      : {}", cfg.device_url);

    println!("🎉 wordlink initialization completed!");
    Ok(())
}
