use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default category sets
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing daytally…");

    Config::init_all(cli.test)?;

    let cfg = Config::load();
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🏷️  Categories  : {}", cfg.categories.join(", "));
    println!("⏱️  Timer set   : {}", cfg.timer_categories.join(", "));

    println!("🎉 daytally initialization completed!");
    Ok(())
}
