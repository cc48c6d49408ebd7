//! Config command - inspect and initialise configuration

use conjuga::config::Config;
use conjuga::output::{OperationResult, OutputMode};

use super::Context;
use crate::cli::ConfigAction;

/// Handle config subcommands
pub fn config(ctx: &Context, action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            if ctx.mode == OutputMode::Json {
                let json = serde_json::json!({
                    "path": Config::config_path(),
                    "data_dir": ctx.data_dir(),
                    "config": ctx.config,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                println!("# {}", Config::config_path().display());
                println!("# data dir: {}", ctx.data_dir().display());
                print!("{}", ctx.config.to_toml()?);
            }
        },
        ConfigAction::Path => {
            if ctx.mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "path": Config::config_path() }));
            } else {
                println!("{}", Config::config_path().display());
            }
        },
        ConfigAction::Init { force } => {
            let path = Config::config_path();
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Config::default().save()?;
            OperationResult::ok(format!("Wrote {}", path.display())).render(ctx.mode);
        },
    }
    Ok(())
}
