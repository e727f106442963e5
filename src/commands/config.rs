use std::path::Path;

use anyhow::Result;
use daybook_core::config::DaybookConfig;
use owo_colors::OwoColorize;

pub fn run(override_path: Option<&Path>, config: &DaybookConfig) -> Result<()> {
    let config_path = match override_path {
        Some(path) => path.to_path_buf(),
        None => DaybookConfig::config_path()?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
