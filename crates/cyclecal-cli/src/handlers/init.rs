use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
        println!("Run `cyclecal init --force` to overwrite it.");
        return Ok(());
    }

    Config::starter().save_to(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
