//! Config command - print the effective configuration

use anyhow::Result;
use tourplan_core::config::Config;

pub fn run(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.schema)?);
        return Ok(());
    }

    match &config.path {
        Some(path) => println!("# Loaded from {path}"),
        None => println!("# Built-in defaults"),
    }
    print!("{}", toml::to_string_pretty(&config.schema)?);

    Ok(())
}
