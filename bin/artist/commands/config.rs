//! Config command - show the effective configuration

use crate::print_banner;
use crate::style::*;
use anyhow::Result;
use artist_program::ProgramConfig;
use std::path::Path;

pub fn run(config: &ProgramConfig, explicit_path: Option<&Path>) -> Result<()> {
    print_banner();

    let source = match explicit_path {
        Some(path) => path.display().to_string(),
        None => match ProgramConfig::default_path() {
            Some(path) if path.exists() => path.display().to_string(),
            Some(path) => format!("defaults ({} not found)", path.display()),
            None => "defaults".to_string(),
        },
    };
    print_key_value("Source", &source);
    print_key_value(
        "Chain",
        &format!("{} ({})", config.chain.name, config.chain.chain_id),
    );
    print_key_value("Factory", &config.factory_address.to_string());
    if config.factory_address.is_zero() {
        print_warning("Factory address is the zero placeholder");
    }
    println!();
    println!("{}", config.to_toml_string()?);
    Ok(())
}
