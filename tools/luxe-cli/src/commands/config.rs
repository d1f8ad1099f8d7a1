//! Configuration management commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("");
    ctx.output.info("[stylist]");
    ctx.output.kv("model", &ctx.config.stylist.model);
    ctx.output.kv("api_key_env", &ctx.config.stylist.api_key_env);
    if let Some(ref url) = ctx.config.stylist.base_url {
        ctx.output.kv("base_url", url);
    }

    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output
        .kv("path", &ctx.state_path().display().to_string());

    if let Some(max_price) = ctx.config.browse.max_price {
        ctx.output.info("");
        ctx.output.info("[browse]");
        ctx.output.kv("max_price", &max_price.to_string());
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        ctx.output.text(&value.to_string());
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(&ctx.cwd)?;
    let path = config_path.to_string_lossy();

    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<serde_json::Value> {
    let parts: Vec<&str> = key.split('.').collect();

    let value = match parts.as_slice() {
        ["stylist", "model"] => config.stylist.model.clone().into(),
        ["stylist", "api_key_env"] => config.stylist.api_key_env.clone().into(),
        ["stylist", "base_url"] => config.stylist.base_url.clone().into(),
        ["storage", "path"] => config.storage.path.clone().into(),
        ["browse", "max_price"] => config.browse.max_price.into(),
        _ => bail!("Unknown config key: {}", key),
    };

    Ok(value)
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["stylist", "model"] => config.stylist.model = value.to_string(),
        ["stylist", "api_key_env"] => config.stylist.api_key_env = value.to_string(),
        ["stylist", "base_url"] => config.stylist.base_url = Some(value.to_string()),
        ["storage", "path"] => config.storage.path = Some(value.to_string()),
        ["browse", "max_price"] => {
            let max_price: i64 = value.parse()?;
            super::browse::parse_max_price(Some(max_price))?;
            config.browse.max_price = Some(max_price);
        }
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &Path) -> Result<PathBuf> {
    for name in &CONFIG_NAMES {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("No config file found. Run `luxe config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let config = CliConfig::default();
        assert_eq!(
            get_config_value(&config, "stylist.model").unwrap(),
            "gemini-3-flash-preview"
        );
        assert_eq!(
            get_config_value(&config, "browse.max_price").unwrap(),
            serde_json::Value::Null
        );
        assert!(get_config_value(&config, "deploy.canary").is_err());
    }

    #[test]
    fn test_set_values() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "browse.max_price", "800").unwrap();
        set_config_value(&mut config, "stylist.base_url", "http://localhost:9000").unwrap();
        assert_eq!(config.browse.max_price, Some(800));
        assert_eq!(
            config.stylist.base_url.as_deref(),
            Some("http://localhost:9000")
        );
    }

    #[test]
    fn test_set_rejects_bad_price() {
        let mut config = CliConfig::default();
        assert!(set_config_value(&mut config, "browse.max_price", "cheap").is_err());
        assert!(set_config_value(&mut config, "browse.max_price", "-5").is_err());
        assert!(
            set_config_value(&mut config, "browse.max_price", "100000000000000000").is_err()
        );
        assert_eq!(config.browse.max_price, None);
        assert!(set_config_value(&mut config, "nope", "1").is_err());
    }
}
