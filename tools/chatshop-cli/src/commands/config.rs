//! Configuration management commands.

use anyhow::{bail, Result};
use chatshop_commerce::checkout::normalize_destination;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    // Store section
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("dir", &ctx.store_dir().display().to_string());

    // Catalog section
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in sample)"),
    );
    ctx.output.kv("currency", &ctx.config.catalog.currency);

    // Checkout section
    let checkout = &ctx.config.checkout;
    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("host", &checkout.host);
    ctx.output.kv(
        "destination",
        checkout.destination.as_deref().unwrap_or("(ask when sending)"),
    );
    if checkout.greeting.trim().is_empty() {
        ctx.output.kv("greeting", "(none)");
    } else {
        ctx.output.kv("greeting", &checkout.greeting);
    }
    if let Ok(locale) = ctx.config.locale() {
        ctx.output.kv("locale", locale.tag());
    }
    match checkout.soft_link_limit {
        0 => ctx.output.kv("soft_link_limit", "(off)"),
        limit => ctx.output.kv("soft_link_limit", &limit.to_string()),
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = ctx
        .config_path
        .clone()
        .unwrap_or_else(|| ctx.cwd.join(CONFIG_FILE_NAMES[0]));

    let mut config = ctx.config.clone();
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(&ctx.config);
    let mut errors = errors;

    // The catalog file is only checked once the values it depends on are valid.
    if errors.is_empty() {
        if let Err(e) = ctx.catalog() {
            errors.push(format!("{e:#}"));
        }
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let optional = |v: &str| (!v.trim().is_empty()).then(|| v.to_string());

    match parts.as_slice() {
        ["store", "dir"] => config.store.dir = value.to_string(),
        ["catalog", "path"] => config.catalog.path = optional(value),
        ["catalog", "currency"] => config.catalog.currency = value.to_uppercase(),
        ["checkout", "host"] => config.checkout.host = value.to_string(),
        ["checkout", "destination"] => config.checkout.destination = optional(value),
        ["checkout", "greeting"] => config.checkout.greeting = value.to_string(),
        ["checkout", "locale"] => config.checkout.locale = optional(value),
        ["checkout", "soft_link_limit"] => config.checkout.soft_link_limit = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

/// Static checks that need no filesystem access.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if config.store.dir.trim().is_empty() {
        errors.push("store.dir must not be empty".to_string());
    }

    if let Err(e) = config.currency() {
        errors.push(format!("catalog.currency: {e}"));
    }

    if let Err(e) = config.locale() {
        errors.push(format!("checkout.locale: {e}"));
    }

    let host = config.checkout.host.trim();
    let bare_host = host
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    if bare_host.is_empty() {
        errors.push("checkout.host is required".to_string());
    } else if bare_host.contains('/') {
        errors.push(format!(
            "checkout.host '{}' should be a bare host name, e.g. wa.me",
            host
        ));
    } else if bare_host != host {
        warnings.push(format!("checkout.host '{}' is used as '{}'", host, bare_host));
    }

    match config.checkout.destination.as_deref() {
        None => warnings.push(
            "checkout.destination is not set; shoppers will pick the recipient".to_string(),
        ),
        Some(dest) if normalize_destination(dest).is_empty() => {
            errors.push("checkout.destination is empty".to_string())
        }
        Some(_) => {}
    }

    (errors, warnings)
}
