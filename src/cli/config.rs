//! Configuration CLI command handlers

use std::path::PathBuf;

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::{Result, ThemeError};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Remove { key } => handle_remove(key),
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let mut config = Config::load()?;
    apply_set(&mut config, key, &value)?;
    config.save()?;

    match key {
        ConfigKey::ThemesDir => {
            if let Some(dir) = &config.themes_dir {
                println!("Themes directory set to: {}", dir.display());
            }
        }
        ConfigKey::Fonts => println!("Installed fonts: {}", config.fonts.join(", ")),
    }
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    let config = Config::load()?;
    match key {
        ConfigKey::ThemesDir => match (&config.themes_dir, config.resolved_themes_dir()) {
            (Some(dir), _) => println!("Themes directory: {}", dir.display()),
            (None, Some(dir)) => println!("Themes directory: {} (default)", dir.display()),
            (None, None) => println!("Themes directory: Not configured"),
        },
        ConfigKey::Fonts => {
            if config.fonts.is_empty() {
                println!("Installed fonts: Not configured");
            } else {
                println!("Installed fonts: {}", config.fonts.join(", "));
            }
        }
    }
    Ok(())
}

/// Handle removing a configuration value
fn handle_remove(key: ConfigKey) -> Result<()> {
    let mut config = Config::load()?;
    apply_remove(&mut config, key);
    config.save()?;

    match key {
        ConfigKey::ThemesDir => println!("Themes directory reset to default."),
        ConfigKey::Fonts => println!("Installed fonts have been cleared."),
    }
    Ok(())
}

/// Apply `config set` to an in-memory config
///
/// Fonts accept a comma-separated list of family names.
fn apply_set(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ThemeError::InvalidInput(
            "Configuration value cannot be empty".into(),
        ));
    }

    match key {
        ConfigKey::ThemesDir => config.set_themes_dir(Some(PathBuf::from(value))),
        ConfigKey::Fonts => value
            .split(',')
            .map(str::trim)
            .filter(|family| !family.is_empty())
            .for_each(|family| config.add_font(family)),
    }
    Ok(())
}

fn apply_remove(config: &mut Config, key: ConfigKey) {
    match key {
        ConfigKey::ThemesDir => config.set_themes_dir(None),
        ConfigKey::Fonts => config.fonts.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_fonts_splits_list() {
        let mut config = Config::default();
        apply_set(&mut config, ConfigKey::Fonts, "Inter-Regular, Inter-Bold,,Inter-Regular").unwrap();
        assert_eq!(config.fonts, vec!["Inter-Regular", "Inter-Bold"]);
    }

    #[test]
    fn test_set_rejects_empty_value() {
        let mut config = Config::default();
        let err = apply_set(&mut config, ConfigKey::ThemesDir, "  ").err().unwrap();
        assert!(matches!(err, ThemeError::InvalidInput(_)));
    }

    #[test]
    fn test_remove_resets_values() {
        let mut config = Config::default();
        apply_set(&mut config, ConfigKey::ThemesDir, "/srv/themes").unwrap();
        apply_set(&mut config, ConfigKey::Fonts, "Inter-Regular").unwrap();

        apply_remove(&mut config, ConfigKey::ThemesDir);
        apply_remove(&mut config, ConfigKey::Fonts);
        assert_eq!(config, Config::default());
    }
}
