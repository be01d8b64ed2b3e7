use std::path::PathBuf;

use serde::Deserialize;

/// Shell configuration loaded from ~/.config/sjp-shell/config.toml.
#[derive(Debug, Default, Deserialize)]
pub struct ShellConfig {
    /// Default device identifier passed to window factories when the
    /// operator does not supply one.
    pub device_id: Option<String>,

    /// Whether the operator session is elevated. The shell uses this to
    /// gate modules that declare `requires_super_user`.
    #[serde(default)]
    pub super_user: bool,
}

/// Get the config file path.
pub fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("sjp-shell")
            .join("config.toml")
    } else if let Ok(appdata) = std::env::var("APPDATA") {
        PathBuf::from(appdata).join("sjp-shell").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Load the shell config from the default path.
pub fn load_config() -> ShellConfig {
    let path = config_path();
    if !path.exists() {
        return ShellConfig::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Failed to parse config at {}: {e}", path.display());
            ShellConfig::default()
        }),
        Err(e) => {
            log::warn!("Failed to read config at {}: {e}", path.display());
            ShellConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml = r#"
device_id = "PLANTA-01"
super_user = true
"#;
        let config: ShellConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.device_id.as_deref(), Some("PLANTA-01"));
        assert!(config.super_user);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ShellConfig = toml::from_str("").expect("parse empty config");
        assert!(config.device_id.is_none());
        assert!(!config.super_user);
    }
}
