use crate::error::{LunarioError, Result};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Community name shown in screen headers
    pub community: String,
    pub weatherapi: WeatherApiConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherApiConfig {
    pub api_key: String,
    /// Location query sent to the provider, e.g. "Salitre, Ecuador"
    pub location: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_forecast_days() -> u8 {
    7
}

impl std::fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("location", &self.location)
            .field("forecast_days", &self.forecast_days)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(LunarioError::Config(format!(
                "Config file not found at {:?}. Run `lunario init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| LunarioError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| LunarioError::Config(format!("Failed to parse config: {}", e)))?;

        if config.weatherapi.api_key.is_empty() {
            return Err(LunarioError::Config(
                "weatherapi.api_key is empty - set it in config.yaml or via WEATHERAPI_KEY".into(),
            ));
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("lunario").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| LunarioError::Config("Cannot determine config directory".into()))?
            .join("lunario")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/lunario/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LunarioError::Config("Cannot determine config directory".into()))?
            .join("lunario");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up Lunario!");
        println!();

        println!("Community");
        let community: String = Input::new()
            .with_prompt("  Name shown in the header")
            .default("Salitre".into())
            .interact_text()
            .map_err(|e| LunarioError::Config(format!("Input error: {}", e)))?;

        let location: String = Input::new()
            .with_prompt("  Location query for the weather provider")
            .default("Salitre, Ecuador".into())
            .interact_text()
            .map_err(|e| LunarioError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("WeatherAPI (https://www.weatherapi.com)");
        let api_key: String = Input::new()
            .with_prompt("  API key")
            .interact_text()
            .map_err(|e| LunarioError::Config(format!("Input error: {}", e)))?;

        let forecast_days: u8 = Input::new()
            .with_prompt("  Forecast days")
            .default(7)
            .interact_text()
            .map_err(|e| LunarioError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            community,
            weatherapi: WeatherApiConfig {
                api_key,
                location,
                forecast_days,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| LunarioError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# Lunario Configuration\n# Generated by `lunario init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            community: "Salitre".into(),
            weatherapi: WeatherApiConfig {
                api_key: String::new(),
                location: "Salitre, Ecuador".into(),
                forecast_days: default_forecast_days(),
            },
        }
    }
}
