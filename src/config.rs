use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::args::Args;
use crate::errors::{Result, TrackerError};
use crate::{v_info, DEFAULT_API_BASE_URL};

/// Languages the API localizes item and currency names into.
pub const SUPPORTED_LANGUAGES: [&str; 5] = ["en", "es", "de", "fr", "zh"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerSettings {
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub targets: TargetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Account API key; needs the account, characters, inventories and wallet permissions
    pub key: String,
    /// Language code for item and currency names
    pub language: String,
    pub base_url: String,
    /// Append every request and response to the API debug log
    pub log_requests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Seconds between refreshes; 0 renders once and exits
    pub refresh_seconds: u64,
    /// Separate currency and material tables instead of one combined table
    pub grouped: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetsConfig {
    /// Directory holding the target configuration documents
    pub directory: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                key: String::new(),
                language: "en".to_string(),
                base_url: DEFAULT_API_BASE_URL.to_string(),
                log_requests: false,
            },
            display: DisplayConfig {
                refresh_seconds: 0,
                grouped: true,
            },
            targets: TargetsConfig {
                directory: "configurations".to_string(),
            },
        }
    }
}

impl TrackerSettings {
    /// Load settings from file, creating a default file if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading settings from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let settings: TrackerSettings = toml::from_str(&config_str)?;
            Ok(settings)
        } else {
            v_info!("📋 Creating default settings at {}", config_path);
            let settings = TrackerSettings::default();
            settings.save(config_path)?;
            v_info!("💡 Edit {} or pass --api-key to set your API key", config_path);
            Ok(settings)
        }
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("cannot serialize settings: {}", e)))?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    /// Layer command line and environment values over the file contents.
    /// clap has already resolved each flag against its environment variable.
    pub fn apply_overrides(&mut self, args: &Args) -> Result<()> {
        if let Some(key) = &args.api_key {
            self.api.key = key.clone();
        }
        if let Some(language) = &args.lang {
            self.api.language = language.clone();
        }
        if let Some(refresh) = &args.refresh {
            self.display.refresh_seconds = refresh.trim().parse().map_err(|_| {
                TrackerError::Config(format!("refresh must be a whole number of seconds, got {:?}", refresh))
            })?;
        }
        if let Some(grouped) = &args.grouped {
            self.display.grouped = parse_flag(grouped)?;
        }
        if let Some(directory) = &args.targets_dir {
            self.targets.directory = directory.clone();
        }
        if args.log_requests {
            self.api.log_requests = true;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.key.trim().is_empty() {
            return Err(TrackerError::Config(
                "an API key is required (settings file, --api-key or GW2_API_KEY)".to_string(),
            ));
        }
        if !SUPPORTED_LANGUAGES.contains(&self.api.language.as_str()) {
            return Err(TrackerError::Config(format!(
                "language must be one of {:?}, got {:?}",
                SUPPORTED_LANGUAGES, self.api.language
            )));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(TrackerError::Config("base_url must not be empty".to_string()));
        }
        if self.targets.directory.trim().is_empty() {
            return Err(TrackerError::Config("targets directory must not be empty".to_string()));
        }

        v_info!("✅ Settings validation passed");
        Ok(())
    }

    pub fn print_summary(&self) {
        v_info!("📋 Settings Summary:");
        v_info!("   🌐 API: {} ({})", self.api.base_url, self.api.language);
        v_info!("   ⏰ Refresh: {}", match self.display.refresh_seconds {
            0 => "once".to_string(),
            secs => format!("every {}s", secs),
        });
        v_info!("   📊 Grouped tables: {}", self.display.grouped);
        v_info!("   📁 Targets: {}", self.targets.directory);
    }
}

/// Boolean given as text, e.g. from an environment variable.
pub fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(TrackerError::Config(format!("expected true or false, got {:?}", other))),
    }
}
