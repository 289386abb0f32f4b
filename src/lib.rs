// Guild Wars 2 collection goal tracker
// Polls the account API and reports progress toward configured targets

pub mod args;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod operations;
pub mod targets;
pub mod verbosity;

// Re-export commonly used types
pub use models::*;

pub use client::{AccountApi, Gw2Client};
pub use config::TrackerSettings;
pub use errors::TrackerError;
pub use operations::{LoopState, RefreshLoop};
pub use targets::{FixedSelector, PromptSelector, TargetConfiguration, TargetSelector};

// Constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.guildwars2.com";
pub const SETTINGS_FILE: &str = "gw2_tracker.toml";
pub const API_LOG_FILE: &str = "api_debug.log";
/// API key permissions the tracker reads through.
pub const REQUIRED_PERMISSIONS: [&str; 4] = ["account", "characters", "inventories", "wallet"];
