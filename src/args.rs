use clap::Parser;

/// Track Guild Wars 2 collection goals against your account inventory.
#[derive(Parser, Debug, Default)]
#[command(version)]
pub struct Args {
    /// Settings file, created with defaults when missing
    #[arg(long, default_value = crate::SETTINGS_FILE)]
    pub settings: String,

    /// Account API key
    #[arg(long, env = "GW2_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Language for item and currency names (en, es, de, fr, zh)
    #[arg(long, env = "GW2_LANG")]
    pub lang: Option<String>,

    /// Seconds between refreshes, 0 to render once
    #[arg(long, env = "GW2_REFRESH")]
    pub refresh: Option<String>,

    /// Render currencies and materials as separate tables (true/false)
    #[arg(long, env = "GW2_GROUPED")]
    pub grouped: Option<String>,

    /// Directory holding target configuration documents
    #[arg(long)]
    pub targets_dir: Option<String>,

    /// Target configuration to load by file name or index, skipping the prompt
    #[arg(long)]
    pub target: Option<String>,

    /// Stop after this many renders
    #[arg(long)]
    pub cycles: Option<u32>,

    /// List the available target configurations and exit
    #[arg(long)]
    pub list_targets: bool,

    /// Append every API request and response to the debug log
    #[arg(long)]
    pub log_requests: bool,

    /// Increase output verbosity (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse() -> Args {
    Args::parse()
}
