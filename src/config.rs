use clap::ValueEnum;

/// Destination chat system. Closed set: an unrecognized tag is rejected at
/// argument-parse time instead of silently producing an empty reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Slack,
    Msteams,
}

/// Everything one run needs, resolved up front and passed by value. No
/// ambient environment reads happen after this is built.
#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub api_base: Option<String>,
    pub provider: Provider,
    pub webhook_url: String,
    pub channel: String,
    pub provider_map_raw: String,
    pub waiting_time_days: i64,
    pub ignore_label: String,
    pub dry_run: bool,
}
