use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    display_name = "Broadcast Standings",
    long_about = "Loads a broadcast-round standings feed and prints the sorted player table"
)]
pub struct Args {
    /// Path to the standings feed document (JSON)
    #[arg(short, long, env = "STANDINGS_FEED", help = "Path to the standings feed document")]
    pub feed: PathBuf,

    /// Column to sort by instead of the feed's default
    /// (score when the round tracks points, rating otherwise)
    #[arg(
        short,
        long,
        value_parser = ["name", "rating", "score"],
        help = "Sort column"
    )]
    pub sort: Option<String>,

    /// Reverses the displayed order, exactly as the header toggle does
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub reverse: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
