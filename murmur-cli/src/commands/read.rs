use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use murmur_core::FeedFilter;
use murmur_core::feed::format_message;

use crate::config::MurmurConfig;

#[derive(Args)]
pub struct ReadArgs {
    /// Show only the most recent N messages
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only messages posted after this RFC 3339 timestamp
    #[arg(long, value_parser = parse_since)]
    pub since: Option<DateTime<Utc>>,

    /// Only messages from this author
    #[arg(long)]
    pub author: Option<String>,

    /// Print messages as a JSON array
    #[arg(long)]
    pub json: bool,
}

fn parse_since(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp like 2026-01-02T15:04:05Z: {e}"))
}

pub fn run(args: ReadArgs, config: &MurmurConfig) -> Result<()> {
    let filter = FeedFilter {
        since: args.since,
        author: args.author,
        limit: args.limit,
    };
    let messages = super::feed(config).read(&filter)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&messages)?);
        return Ok(());
    }

    for message in &messages {
        println!("{}", format_message(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_since_accepts_offsets() {
        let parsed = parse_since("2026-03-14T10:26:53+01:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap());
    }

    #[test]
    fn test_parse_since_rejects_garbage() {
        assert!(parse_since("yesterday").is_err());
    }
}
