//! Command-line and environment settings.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Watches GitHub repositories for new releases and pushes ntfy
/// notifications.
#[derive(Parser, Debug, Clone)]
#[command(name = "relwatch")]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// ntfy topic URL notifications are pushed to.
    #[arg(long, env = "RELWATCH_NTFY_URL")]
    pub ntfy_url: String,

    /// Access token for the ntfy topic.
    #[arg(long, env = "RELWATCH_NTFY_TOKEN")]
    pub ntfy_token: Option<String>,

    /// Time between polling sweeps, e.g. "30s", "15m", "1h" or "2d".
    /// A bare number is read as seconds.
    #[arg(long, default_value = "1h", env = "RELWATCH_INTERVAL", value_parser = parse_duration)]
    pub interval: Duration,

    /// File listing the repositories to watch, one "owner/repo" per line.
    #[arg(long, default_value = "repos.txt", env = "RELWATCH_REPOS_FILE")]
    pub repos_file: PathBuf,

    /// File the last seen release versions are persisted to.
    #[arg(long, default_value = "releases.json", env = "RELWATCH_STORE_FILE")]
    pub store_file: PathBuf,

    /// GitHub API token for authenticated requests.
    #[arg(long, env = "RELWATCH_GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Base URL of the GitHub REST API.
    #[arg(
        long,
        default_value = "https://api.github.com",
        env = "RELWATCH_GITHUB_API_URL"
    )]
    pub github_api_url: String,

    /// Enable debug logging.
    #[arg(long, env = "RELWATCH_DEBUG")]
    pub debug: bool,
}

/// Parses a duration like "30s", "15m", "1h" or "2d". A bare number is
/// read as seconds.
fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    let (value, unit) = match input.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => input.split_at(idx),
        None => (input, "s"),
    };

    let value: u64 = value
        .parse()
        .map_err(|_| format!("invalid duration '{input}'"))?;

    let seconds = match unit {
        "s" => Some(value),
        "m" => value.checked_mul(60),
        "h" => value.checked_mul(3600),
        "d" => value.checked_mul(86400),
        _ => {
            return Err(format!(
                "invalid duration unit '{unit}', expected one of s, m, h, d"
            ))
        }
    }
    .ok_or_else(|| format!("duration '{input}' is too large"))?;

    if seconds == 0 {
        return Err("duration must be positive".to_string());
    }

    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration("15m"), Ok(Duration::from_secs(900)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration("2d"), Ok(Duration::from_secs(172_800)));
    }

    #[test]
    fn test_parse_duration_bare_number_is_seconds() {
        assert_eq!(parse_duration("90"), Ok(Duration::from_secs(90)));
    }

    #[test]
    fn test_parse_duration_rejects_zero() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("0").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert!(parse_duration("400000000000000000m").is_err());
        assert!(parse_duration("18446744073709551615d").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("1h30m").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_settings_defaults() {
        let settings =
            Settings::try_parse_from(["relwatch", "--ntfy-url", "https://ntfy.sh/releases"])
                .unwrap();

        assert_eq!(settings.interval, Duration::from_secs(3600));
        assert_eq!(settings.repos_file, PathBuf::from("repos.txt"));
        assert_eq!(settings.store_file, PathBuf::from("releases.json"));
        assert_eq!(settings.github_api_url, "https://api.github.com");
        assert!(!settings.debug);
    }
}
