use crate::errors::{RelayError, RelayResult};

// UA from a desktop browser; the feed host blocks obvious bot agents.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";
const DEFAULT_FEED_BASE_URL: &str = "https://nitter.net";
const DEFAULT_KEYWORDS: &str = "cybersecurity,zeroday";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 900;

#[derive(Debug, Clone)]
pub struct Config {
    pub chat_url: String,
    pub chat_token: String,
    pub db_path: String,
    pub feed_base_url: String,
    pub keywords: Vec<String>,
    pub user_agent: String,
    pub poll_interval_secs: u64,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> RelayResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let chat_url = std::env::var("CHAT_URL")
            .map_err(|_| RelayError::MissingEnvVar("CHAT_URL".to_string()))?;

        let chat_token = std::env::var("CHAT_TOKEN")
            .map_err(|_| RelayError::MissingEnvVar("CHAT_TOKEN".to_string()))?;

        // Default db_path is relative to executable directory
        let db_path = std::env::var("RELAY_DB_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("relay.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./relay.db".to_string())
        });

        let feed_base_url = std::env::var("RELAY_FEED_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_FEED_BASE_URL.to_string());

        let keywords = parse_keywords(
            &std::env::var("RELAY_KEYWORDS").unwrap_or_else(|_| DEFAULT_KEYWORDS.to_string()),
        )?;

        let user_agent =
            std::env::var("RELAY_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let poll_interval_secs = match std::env::var("RELAY_POLL_INTERVAL_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                RelayError::Config(format!("RELAY_POLL_INTERVAL_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            chat_url,
            chat_token,
            db_path,
            feed_base_url,
            keywords,
            user_agent,
            poll_interval_secs,
        })
    }
}

fn parse_keywords(raw: &str) -> RelayResult<Vec<String>> {
    let keywords: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        return Err(RelayError::Config(
            "RELAY_KEYWORDS must list at least one keyword".to_string(),
        ));
    }

    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_splits_and_trims() {
        let keywords = parse_keywords("cybersecurity, zeroday ,infosec").unwrap();
        assert_eq!(keywords, vec!["cybersecurity", "zeroday", "infosec"]);
    }

    #[test]
    fn test_parse_keywords_rejects_empty_list() {
        assert!(matches!(parse_keywords(" , "), Err(RelayError::Config(_))));
    }
}
