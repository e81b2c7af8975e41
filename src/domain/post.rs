use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{RelayError, RelayResult};

/// Format of RSS `pubDate` values, e.g. "Sun, 14 May 2023 12:00:00 GMT".
/// The zone name is matched but not interpreted, so comparisons are done on
/// the wall-clock time exactly as the feed printed it.
pub const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// One syndicated item. All four fields are required; an item missing any of
/// them fails to parse instead of producing a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Raw `pubDate` text, kept unparsed. Freshness comparisons parse it
    /// on demand with [`PUB_DATE_FORMAT`].
    pub published_at: String,
}

impl Post {
    pub fn new(title: String, author: String, description: String, published_at: String) -> Self {
        Self {
            title,
            author,
            description,
            published_at,
        }
    }

    /// Parse the publication timestamp against the fixed feed format.
    pub fn published(&self) -> RelayResult<NaiveDateTime> {
        parse_pub_date(&self.published_at)
    }
}

pub fn parse_pub_date(raw: &str) -> RelayResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, PUB_DATE_FORMAT)
        .map_err(|_| RelayError::Timestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pub_date() {
        let parsed = parse_pub_date("Sun, 14 May 2023 12:30:45 GMT").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2023-05-14 12:30:45");
    }

    #[test]
    fn test_parse_pub_date_rejects_other_formats() {
        assert!(matches!(
            parse_pub_date("2023-05-14T12:30:45Z"),
            Err(RelayError::Timestamp(_))
        ));
        assert!(matches!(parse_pub_date(""), Err(RelayError::Timestamp(_))));
    }

    #[test]
    fn test_published_ordering() {
        let older = Post::new(
            "a".to_string(),
            "x".to_string(),
            "".to_string(),
            "Sun, 14 May 2023 12:00:00 GMT".to_string(),
        );
        let newer = Post::new(
            "b".to_string(),
            "y".to_string(),
            "".to_string(),
            "Sun, 14 May 2023 12:00:01 GMT".to_string(),
        );

        assert!(newer.published().unwrap() > older.published().unwrap());
    }
}
