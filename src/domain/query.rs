use url::form_urlencoded;

/// Hashtag search over the feed host's search-RSS endpoint.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keywords: Vec<String>,
    pub verified_only: bool,
    pub exclude_replies: bool,
    pub exclude_retweets: bool,
}

impl SearchQuery {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            verified_only: true,
            exclude_replies: true,
            exclude_retweets: true,
        }
    }

    /// OR-query of `#`-prefixed keywords, e.g. "#cybersecurity OR #zeroday".
    fn terms(&self) -> String {
        self.keywords
            .iter()
            .map(|keyword| format!("#{}", keyword))
            .collect::<Vec<_>>()
            .join(" OR ")
    }

    /// Build the search feed URL on the given base, percent-encoding the query.
    pub fn feed_url(&self, base_url: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(self.terms().as_bytes()).collect();

        let mut url = format!(
            "{}/search/rss?f=tweets&q={}",
            base_url.trim_end_matches('/'),
            encoded
        );

        if self.verified_only {
            url.push_str("&f-verified=on");
        }
        if self.exclude_replies {
            url.push_str("&e-replies=on");
        }
        if self.exclude_retweets {
            url.push_str("&e-nativeretweets=on");
        }

        url
    }
}
