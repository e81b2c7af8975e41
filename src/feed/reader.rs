use reqwest::blocking::Client;
use rss::Channel;

use crate::domain::Post;
use crate::errors::{RelayError, RelayResult};

#[cfg_attr(test, mockall::automock)]
pub trait FeedReader: Send + Sync {
    /// Fetch the feed document and parse it into posts, in document order.
    fn fetch(&self, url: &str) -> RelayResult<Vec<Post>>;
}

pub struct RssFeedReader {
    client: Client,
}

impl RssFeedReader {
    /// The User-Agent override defeats naive bot blocking on the feed host.
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Parse feed bytes into posts. Document order is preserved; the feed
    /// host does not guarantee chronological order either way.
    pub fn parse(bytes: &[u8]) -> RelayResult<Vec<Post>> {
        let channel =
            Channel::read_from(bytes).map_err(|e| RelayError::FeedParse(e.to_string()))?;

        channel.items().iter().map(Self::item_to_post).collect()
    }

    fn item_to_post(item: &rss::Item) -> RelayResult<Post> {
        let title = item.title().ok_or_else(|| missing_field("title"))?;
        let author = item
            .dublin_core_ext()
            .and_then(|dc| dc.creators().first())
            .ok_or_else(|| missing_field("dc:creator"))?;
        let description = item
            .description()
            .ok_or_else(|| missing_field("description"))?;
        let published_at = item.pub_date().ok_or_else(|| missing_field("pubDate"))?;

        Ok(Post::new(
            title.to_string(),
            author.to_string(),
            description.to_string(),
            published_at.to_string(),
        ))
    }
}

fn missing_field(field: &str) -> RelayError {
    RelayError::FeedParse(format!("item is missing <{}>", field))
}

impl FeedReader for RssFeedReader {
    fn fetch(&self, url: &str) -> RelayResult<Vec<Post>> {
        let response = self.client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;

        Self::parse(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Search-RSS sample in the shape the feed host produces: items newest
    // first, authors in the Dublin Core creator element.
    const SAMPLE_FEED: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Search results</title>
    <link>https://nitter.net/search</link>
    <description>#cybersecurity OR #zeroday</description>
    <item>
      <title>New zeroday dropped #zeroday</title>
      <dc:creator>@second</dc:creator>
      <description>Details in thread</description>
      <pubDate>Sun, 14 May 2023 13:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Patch your routers #cybersecurity</title>
      <dc:creator>@first</dc:creator>
      <description>CVE writeup</description>
      <pubDate>Sun, 14 May 2023 12:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    const EMPTY_FEED: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Search results</title>
    <link>https://nitter.net/search</link>
    <description>no matches</description>
  </channel>
</rss>"#;

    const MISSING_CREATOR_FEED: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Search results</title>
    <link>https://nitter.net/search</link>
    <description>bad item</description>
    <item>
      <title>Anonymous post</title>
      <description>no author element</description>
      <pubDate>Sun, 14 May 2023 12:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_preserves_document_order() {
        let posts = RssFeedReader::parse(SAMPLE_FEED).unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "New zeroday dropped #zeroday");
        assert_eq!(posts[0].author, "@second");
        assert_eq!(posts[0].description, "Details in thread");
        assert_eq!(posts[0].published_at, "Sun, 14 May 2023 13:00:00 GMT");
        assert_eq!(posts[1].author, "@first");
    }

    #[test]
    fn test_parse_empty_feed_is_not_an_error() {
        let posts = RssFeedReader::parse(EMPTY_FEED).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_parse_malformed_xml() {
        let result = RssFeedReader::parse(b"<html>not a feed");
        assert!(matches!(result, Err(RelayError::FeedParse(_))));
    }

    #[test]
    fn test_parse_item_missing_creator() {
        let result = RssFeedReader::parse(MISSING_CREATOR_FEED);

        match result {
            Err(RelayError::FeedParse(msg)) => assert!(msg.contains("dc:creator")),
            other => panic!("expected FeedParse error, got {:?}", other),
        }
    }
}
