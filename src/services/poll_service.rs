use crate::domain::{parse_pub_date, Notification, Post};
use crate::errors::{RelayError, RelayResult};
use crate::feed::FeedReader;
use crate::services::notification_service::MessageSink;
use crate::storage::traits::SettingsRepository;

/// Fetch-filter-deliver driver. Owns the freshness watermark: the `pubDate`
/// of the most recently delivered post, held in memory for the lifetime of
/// this instance and reset on restart.
pub struct PollService<R: FeedReader, S: MessageSink, T: SettingsRepository> {
    reader: R,
    sink: S,
    settings: T,
    feed_url: String,
    last_delivered: Option<String>,
}

impl<R: FeedReader, S: MessageSink, T: SettingsRepository> PollService<R, S, T> {
    pub fn new(reader: R, sink: S, settings: T, feed_url: String) -> Self {
        Self {
            reader,
            sink,
            settings,
            feed_url,
            last_delivered: None,
        }
    }

    pub fn watermark(&self) -> Option<&str> {
        self.last_delivered.as_deref()
    }

    /// One poll pass. Returns the number of posts delivered.
    ///
    /// The destination is re-read from settings on every pass, so configuring
    /// it after the loop has started takes effect on the next pass. A failed
    /// fetch or a failed send aborts the pass; the watermark stays at the
    /// last post whose delivery was confirmed, so anything not yet delivered
    /// is picked up again on the next pass.
    pub fn tick(&mut self) -> RelayResult<usize> {
        let destination = self
            .settings
            .destination()?
            .ok_or(RelayError::MissingDestination)?;

        let posts = self.reader.fetch(&self.feed_url)?;

        // The feed lists newest first; deliver oldest first.
        let mut delivered = 0;
        for post in posts.iter().rev() {
            match self.is_newer(post) {
                Ok(false) => {
                    // Keep scanning: document order is not guaranteed
                    // monotonic, a later post may still be new.
                }
                Ok(true) => {
                    let message = Notification::from_post(post).format();
                    self.sink.send(destination, &message)?;
                    self.last_delivered = Some(post.published_at.clone());
                    delivered += 1;
                }
                Err(RelayError::Timestamp(raw)) => {
                    eprintln!("Skipping post with unparseable pubDate: {}", raw);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(delivered)
    }

    fn is_newer(&self, post: &Post) -> RelayResult<bool> {
        let published = post.published()?;

        match &self.last_delivered {
            None => Ok(true),
            Some(watermark) => Ok(published > parse_pub_date(watermark)?),
        }
    }
}
