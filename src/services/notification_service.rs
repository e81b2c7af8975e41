use channels::{Channel, ChannelClient};

use crate::config::Config;
use crate::errors::RelayResult;

#[cfg_attr(test, mockall::automock)]
pub trait MessageSink: Send + Sync {
    /// Deliver one message to a channel. Fire-and-forget beyond the
    /// success/failure of this send.
    fn send(&self, channel_id: i64, text: &str) -> RelayResult<()>;
}

pub struct NotificationService {
    client: ChannelClient,
}

impl NotificationService {
    pub fn new(config: &Config) -> RelayResult<Self> {
        let client = ChannelClient::new(&config.chat_url, &config.chat_token)?;

        Ok(Self { client })
    }

    /// List the channels the chat service exposes, for destination selection.
    pub fn list_channels(&self) -> RelayResult<Vec<Channel>> {
        Ok(self.client.list_channels()?)
    }
}

impl MessageSink for NotificationService {
    fn send(&self, channel_id: i64, text: &str) -> RelayResult<()> {
        self.client.send_message(channel_id, text)?;
        Ok(())
    }
}

/// Prints would-be deliveries instead of sending them.
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    fn send(&self, channel_id: i64, text: &str) -> RelayResult<()> {
        println!("[DRY RUN] -> channel {}", channel_id);
        println!("{}", text);
        println!();
        Ok(())
    }
}
