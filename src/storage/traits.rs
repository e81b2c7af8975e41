use crate::errors::RelayResult;

/// Load/save contract for the persisted relay settings. The destination is
/// the id of the chat channel receiving delivered posts.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    fn destination(&self) -> RelayResult<Option<i64>>;
    fn set_destination(&self, channel_id: i64) -> RelayResult<()>;
}
