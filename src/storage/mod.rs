pub mod sqlite;
pub mod traits;

pub use sqlite::{SqliteSettingsRepository, SqliteStorage};
pub use traits::SettingsRepository;
