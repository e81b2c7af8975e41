mod connection;
mod settings_repository;

pub use connection::SqliteStorage;
pub use settings_repository::SqliteSettingsRepository;
