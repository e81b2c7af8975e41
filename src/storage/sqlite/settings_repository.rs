use crate::errors::{RelayError, RelayResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::SettingsRepository;

const DESTINATION_KEY: &str = "destination_channel";

pub struct SqliteSettingsRepository {
    storage: SqliteStorage,
}

impl SqliteSettingsRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl SettingsRepository for SqliteSettingsRepository {
    fn destination(&self) -> RelayResult<Option<i64>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;

        let value = stmt.query_row([DESTINATION_KEY], |row| row.get::<_, String>(0));

        match value {
            Ok(raw) => raw.parse::<i64>().map(Some).map_err(|_| {
                RelayError::Config(format!("stored destination is not a channel id: {}", raw))
            }),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(RelayError::from(e)),
        }
    }

    fn set_destination(&self, channel_id: i64) -> RelayResult<()> {
        let conn = self.storage.connection()?;

        // Setting a new destination replaces the previous one.
        conn.execute(
            "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (DESTINATION_KEY, channel_id.to_string()),
        )?;

        Ok(())
    }
}
