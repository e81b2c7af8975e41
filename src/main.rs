use std::thread;
use std::time::Duration;

use clap::Parser;

use relay::cli::{Cli, Commands};
use relay::config::Config;
use relay::domain::SearchQuery;
use relay::errors::{RelayError, RelayResult};
use relay::feed::RssFeedReader;
use relay::services::{ConsoleSink, MessageSink, NotificationService, PollService};
use relay::storage::sqlite::{SqliteSettingsRepository, SqliteStorage};
use relay::storage::SettingsRepository;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> RelayResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize storage
    let storage = SqliteStorage::new(&config.db_path)?;
    let settings = SqliteSettingsRepository::new(storage);

    match cli.command {
        Commands::Channels => cmd_channels(&config),
        Commands::SetChannel { id } => cmd_set_channel(&config, settings, id),
        Commands::Status => cmd_status(&config, settings),
        Commands::Once { dry_run } => cmd_once(&config, settings, dry_run),
        Commands::Watch => cmd_watch(&config, settings),
    }
}

fn feed_url(config: &Config) -> String {
    SearchQuery::new(config.keywords.clone()).feed_url(&config.feed_base_url)
}

fn cmd_channels(config: &Config) -> RelayResult<()> {
    let service = NotificationService::new(config)?;
    let channels = service.list_channels()?;

    if channels.is_empty() {
        println!("No channels available.");
        return Ok(());
    }

    println!("Available channels:\n");
    for channel in channels {
        println!("  {}  {}", channel.id, channel.name);
    }
    println!();
    println!("Pick one with `relay set-channel <id>`.");

    Ok(())
}

fn cmd_set_channel(
    config: &Config,
    settings: SqliteSettingsRepository,
    id: i64,
) -> RelayResult<()> {
    settings.set_destination(id)?;
    println!("Destination channel set to {}.", id);

    // Confirmation goes into the channel itself; the setting sticks even if
    // the chat service is unreachable right now.
    let confirmation = NotificationService::new(config)
        .and_then(|service| service.send(id, "Channel configured for feed notifications."));

    match confirmation {
        Ok(()) => println!("Confirmation message sent."),
        Err(e) => eprintln!("Could not send confirmation message: {}", e),
    }

    Ok(())
}

fn cmd_status(config: &Config, settings: SqliteSettingsRepository) -> RelayResult<()> {
    match settings.destination()? {
        Some(id) => println!("Destination channel: {}", id),
        None => println!("Destination channel: not configured"),
    }

    println!("Feed URL: {}", feed_url(config));
    println!("Poll interval: {} seconds", config.poll_interval_secs);

    Ok(())
}

fn cmd_once(config: &Config, settings: SqliteSettingsRepository, dry_run: bool) -> RelayResult<()> {
    let reader = RssFeedReader::new(&config.user_agent);
    let url = feed_url(config);

    let delivered = if dry_run {
        PollService::new(reader, ConsoleSink, settings, url).tick()?
    } else {
        let sink = NotificationService::new(config)?;
        PollService::new(reader, sink, settings, url).tick()?
    };

    if delivered == 0 {
        println!("No new posts.");
    } else {
        println!("Delivered {} posts.", delivered);
    }

    Ok(())
}

fn cmd_watch(config: &Config, settings: SqliteSettingsRepository) -> RelayResult<()> {
    let reader = RssFeedReader::new(&config.user_agent);
    let sink = NotificationService::new(config)?;
    let url = feed_url(config);
    let interval = Duration::from_secs(config.poll_interval_secs);

    println!("Watching {}", url);
    println!("Poll interval: {} seconds", config.poll_interval_secs);

    let mut service = PollService::new(reader, sink, settings, url);

    // First pass immediately, then one pass per interval. A failed pass is
    // logged and the next scheduled pass is the retry.
    loop {
        match service.tick() {
            Ok(0) => println!("No new posts."),
            Ok(delivered) => println!("Delivered {} posts.", delivered),
            Err(RelayError::MissingDestination) => {
                eprintln!("No destination channel configured. Run `relay set-channel <id>` first.");
            }
            Err(e) => eprintln!("Poll failed: {}", e),
        }

        thread::sleep(interval);
    }
}
