pub mod reader;

pub use reader::{FeedReader, RssFeedReader};
