pub mod notification;
pub mod post;
pub mod query;

pub use notification::Notification;
pub use post::{parse_pub_date, Post, PUB_DATE_FORMAT};
pub use query::SearchQuery;
