use super::Post;

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub author: String,
    pub published_at: String,
}

impl Notification {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            published_at: post.published_at.clone(),
        }
    }

    /// Format: "{title}\n\nBy {author}\n{publishedAt}"
    pub fn format(&self) -> String {
        format!("{}\n\nBy {}\n{}", self.title, self.author, self.published_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_format() {
        let notification = Notification {
            title: "Critical RCE in libexample".to_string(),
            author: "@researcher".to_string(),
            published_at: "Sun, 14 May 2023 12:00:00 GMT".to_string(),
        };

        assert_eq!(
            notification.format(),
            "Critical RCE in libexample\n\nBy @researcher\nSun, 14 May 2023 12:00:00 GMT"
        );
    }

    #[test]
    fn test_notification_from_post() {
        let post = Post::new(
            "Title".to_string(),
            "@author".to_string(),
            "Body text".to_string(),
            "Sun, 14 May 2023 12:00:00 GMT".to_string(),
        );

        let notification = Notification::from_post(&post);

        assert_eq!(notification.title, "Title");
        assert_eq!(notification.author, "@author");
        assert_eq!(notification.published_at, "Sun, 14 May 2023 12:00:00 GMT");
    }
}
