//! Feed record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One posted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub at: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped now
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            body: body.into(),
            at: Utc::now(),
        }
    }
}

/// Read filter; all set conditions must hold
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// Only messages strictly after this instant
    pub since: Option<DateTime<Utc>>,
    /// Only messages from this author
    pub author: Option<String>,
    /// Keep the most recent N matches
    pub limit: Option<usize>,
}

impl FeedFilter {
    pub fn matches(&self, message: &Message) -> bool {
        if self.since.is_some_and(|since| message.at <= since) {
            return false;
        }
        if self.author.as_ref().is_some_and(|a| &message.author != a) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_default_filter_matches_everything() {
        let message = Message::new("quiet-otter", "hello");
        assert!(FeedFilter::default().matches(&message));
    }

    #[test]
    fn test_since_is_exclusive() {
        let message = Message::new("quiet-otter", "hello");
        let filter = FeedFilter {
            since: Some(message.at),
            ..Default::default()
        };
        assert!(!filter.matches(&message));

        let filter = FeedFilter {
            since: Some(message.at - Duration::seconds(1)),
            ..Default::default()
        };
        assert!(filter.matches(&message));
    }

    #[test]
    fn test_author_filter() {
        let message = Message::new("quiet-otter", "hello");
        let filter = FeedFilter {
            author: Some("brave-heron".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&message));
    }

    #[test]
    fn test_message_json_shape() {
        let message = Message::new("quiet-otter", "hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["author"], "quiet-otter");
        assert_eq!(value["body"], "hello");
        assert!(value["at"].as_str().unwrap().ends_with('Z'));
    }
}
