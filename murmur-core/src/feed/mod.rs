//! The message feed
//!
//! An append-only JSONL file: one [`Message`] per line, oldest first.
//! Writers only ever append, so readers never need a lock.

mod format;
mod store;
mod types;

pub use format::format_message;
pub use store::{FeedStore, MAX_MESSAGE_LEN};
pub use types::{FeedFilter, Message};
