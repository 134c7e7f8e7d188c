//! JSONL feed storage

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::{FeedFilter, Message};
use crate::error::FeedError;

/// Longest accepted message body, in characters
pub const MAX_MESSAGE_LEN: usize = 1000;

/// File-backed feed
#[derive(Debug, Clone)]
pub struct FeedStore {
    path: PathBuf,
}

impl FeedStore {
    /// Create a feed store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the feed file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self) -> impl FnOnce(std::io::Error) -> FeedError + '_ {
        move |source| FeedError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Append a message
    pub fn post(&self, author: &str, body: &str) -> Result<Message, FeedError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(FeedError::EmptyMessage);
        }
        let len = body.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(FeedError::MessageTooLong {
                len,
                max: MAX_MESSAGE_LEN,
            });
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(self.io_error())?;
        }

        let message = Message::new(author, body);
        let mut line = serde_json::to_string(&message)?;
        line.push('\n');

        // One write call per record keeps concurrent appends from interleaving
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(self.io_error())?;
        file.write_all(line.as_bytes()).map_err(self.io_error())?;
        file.flush().map_err(self.io_error())?;

        debug!("Posted message {} as {}", message.id, message.author);
        Ok(message)
    }

    /// Read matching messages, oldest first
    pub fn read(&self, filter: &FeedFilter) -> Result<Vec<Message>, FeedError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error()(e)),
        };

        let mut results = VecDeque::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(self.io_error())?;
            let Some(message) = Self::parse_line(&line) else {
                continue;
            };
            if !filter.matches(&message) {
                continue;
            }
            results.push_back(message);
            if filter.limit.is_some_and(|limit| results.len() > limit) {
                results.pop_front();
            }
        }

        Ok(results.into())
    }

    /// Parse a single line, skipping blanks and damaged records
    fn parse_line(line: &str) -> Option<Message> {
        if line.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(line) {
            Ok(message) => Some(message),
            Err(e) => {
                debug!("Skipping unreadable feed line: {}", e);
                None
            }
        }
    }
}
