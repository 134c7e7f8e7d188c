//! Deterministic agent names
//!
//! Every agent gets a stable `adjective-animal` name derived from a seed, so
//! the same session always posts under the same name without storing
//! anything.

use sha2::{Digest, Sha256};

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "brave", "bright", "calm", "clever", "cosmic", "crisp", "curious", "dapper",
    "eager", "fierce", "gentle", "glad", "golden", "happy", "humble", "jolly", "keen", "lively",
    "lucky", "mellow", "merry", "nimble", "noble", "patient", "plucky", "proud", "quick", "quiet",
    "rapid", "rustic", "sharp", "shy", "silent", "silver", "sleepy", "snappy", "steady", "sunny",
    "swift", "tidy", "vivid", "wise", "witty", "zesty",
];

const ANIMALS: &[&str] = &[
    "badger", "beaver", "bison", "crane", "dingo", "dolphin", "eagle", "falcon", "ferret", "finch",
    "gecko", "heron", "ibis", "jackal", "koala", "lemur", "lynx", "marmot", "marten", "moose",
    "newt", "ocelot", "otter", "owl", "panda", "pelican", "puffin", "quokka", "raven", "robin",
    "salmon", "seal", "sparrow", "stoat", "swan", "tapir", "tern", "toucan", "vole", "walrus",
    "weasel", "wombat", "wren", "yak", "zebra",
];

/// Stable `adjective-animal` name for `seed`
pub fn name_for(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    let adjective = ADJECTIVES[usize::from(digest[0]) % ADJECTIVES.len()];
    let animal = ANIMALS[usize::from(digest[1]) % ANIMALS.len()];
    format!("{adjective}-{animal}")
}

/// Seed for the current agent: `MURMUR_SESSION_ID`, then `CLAUDE_SESSION_ID`,
/// then the working directory.
pub fn default_seed() -> String {
    ["MURMUR_SESSION_ID", "CLAUDE_SESSION_ID"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .or_else(|| {
            std::env::current_dir()
                .ok()
                .map(|dir| dir.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "murmur".to_string())
}
