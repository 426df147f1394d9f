use chrono::{DateTime, Utc};

/// One parsed access-log record. Only constructed by the parser, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub ip: String,
    pub timestamp: DateTime<Utc>,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub bytes: u64,
    pub referrer: String,
    pub user_agent: String,
}
