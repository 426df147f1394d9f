use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use regex::Regex;

use crate::models::LogEntry;

// Combined access log shape:
// 10.0.0.5 - - [01/Jun/1995:00:00:59 -0600] "GET / HTTP/1.1" 200 512 "-" "Mozilla/5.0"
// The trailing referrer and user-agent sections are optional.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^\s*(\S+)\s+\S+\s+\S+\s+\[([^\]]+)\]\s+"#,
        r#""([^"]*)"\s+(\S+)\s+(\S+)"#,
        r#"(?:\s+"([^"]*)"(?:\s+"([^"]*)")?)?\s*$"#,
    ))
    .expect("valid regex")
});

// Timestamp format for log entries: 01/Jun/1995:00:00:59 -0600
const TS_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[display("line does not match the access log grammar")]
    Grammar,
    #[display("status code {token:?} is not a base-10 status")]
    Status { token: String },
    #[display("byte count {token:?} is not a number")]
    Bytes { token: String },
    #[display("timestamp {token:?} does not match {}", TS_FORMAT)]
    Timestamp { token: String },
}

/// Parses one raw log line into a [`LogEntry`]. Pure function of its input;
/// a line that does not satisfy the grammar is an error, never a
/// zero-valued entry.
pub fn parse_line(line: &str) -> Result<LogEntry, ParseError> {
    let caps = LINE_RE.captures(line).ok_or(ParseError::Grammar)?;

    let ip = caps[1].to_string();
    let ts_token = &caps[2];
    let timestamp = DateTime::parse_from_str(ts_token, TS_FORMAT)
        .map_err(|_| ParseError::Timestamp {
            token: ts_token.to_string(),
        })?
        .with_timezone(&Utc);

    let mut request = caps[3].split_whitespace();
    let method = request.next().unwrap_or_default().to_string();
    let path = request.next().unwrap_or_default().to_string();

    let status_token = &caps[4];
    let status: u16 = status_token.parse().map_err(|_| ParseError::Status {
        token: status_token.to_string(),
    })?;

    let bytes_token = &caps[5];
    let bytes = if bytes_token == "-" {
        0
    } else {
        bytes_token.parse().map_err(|_| ParseError::Bytes {
            token: bytes_token.to_string(),
        })?
    };

    let referrer = caps.get(6).map_or("", |m| m.as_str()).to_string();
    let user_agent = caps.get(7).map_or("", |m| m.as_str()).to_string();

    Ok(LogEntry {
        ip,
        timestamp,
        method,
        path,
        status,
        bytes,
        referrer,
        user_agent,
    })
}
