use std::{cmp::Reverse, collections::HashMap};

use crate::models::LogEntry;

/// Read-only aggregate queries over a fixed sequence of parsed entries.
/// Every query recomputes from the borrowed slice, so repeated calls in any
/// order return equal results.
#[derive(Debug)]
pub struct Analyzer<'a> {
    entries: &'a [LogEntry],
}

impl<'a> Analyzer<'a> {
    pub fn new(entries: &'a [LogEntry]) -> Self {
        Self { entries }
    }

    /// The `n` client addresses with the most requests, as `(ip, count)`
    /// pairs in descending count order. Addresses with equal counts keep
    /// their first-seen order from the input sequence. Asking for more
    /// addresses than exist returns all of them.
    pub fn top_ips(&self, n: usize) -> Vec<(String, u64)> {
        let mut counts: HashMap<&str, (usize, u64)> = HashMap::new();
        for (seen, entry) in self.entries.iter().enumerate() {
            counts.entry(entry.ip.as_str()).or_insert((seen, 0)).1 += 1;
        }
        let mut ranked: Vec<_> = counts.into_iter().collect();
        ranked.sort_unstable_by_key(|&(_, (first_seen, count))| (Reverse(count), first_seen));
        ranked.truncate(n);
        ranked
            .into_iter()
            .map(|(ip, (_, count))| (ip.to_string(), count))
            .collect()
    }

    /// Request count per response status code. No ordering imposed.
    pub fn status_counts(&self) -> HashMap<u16, u64> {
        let mut counts = HashMap::new();
        for entry in self.entries {
            *counts.entry(entry.status).or_default() += 1;
        }
        counts
    }

    /// Number of entries whose user-agent contains `needle` as a
    /// case-sensitive substring. An empty needle matches every entry.
    pub fn user_agent_hits(&self, needle: &str) -> u64 {
        self.entries
            .iter()
            .filter(|entry| entry.user_agent.contains(needle))
            .count() as u64
    }
}
