use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// The rendered batch report. Field order here is the order the JSON keys
/// appear in.
#[derive(Debug, Serialize)]
pub struct Report {
    pub top_ips: Vec<TopIp>,
    pub status_codes: BTreeMap<u16, u64>,
    pub user_agent: UserAgentHits,
    pub lines: LineCounters,
}

/// One row of the ranking. Kept as an array of objects so the analyzer's
/// descending-count order survives serialization.
#[derive(Debug, Serialize)]
pub struct TopIp {
    pub ip: String,
    pub requests: u64,
}

#[derive(Debug, Serialize)]
pub struct UserAgentHits {
    pub filter: String,
    pub matches: u64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LineCounters {
    pub total: usize,
    pub parsed: usize,
    pub skipped: usize,
}

impl Report {
    pub fn new(
        top_ips: Vec<(String, u64)>,
        status_codes: HashMap<u16, u64>,
        filter: &str,
        matches: u64,
        lines: LineCounters,
    ) -> Self {
        Self {
            top_ips: top_ips
                .into_iter()
                .map(|(ip, requests)| TopIp { ip, requests })
                .collect(),
            // Status codes sort ascending for display only.
            status_codes: status_codes.into_iter().collect(),
            user_agent: UserAgentHits {
                filter: filter.to_string(),
                matches,
            },
            lines,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
