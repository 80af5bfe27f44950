use rand::Rng;

use super::source::DataSource;

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub id: u32,
    /// RFC 3339, UTC.
    pub timestamp: &'static str,
    pub method: &'static str,
    pub endpoint: &'static str,
    pub status: u16,
    pub latency_ms: u32,
    pub ip: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFilter {
    #[default]
    All,
    Success,
    Error,
}

impl LogFilter {
    pub const ALL: [LogFilter; 3] = [LogFilter::All, LogFilter::Success, LogFilter::Error];

    pub fn matches(&self, status: u16) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Success => (200..300).contains(&status),
            LogFilter::Error => status >= 400,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogFilter::All => "All",
            LogFilter::Success => "Success",
            LogFilter::Error => "Error",
        }
    }
}

pub fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "status-2xx",
        300..=399 => "status-3xx",
        400..=499 => "status-4xx",
        _ => "status-5xx",
    }
}

pub fn latency_class(latency_ms: u32) -> &'static str {
    match latency_ms {
        0..=99 => "latency-fast",
        100..=299 => "latency-ok",
        _ => "latency-slow",
    }
}

pub fn method_class(method: &str) -> &'static str {
    match method {
        "GET" => "method-get",
        "POST" => "method-post",
        _ => "method-other",
    }
}

/// `HH:MM:SS` part of an RFC 3339 timestamp, shown in the user's local zone.
pub fn format_timestamp(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|ts| ts.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogSummary {
    /// Share of requests below 400, rounded percent.
    pub success_rate: u32,
    pub avg_latency_ms: u32,
    pub errors: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogSource {
    entries: Vec<LogEntry>,
}

impl Default for LogSource {
    fn default() -> Self {
        let seed = [
            ("2024-01-15T14:32:15Z", "GET", "/v1/whales", 200, 124, "192.168.1.1"),
            ("2024-01-15T14:31:42Z", "GET", "/v1/whales/whl_abc123", 200, 89, "192.168.1.1"),
            ("2024-01-15T14:30:55Z", "POST", "/v1/alerts", 201, 234, "192.168.1.1"),
            ("2024-01-15T14:28:12Z", "GET", "/v1/sightings", 200, 156, "10.0.0.5"),
            ("2024-01-15T14:25:33Z", "GET", "/v1/whales", 429, 12, "192.168.1.1"),
            ("2024-01-15T14:22:18Z", "GET", "/v1/regions", 200, 98, "10.0.0.5"),
            ("2024-01-15T14:20:45Z", "GET", "/v1/whales/invalid", 404, 45, "192.168.1.1"),
            ("2024-01-15T14:18:30Z", "POST", "/v1/alerts", 400, 67, "10.0.0.5"),
            ("2024-01-15T14:15:22Z", "GET", "/v1/species", 200, 112, "192.168.1.1"),
            ("2024-01-15T14:12:11Z", "GET", "/v1/whales", 200, 134, "10.0.0.5"),
            ("2024-01-15T14:10:05Z", "GET", "/v1/sightings", 500, 2345, "192.168.1.1"),
            ("2024-01-15T14:08:33Z", "GET", "/v1/whales", 200, 118, "192.168.1.1"),
        ];
        Self {
            entries: seed
                .into_iter()
                .enumerate()
                .map(|(i, (timestamp, method, endpoint, status, latency_ms, ip))| LogEntry {
                    id: i as u32 + 1,
                    timestamp,
                    method,
                    endpoint,
                    status,
                    latency_ms,
                    ip,
                })
                .collect(),
        }
    }
}

impl LogSource {
    pub fn filtered(&self, filter: LogFilter) -> Vec<LogEntry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e.status))
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> LogSummary {
        let total = self.entries.len();
        if total == 0 {
            return LogSummary {
                success_rate: 0,
                avg_latency_ms: 0,
                errors: 0,
            };
        }
        let ok = self.entries.iter().filter(|e| e.status < 400).count();
        let latency: u64 = self.entries.iter().map(|e| e.latency_ms as u64).sum();
        LogSummary {
            success_rate: (ok as f64 / total as f64 * 100.0).round() as u32,
            avg_latency_ms: (latency as f64 / total as f64).round() as u32,
            errors: total - ok,
        }
    }
}

impl DataSource for LogSource {
    type Item = LogEntry;

    fn list(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Jitters each latency by up to 20% either way.
    fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for entry in &mut self.entries {
            let factor = rng.gen_range(0.8..=1.2);
            entry.latency_ms = ((entry.latency_ms as f64 * factor).round() as u32).max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn filter_success_keeps_2xx_only() {
        let logs = LogSource::default();
        let ok = logs.filtered(LogFilter::Success);
        assert_eq!(ok.len(), 8);
        assert!(ok.iter().all(|e| (200..300).contains(&e.status)));
    }

    #[test]
    fn filter_error_keeps_4xx_and_5xx() {
        let logs = LogSource::default();
        let errors = logs.filtered(LogFilter::Error);
        let statuses: Vec<u16> = errors.iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec![429, 404, 400, 500]);
        assert_eq!(logs.filtered(LogFilter::All).len(), 12);
    }

    #[test]
    fn summary_matches_seed() {
        let summary = LogSource::default().summary();
        assert_eq!(summary.success_rate, 67);
        assert_eq!(summary.errors, 4);
        // (124+89+234+156+12+98+45+67+112+134+2345+118) / 12 = 294.5
        assert_eq!(summary.avg_latency_ms, 295);
    }

    #[test]
    fn classes_follow_bands() {
        assert_eq!(status_class(201), "status-2xx");
        assert_eq!(status_class(302), "status-3xx");
        assert_eq!(status_class(429), "status-4xx");
        assert_eq!(status_class(500), "status-5xx");
        assert_eq!(latency_class(99), "latency-fast");
        assert_eq!(latency_class(100), "latency-ok");
        assert_eq!(latency_class(300), "latency-slow");
        assert_eq!(method_class("POST"), "method-post");
    }

    #[test]
    fn refresh_stays_within_jitter() {
        let mut logs = LogSource::default();
        let before = logs.clone();
        logs.refresh(&mut StdRng::seed_from_u64(3));
        for (old, new) in before.list().iter().zip(logs.list()) {
            assert_eq!(old.status, new.status);
            let low = (old.latency_ms as f64 * 0.8).floor() as u32;
            let high = (old.latency_ms as f64 * 1.2).ceil() as u32;
            assert!(new.latency_ms >= low.max(1) && new.latency_ms <= high);
        }
    }

    #[test]
    fn unparsable_timestamp_is_shown_raw() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
