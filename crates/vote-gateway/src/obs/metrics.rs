//! In-process metrics registry for the vote front-end.
//!
//! Counter/summary/histogram types with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors to keep deterministic ordering.
//! Durations are accumulated in whole microseconds to keep the hot path on
//! integer atomics; seconds are only computed at render time.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_str(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn with_braces(labels: &str) -> String {
    if labels.is_empty() {
        String::new()
    } else {
        format!("{{{labels}}}")
    }
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{}{} {}", name, with_braces(&label_str(r.key())), val);
        }
    }
}

/// Unlabelled count + sum, rendered in seconds.
#[derive(Default)]
pub struct Summary {
    count: AtomicU64,
    sum_micros: AtomicU64,
}

impl Summary {
    pub fn observe(&self, duration: Duration) {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        let sum = self.sum_micros.load(Ordering::Relaxed) as f64 / 1_000_000.0;
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} summary");
        let _ = writeln!(out, "{name}_count {}", self.count());
        let _ = writeln!(out, "{name}_sum {sum}");
    }
}

// Fixed buckets in microseconds:
// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s, 5s
const BUCKETS_MICROS: [u64; 10] = [
    100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000, 5_000_000,
];

#[derive(Default)]
struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; BUCKETS_MICROS.len()],
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration and increment cumulative buckets (microsecond scale).
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(AtomicHistogram::default);
        let micros = duration.as_micros() as u64;

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(micros, Ordering::Relaxed);

        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Render in Prometheus text exposition format (unit: microseconds).
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {name} {help}");
        let _ = writeln!(out, "# TYPE {name} histogram");
        for r in self.map.iter() {
            let hist = r.value();
            let labels = label_str(r.key());
            let prefix = if labels.is_empty() {
                String::new()
            } else {
                format!("{labels},")
            };

            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let count = hist.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"{le}\"}} {count}");
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"+Inf\"}} {count}");

            let sum = hist.sum.load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_sum{} {}", name, with_braces(&labels), sum);
            let _ = writeln!(out, "{}_count{} {}", name, with_braces(&labels), count);
        }
    }
}

/// Registry owned by `AppState` and injected into handlers.
#[derive(Default)]
pub struct VoteMetrics {
    pub votes: CounterVec,
    pub request_time: Summary,
    pub request_duration: HistogramVec, // In Microseconds
    pub queue_errors: CounterVec,
    pub bad_requests: CounterVec,
    draining: AtomicBool,
}

impl VoteMetrics {
    /// Count one accepted vote for `label`.
    pub fn record_vote(&self, label: &str) {
        self.votes.inc(&[("vote", label)]);
    }

    pub fn vote_count(&self, label: &str) -> u64 {
        self.votes.get(&[("vote", label)])
    }

    /// Record one `/` request's processing time.
    pub fn observe_request(&self, method: &str, duration: Duration) {
        self.request_time.observe(duration);
        self.request_duration.observe(&[("method", method)], duration);
    }

    /// Mark draining state.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }
    /// Return whether draining is active.
    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.votes
            .render("vote_total", "Total number of votes", &mut out);
        self.request_time.render(
            "vote_request_processing_seconds",
            "Time spent processing vote requests",
            &mut out,
        );
        self.request_duration.render(
            "vote_request_duration_micros",
            "Vote request latency in microseconds",
            &mut out,
        );
        self.queue_errors.render(
            "vote_queue_errors_total",
            "Votes rejected because the queue was unavailable",
            &mut out,
        );
        self.bad_requests.render(
            "vote_bad_requests_total",
            "Requests rejected as malformed",
            &mut out,
        );

        let _ = writeln!(
            out,
            "# TYPE vote_draining gauge\nvote_draining {}",
            if self.is_draining() { 1 } else { 0 }
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_are_sorted_and_escaped() {
        let c = CounterVec::default();
        c.inc(&[("vote", "Cats \"the best\"")]);
        c.add(&[("vote", "Cats \"the best\"")], 2);

        let mut out = String::new();
        c.render("t_total", "test", &mut out);
        assert!(out.contains("t_total{vote=\"Cats \\\"the best\\\"\"} 3"));
        assert_eq!(c.get(&[("vote", "Cats \"the best\"")]), 3);
        assert_eq!(c.get(&[("vote", "Dogs")]), 0);
    }

    #[test]
    fn histogram_buckets_are_cumulative() {
        let h = HistogramVec::default();
        h.observe(&[("method", "GET")], Duration::from_micros(700));

        let mut out = String::new();
        h.render("t_micros", "test", &mut out);
        assert!(out.contains("t_micros_bucket{method=\"GET\",le=\"500\"} 0"));
        assert!(out.contains("t_micros_bucket{method=\"GET\",le=\"1000\"} 1"));
        assert!(out.contains("t_micros_bucket{method=\"GET\",le=\"+Inf\"} 1"));
        assert!(out.contains("t_micros_sum{method=\"GET\"} 700"));
    }

    #[test]
    fn summary_renders_seconds() {
        let m = VoteMetrics::default();
        m.observe_request("POST", Duration::from_millis(1500));
        let out = m.render();
        assert!(out.contains("vote_request_processing_seconds_count 1"));
        assert!(out.contains("vote_request_processing_seconds_sum 1.5"));
        assert!(out.contains("vote_draining 0"));
    }
}
