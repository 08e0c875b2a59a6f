//! Metrics collection and reporting for sequence evaluation.
//!
//! A [`MetricsCollector`] is a cheap, cloneable handle to shared counters.
//! Attach it to a chain with [`Sequence::metered`] to count the elements that
//! pass a point and whether that point was ever exhausted; register custom
//! [`Metric`]s for anything else. Results can be printed, snapshotted, or
//! saved as JSON.
//!
//! # Example
//!
//! ```
//! use ironseq::*;
//! use ironseq::metrics::MetricsCollector;
//!
//! let metrics = MetricsCollector::new();
//! let evens = from_iter(1..=10)
//!     .metered("source", &metrics)
//!     .filter(|x| x % 2 == 0)
//!     .metered("evens", &metrics)
//!     .take(2)
//!     .to_vec();
//!
//! assert_eq!(evens, vec![2, 4]);
//! assert_eq!(metrics.counter("source.elements"), 4);
//! assert_eq!(metrics.counter("evens.elements"), 2);
//! // `take` stopped pulling before the source ran out
//! assert_eq!(metrics.counter("source.exhausted"), 0);
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::sequence::{Pull, Sequence, Step};

/// Trait for custom metrics.
///
/// Implement this to report values the built-in counters do not cover.
pub trait Metric: Send + Sync {
    /// The name of this metric (e.g., `window_fill`, `cache_hits`).
    fn name(&self) -> &str;

    /// The current value of this metric as a JSON value.
    fn value(&self) -> Value;

    /// Optional description of what this metric measures.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// Thread-safe container for evaluation metrics.
#[derive(Clone)]
pub struct MetricsCollector {
    inner: Arc<Mutex<MetricsCollectorInner>>,
}

#[derive(Default)]
struct MetricsCollectorInner {
    counters: BTreeMap<String, u64>,
    metrics: HashMap<String, Box<dyn Metric>>,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
}

/// Point-in-time copy of everything a collector holds.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub counters: BTreeMap<String, u64>,
    pub custom: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u128>,
}

impl MetricsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MetricsCollectorInner::default())),
        }
    }

    // a panic while holding the lock leaves plain counters behind, still usable
    fn lock(&self) -> MutexGuard<'_, MetricsCollectorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a custom metric, replacing any metric with the same name.
    pub fn register(&self, metric: Box<dyn Metric>) {
        self.lock().metrics.insert(metric.name().to_string(), metric);
    }

    /// Register multiple metrics at once.
    pub fn register_all(&self, metrics: Vec<Box<dyn Metric>>) {
        for metric in metrics {
            self.register(metric);
        }
    }

    pub fn record_start(&self) {
        self.lock().start_time = Some(Instant::now());
    }

    pub fn record_end(&self) {
        self.lock().end_time = Some(Instant::now());
    }

    /// Time between [`record_start`](Self::record_start) and
    /// [`record_end`](Self::record_end), if both happened.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        let inner = self.lock();
        match (inner.start_time, inner.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }

    /// Add `value` to the named counter, creating it at zero first.
    pub fn increment_counter(&self, name: &str, value: u64) {
        let mut inner = self.lock();
        match inner.counters.get_mut(name) {
            Some(count) => *count += value,
            None => {
                inner.counters.insert(name.to_string(), value);
            }
        }
    }

    pub fn set_counter(&self, name: &str, value: u64) {
        self.lock().counters.insert(name.to_string(), value);
    }

    /// Current value of a counter; `0` if it was never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.lock().counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let inner = self.lock();
        MetricsSnapshot {
            counters: inner.counters.clone(),
            custom: inner
                .metrics
                .iter()
                .map(|(name, metric)| (name.clone(), metric.value()))
                .collect(),
            elapsed_ms: match (inner.start_time, inner.end_time) {
                (Some(start), Some(end)) => Some(end.duration_since(start).as_millis()),
                _ => None,
            },
        }
    }

    /// All metrics as one JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self.snapshot()).unwrap_or_else(|e| json!({ "error": e.to_string() }))
    }

    /// Print all metrics to stdout in a human-readable format.
    pub fn print(&self) {
        let snapshot = self.snapshot();
        let descriptions: HashMap<String, String> = self
            .lock()
            .metrics
            .iter()
            .filter_map(|(name, m)| m.description().map(|d| (name.clone(), d.to_string())))
            .collect();

        println!("\n========== Sequence Metrics ==========");
        if let Some(ms) = snapshot.elapsed_ms {
            println!("Execution Time: {ms} ms");
            println!("--------------------------------------");
        }
        for (name, count) in &snapshot.counters {
            println!("{name}: {count}");
        }
        for (name, value) in &snapshot.custom {
            match descriptions.get(name) {
                Some(desc) => println!("{name}: {value} ({desc})"),
                None => println!("{name}: {value}"),
            }
        }
        println!("======================================\n");
    }

    /// Save all metrics to a pretty-printed JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be created or written to.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let formatted = serde_json::to_string_pretty(&self.snapshot())?;
        let mut file =
            File::create(path).with_context(|| format!("creating metrics file {}", path.display()))?;
        file.write_all(formatted.as_bytes())
            .with_context(|| format!("writing metrics file {}", path.display()))?;
        Ok(())
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Built-in Metrics ==========

/// A gauge metric that holds a single numeric value.
pub struct GaugeMetric {
    name: String,
    value: f64,
    description: Option<String>,
}

impl GaugeMetric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Metric for GaugeMetric {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Value {
        json!(self.value)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

// ========== Metered operator ==========

pub(crate) struct MeteredOp<'a, T> {
    input: Sequence<'a, T>,
    elements: String,
    exhausted: String,
    collector: MetricsCollector,
}

impl<T> Pull for MeteredOp<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        let step = self.input.pull();
        match step {
            Step::Emit(_) => self.collector.increment_counter(&self.elements, 1),
            Step::Exhausted => {
                tracing::trace!(counter = %self.exhausted, "metered point exhausted");
                self.collector.set_counter(&self.exhausted, 1);
            }
        }
        step
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Count what passes this point of the chain into `collector`.
    ///
    /// Maintains `<label>.elements` (elements pulled through) and
    /// `<label>.exhausted` (`1` once exhaustion was observed here). Elements are
    /// passed through unchanged.
    pub fn metered(self, label: &str, collector: &MetricsCollector) -> Self {
        let elements = format!("{label}.elements");
        let exhausted = format!("{label}.exhausted");
        // register both counters so snapshots list them even if never pulled
        collector.increment_counter(&elements, 0);
        collector.increment_counter(&exhausted, 0);
        let collector = collector.clone();
        self.chain("metered", |input| MeteredOp {
            input,
            elements,
            exhausted,
            collector,
        })
    }
}
