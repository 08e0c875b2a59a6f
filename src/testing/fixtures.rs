//! Pre-built sources and datasets for common testing scenarios.
//!
//! The probes here make laziness observable: a [`PullProbe`] counts how many
//! times its source was pulled, and [`panic_after`] fails loudly if a chain
//! pulls further than it should.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::helpers::{from_fn, from_iter, from_vec};
use crate::sequence::Sequence;

/// Shared pull counter for a source built with [`PullProbe::source`].
///
/// # Example
///
/// ```
/// use ironseq::*;
/// use ironseq::testing::PullProbe;
///
/// let probe = PullProbe::new();
/// let found = probe.source(vec![1, 2, 3, 4, 5]).find(|x| *x == 2);
/// assert_eq!(found, Some(2));
/// assert_eq!(probe.pulls(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PullProbe {
    pulls: Rc<Cell<usize>>,
}

impl PullProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source over `data` that bumps this probe on every pull, including
    /// the pull that reports exhaustion.
    pub fn source<'a, T: 'a>(&self, data: Vec<T>) -> Sequence<'a, T> {
        let pulls = Rc::clone(&self.pulls);
        let mut items = data.into_iter();
        from_fn(move || {
            pulls.set(pulls.get() + 1);
            items.next()
        })
    }

    /// An infinite counting source `0, 1, 2, ...` that bumps this probe on
    /// every pull.
    pub fn naturals<'a>(&self) -> Sequence<'a, u64> {
        let pulls = Rc::clone(&self.pulls);
        let mut next = 0u64;
        from_fn(move || {
            pulls.set(pulls.get() + 1);
            let n = next;
            next += 1;
            Some(n)
        })
    }

    /// Number of pulls observed so far.
    #[must_use]
    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    pub fn reset(&self) {
        self.pulls.set(0);
    }
}

/// The infinite sequence `0, 1, 2, ...`.
pub fn naturals<'a>() -> Sequence<'a, u64> {
    from_iter(0u64..)
}

/// A source that yields `0..n` and panics if pulled a further time.
///
/// Use it to prove an operator never pulls beyond what it needs.
///
/// # Example
///
/// ```
/// use ironseq::*;
/// use ironseq::testing::panic_after;
///
/// // take(3) must not pull a fourth time
/// assert_eq!(panic_after(3).take(3).to_vec(), vec![0, 1, 2]);
/// ```
pub fn panic_after<'a>(n: usize) -> Sequence<'a, usize> {
    let mut next = 0;
    from_fn(move || {
        assert!(next < n, "source pulled beyond its first {n} elements");
        next += 1;
        Some(next - 1)
    })
}

/// Sample log entry structure for testing grouping and chunking chains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleLogEntry {
    pub timestamp: u64,
    pub ip: String,
    pub method: String,
    pub path: String,
    pub status: u16,
}

/// Sample log entries, ordered by timestamp.
///
/// ```
/// use ironseq::testing::sample_log_entries;
///
/// let by_status = sample_log_entries().frequencies_by(|e| e.status);
/// assert_eq!(by_status.get(&200), Some(&2));
/// ```
#[must_use]
pub fn sample_log_entries<'a>() -> Sequence<'a, SampleLogEntry> {
    let entry = |timestamp, ip: &str, method: &str, path: &str, status| SampleLogEntry {
        timestamp,
        ip: ip.to_string(),
        method: method.to_string(),
        path: path.to_string(),
        status,
    };
    from_vec(vec![
        entry(1_000_000, "192.168.1.100", "GET", "/api/users", 200),
        entry(1_000_100, "192.168.1.101", "POST", "/api/users", 201),
        entry(1_000_200, "192.168.1.102", "GET", "/api/posts", 200),
        entry(1_000_300, "192.168.1.100", "GET", "/api/users", 404),
        entry(1_000_400, "192.168.1.103", "DELETE", "/api/posts", 500),
    ])
}

/// Sentences for word-counting tests.
#[must_use]
pub fn word_count_data<'a>() -> Sequence<'a, String> {
    from_vec(
        [
            "the quick brown fox",
            "jumps over the lazy dog",
            "the dog barks",
        ]
        .map(String::from)
        .to_vec(),
    )
}
