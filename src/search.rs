//! Background search engine for the result pipelines.
//!
//! Each triggered search runs the full pipeline on a worker thread and
//! reports the outcome over a channel. An artificial latency (default zero)
//! stands in for a network round trip so the UI can show a loading state;
//! it is cosmetic and correctness never depends on it.
//!
//! Every request carries a monotonically increasing sequence number. The
//! receiver must apply an outcome only when its sequence number is at least
//! the newest one already applied, so a superseded in-flight search can
//! never overwrite the result of a later trigger, even if outcomes arrive
//! out of order.

use crate::store::{Flight, Hotel, TravelPackage};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::Duration;

/// A completed pipeline run for one domain.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    Flights(Vec<Flight>),
    Hotels(Vec<Hotel>),
    Packages(Vec<TravelPackage>),
}

impl ResultSet {
    pub fn len(&self) -> usize {
        match self {
            ResultSet::Flights(v) => v.len(),
            ResultSet::Hotels(v) => v.len(),
            ResultSet::Packages(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of one search request.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Complete { seq: u64, results: ResultSet },
    Error { seq: u64, message: String },
}

impl SearchOutcome {
    pub fn seq(&self) -> u64 {
        match self {
            SearchOutcome::Complete { seq, .. } | SearchOutcome::Error { seq, .. } => *seq,
        }
    }
}

/// Search engine that runs pipelines on background threads.
pub struct SearchEngine;

impl SearchEngine {
    /// Run a pipeline closure in the background after an artificial delay.
    ///
    /// Returns a receiver for the single outcome. A panic inside the
    /// pipeline surfaces as [`SearchOutcome::Error`] rather than a dead
    /// channel.
    pub fn run<F>(seq: u64, latency: Duration, produce: F) -> Receiver<SearchOutcome>
    where
        F: FnOnce() -> ResultSet + Send + 'static,
    {
        let (tx, rx) = channel();

        thread::spawn(move || {
            if !latency.is_zero() {
                thread::sleep(latency);
            }

            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(produce));

            let outcome = match result {
                Ok(results) => SearchOutcome::Complete { seq, results },
                Err(_) => SearchOutcome::Error {
                    seq,
                    message: "Search thread panicked".to_string(),
                },
            };
            let _ = tx.send(outcome);
        });

        rx
    }
}

/// Tracks which search outcome is current for one results view.
///
/// `next_seq` hands out request numbers; `should_apply` accepts an outcome
/// only if no newer outcome has been applied (last trigger wins).
#[derive(Debug, Default)]
pub struct RequestTracker {
    issued: u64,
    applied: Option<u64>,
}

impl RequestTracker {
    /// Allocate the sequence number for a new request.
    pub fn next_seq(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Record an outcome's sequence number; returns false for stale
    /// outcomes that must be dropped.
    pub fn should_apply(&mut self, seq: u64) -> bool {
        match self.applied {
            Some(applied) if seq < applied => false,
            _ => {
                self.applied = Some(seq);
                true
            }
        }
    }

    /// The most recently issued sequence number.
    pub fn latest(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_search_completes_with_results() {
        let flights = vec![test_utils::flight("f1", "A", "B", 100.0, 60, 0)];
        let rx = SearchEngine::run(1, Duration::ZERO, move || ResultSet::Flights(flights));

        match rx.recv().unwrap() {
            SearchOutcome::Complete { seq, results } => {
                assert_eq!(seq, 1);
                assert_eq!(results.len(), 1);
            }
            SearchOutcome::Error { .. } => panic!("expected Complete"),
        }
    }

    #[test]
    fn test_search_panic_becomes_error() {
        let rx = SearchEngine::run(7, Duration::ZERO, || panic!("boom"));
        match rx.recv().unwrap() {
            SearchOutcome::Error { seq, message } => {
                assert_eq!(seq, 7);
                assert!(message.contains("panicked"));
            }
            SearchOutcome::Complete { .. } => panic!("expected Error"),
        }
    }

    #[test]
    fn test_zero_latency_is_effectively_synchronous() {
        let rx = SearchEngine::run(1, Duration::ZERO, || ResultSet::Hotels(vec![]));
        // recv blocks until the worker finishes; no delay is involved.
        assert!(matches!(
            rx.recv().unwrap(),
            SearchOutcome::Complete { seq: 1, .. }
        ));
    }

    #[test]
    fn test_tracker_sequence_is_monotonic() {
        let mut tracker = RequestTracker::default();
        let a = tracker.next_seq();
        let b = tracker.next_seq();
        assert!(b > a);
        assert_eq!(tracker.latest(), b);
    }

    #[test]
    fn test_tracker_drops_stale_outcome() {
        let mut tracker = RequestTracker::default();
        let first = tracker.next_seq();
        let second = tracker.next_seq();

        // The later request completes first (it had lower latency).
        assert!(tracker.should_apply(second));
        // The earlier, slower request must not overwrite it.
        assert!(!tracker.should_apply(first));
    }

    #[test]
    fn test_tracker_applies_in_order_outcomes() {
        let mut tracker = RequestTracker::default();
        let first = tracker.next_seq();
        let second = tracker.next_seq();

        assert!(tracker.should_apply(first));
        assert!(tracker.should_apply(second));
    }

    #[test]
    fn test_last_trigger_wins_end_to_end() {
        let mut tracker = RequestTracker::default();

        let slow_seq = tracker.next_seq();
        let slow = SearchEngine::run(slow_seq, Duration::from_millis(50), || {
            ResultSet::Flights(vec![test_utils::flight("old", "A", "B", 1.0, 60, 0)])
        });

        let fast_seq = tracker.next_seq();
        let fast = SearchEngine::run(fast_seq, Duration::ZERO, || {
            ResultSet::Flights(vec![test_utils::flight("new", "A", "B", 2.0, 60, 0)])
        });

        let mut current: Option<ResultSet> = None;
        for outcome in [fast.recv().unwrap(), slow.recv().unwrap()] {
            if tracker.should_apply(outcome.seq()) {
                if let SearchOutcome::Complete { results, .. } = outcome {
                    current = Some(results);
                }
            }
        }

        match current.unwrap() {
            ResultSet::Flights(flights) => assert_eq!(flights[0].id, "new"),
            _ => panic!("expected flights"),
        }
    }
}
