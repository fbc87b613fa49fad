//! Handle background search outcomes and return corresponding app events.
//!
//! Does not mutate app state directly - returns events to be processed.
//! Staleness is decided at application time by the view's request tracker,
//! not here.

use crate::event::AppEvent;
use crate::search::SearchOutcome;

pub fn handle_search_outcome(outcome: SearchOutcome) -> Vec<AppEvent> {
    match outcome {
        SearchOutcome::Complete { seq, results } => {
            vec![AppEvent::SearchComplete { seq, results }]
        }
        SearchOutcome::Error { seq, message } => {
            vec![AppEvent::SearchFailed { seq, message }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ResultSet;

    #[test]
    fn test_complete_outcome() {
        let outcome = SearchOutcome::Complete {
            seq: 3,
            results: ResultSet::Hotels(vec![]),
        };
        let events = handle_search_outcome(outcome);
        assert_eq!(
            events,
            vec![AppEvent::SearchComplete {
                seq: 3,
                results: ResultSet::Hotels(vec![]),
            }]
        );
    }

    #[test]
    fn test_error_outcome() {
        let outcome = SearchOutcome::Error {
            seq: 4,
            message: "Test error".to_string(),
        };
        let events = handle_search_outcome(outcome);
        assert_eq!(
            events,
            vec![AppEvent::SearchFailed {
                seq: 4,
                message: "Test error".to_string(),
            }]
        );
    }
}
