//! Admin dashboard aggregator over the reservation working copy.
//!
//! The dashboard owns a private mutable copy of the reservation list seeded
//! from the catalog at load time. The catalog's seed collection is never
//! mutated, so reloading the dashboard resets its state. Every mutation
//! (status change, delete) recomputes the summary statistics in the same
//! synchronous step; no intermediate inconsistent read is observable.

use crate::pipeline::matcher::contains_ci;
use crate::store::{Reservation, ReservationKind, ReservationStatus};

/// Summary statistics over the working copy.
///
/// The three status counts always partition `total`; `total_revenue` sums
/// the snapshotted price of confirmed reservations only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    pub total_revenue: f64,
}

/// Per-kind reservation counts for the dashboard breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KindCounts {
    pub flights: usize,
    pub hotels: usize,
    pub packages: usize,
}

/// Search and filter selection for the reservations table. `None` status or
/// kind means "all".
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub term: String,
    pub status: Option<ReservationStatus>,
    pub kind: Option<ReservationKind>,
}

impl ReservationFilter {
    fn matches(&self, reservation: &Reservation) -> bool {
        let term = if self.term.is_empty() {
            None
        } else {
            Some(self.term.as_str())
        };
        contains_ci(&reservation.item_name, term)
            && self.status.map_or(true, |s| reservation.status == s)
            && self.kind.map_or(true, |k| reservation.kind == k)
    }
}

/// The admin working copy plus its derived aggregates.
#[derive(Debug, Clone)]
pub struct AdminBoard {
    reservations: Vec<Reservation>,
    stats: Stats,
}

impl AdminBoard {
    /// Seed a fresh working copy from the catalog's reservation list.
    pub fn new(seed: &[Reservation]) -> Self {
        let reservations = seed.to_vec();
        let stats = compute_stats(&reservations);
        Self {
            reservations,
            stats,
        }
    }

    /// Current summary statistics. Always consistent with the working copy.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// All reservations in working-copy order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Reservations matching the search term (item-name substring,
    /// case-insensitive), status selection and kind selection. All three
    /// compose with AND; defaults narrow nothing.
    pub fn filtered(&self, filter: &ReservationFilter) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    /// Replace the status of the named reservation. Unknown ids are a
    /// silent no-op. Any status may move to any other; this is an
    /// administrative override, not a workflow engine.
    pub fn set_status(&mut self, id: &str, status: ReservationStatus) {
        if let Some(reservation) = self.reservations.iter_mut().find(|r| r.id == id) {
            reservation.status = status;
            self.stats = compute_stats(&self.reservations);
        }
    }

    /// Remove the named reservation. Idempotent: deleting an unknown id is
    /// a no-op, not an error.
    pub fn delete(&mut self, id: &str) {
        let before = self.reservations.len();
        self.reservations.retain(|r| r.id != id);
        if self.reservations.len() != before {
            self.stats = compute_stats(&self.reservations);
        }
    }

    /// The `n` most recently created reservations, newest first. The sort
    /// is stable, so creation-time ties keep working-copy order.
    pub fn recent(&self, n: usize) -> Vec<&Reservation> {
        let mut ordered: Vec<&Reservation> = self.reservations.iter().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ordered.truncate(n);
        ordered
    }

    /// Reservation counts by kind.
    pub fn kind_counts(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for reservation in &self.reservations {
            match reservation.kind {
                ReservationKind::Flight => counts.flights += 1,
                ReservationKind::Hotel => counts.hotels += 1,
                ReservationKind::Package => counts.packages += 1,
            }
        }
        counts
    }
}

fn compute_stats(reservations: &[Reservation]) -> Stats {
    let mut stats = Stats {
        total: reservations.len(),
        ..Stats::default()
    };
    for reservation in reservations {
        match reservation.status {
            ReservationStatus::Confirmed => {
                stats.confirmed += 1;
                stats.total_revenue += reservation.price;
            }
            ReservationStatus::Pending => stats.pending += 1,
            ReservationStatus::Cancelled => stats.cancelled += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ReservationKind as Kind, ReservationStatus as Status};
    use crate::test_utils::{reservation, ts};

    fn seed() -> Vec<Reservation> {
        vec![
            reservation("r1", Kind::Flight, "JFK to LHR", 650.0, Status::Confirmed, ts(2024, 5, 26)),
            reservation("r2", Kind::Hotel, "Ocean View Resort", 1100.0, Status::Confirmed, ts(2024, 5, 21)),
            reservation("r3", Kind::Package, "Tokyo Cultural Immersion", 2200.0, Status::Pending, ts(2024, 5, 29)),
            reservation("r4", Kind::Flight, "DXB to JFK", 980.0, Status::Cancelled, ts(2024, 5, 23)),
        ]
    }

    #[test]
    fn test_stats_from_seed() {
        let board = AdminBoard::new(&seed());
        let stats = board.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total_revenue, 1750.0);
    }

    #[test]
    fn test_counts_partition_total() {
        let board = AdminBoard::new(&seed());
        let stats = board.stats();
        assert_eq!(stats.confirmed + stats.pending + stats.cancelled, stats.total);
    }

    #[test]
    fn test_seed_is_not_mutated() {
        let seed = seed();
        let mut board = AdminBoard::new(&seed);
        board.set_status("r1", Status::Cancelled);
        board.delete("r2");
        // The seed collection is untouched; reloading resets state.
        assert_eq!(seed.len(), 4);
        assert_eq!(seed[0].status, Status::Confirmed);
        let reloaded = AdminBoard::new(&seed);
        assert_eq!(reloaded.stats().total, 4);
    }

    #[test]
    fn test_cancel_confirmed_reduces_revenue() {
        let mut board = AdminBoard::new(&seed());
        let before = board.stats().total_revenue;
        board.set_status("r1", Status::Cancelled);
        let after = board.stats();
        assert_eq!(after.total_revenue, before - 650.0);
        assert_eq!(after.confirmed, 1);
        assert_eq!(after.cancelled, 2);
        assert_eq!(after.total, 4);
    }

    #[test]
    fn test_confirm_pending_adds_revenue() {
        let mut board = AdminBoard::new(&seed());
        board.set_status("r3", Status::Confirmed);
        assert_eq!(board.stats().total_revenue, 1750.0 + 2200.0);
    }

    #[test]
    fn test_every_status_transition_is_allowed() {
        let mut board = AdminBoard::new(&seed());
        for from in Status::ALL {
            for to in Status::ALL {
                board.set_status("r1", from);
                board.set_status("r1", to);
                assert_eq!(board.reservations()[0].status, to);
            }
        }
    }

    #[test]
    fn test_set_status_unknown_id_is_noop() {
        let mut board = AdminBoard::new(&seed());
        let before = board.stats();
        board.set_status("r99", Status::Cancelled);
        assert_eq!(board.stats(), before);
    }

    #[test]
    fn test_status_change_does_not_touch_price() {
        let mut board = AdminBoard::new(&seed());
        board.set_status("r1", Status::Pending);
        board.set_status("r1", Status::Confirmed);
        assert_eq!(board.reservations()[0].price, 650.0);
    }

    #[test]
    fn test_delete_removes_from_all_aggregates() {
        let mut board = AdminBoard::new(&seed());
        board.delete("r2");

        let stats = board.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.total_revenue, 650.0);

        assert!(board.filtered(&ReservationFilter::default()).iter().all(|r| r.id != "r2"));
        assert!(board.recent(10).iter().all(|r| r.id != "r2"));
        assert_eq!(board.kind_counts().hotels, 0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut board = AdminBoard::new(&seed());
        board.delete("r2");
        let after_first = board.stats();
        board.delete("r2");
        board.delete("never-existed");
        assert_eq!(board.stats(), after_first);
    }

    #[test]
    fn test_filtered_by_term_case_insensitive() {
        let board = AdminBoard::new(&seed());
        let filter = ReservationFilter {
            term: "ocean".into(),
            ..ReservationFilter::default()
        };
        let hits = board.filtered(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "r2");
    }

    #[test]
    fn test_filtered_compose_with_and() {
        let board = AdminBoard::new(&seed());
        let filter = ReservationFilter {
            term: "jfk".into(),
            status: Some(Status::Cancelled),
            kind: Some(Kind::Flight),
        };
        let hits = board.filtered(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "r4");
    }

    #[test]
    fn test_filtered_defaults_match_everything() {
        let board = AdminBoard::new(&seed());
        assert_eq!(board.filtered(&ReservationFilter::default()).len(), 4);
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let board = AdminBoard::new(&seed());
        let recent = board.recent(10);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1", "r4", "r2"]);
    }

    #[test]
    fn test_recent_caps_at_n() {
        let board = AdminBoard::new(&seed());
        assert_eq!(board.recent(2).len(), 2);
        assert_eq!(board.recent(0).len(), 0);
        assert_eq!(board.recent(100).len(), 4);
    }

    #[test]
    fn test_recent_ties_keep_working_copy_order() {
        let same_time = ts(2024, 5, 20);
        let seed = vec![
            reservation("a", Kind::Flight, "One", 1.0, Status::Pending, same_time),
            reservation("b", Kind::Flight, "Two", 1.0, Status::Pending, same_time),
            reservation("c", Kind::Flight, "Three", 1.0, Status::Pending, same_time),
        ];
        let board = AdminBoard::new(&seed);
        let ids: Vec<&str> = board.recent(3).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_kind_counts() {
        let board = AdminBoard::new(&seed());
        let counts = board.kind_counts();
        assert_eq!(counts.flights, 2);
        assert_eq!(counts.hotels, 1);
        assert_eq!(counts.packages, 1);
    }
}
