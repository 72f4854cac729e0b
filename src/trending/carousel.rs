use super::{format_count, TrendingBoard, TrendingPeriod};

/// Text of the single row shown when the selected period has no entries.
pub const LOADING_PLACEHOLDER: &str = "Loading trending topics...";

/// Rotation direction for [`TrendingCarousel::select_period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Self::Back => -1,
            Self::Forward => 1,
        }
    }
}

/// A display-ready leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendingRow {
    /// Selected period has no data yet.
    Placeholder,
    Entry {
        rank: u32,
        title: String,
        agree: String,
        disagree: String,
        views: String,
    },
}

/// Shows the top entries of exactly one period at a time.
#[derive(Debug, Clone)]
pub struct TrendingCarousel {
    board: TrendingBoard,
    selected: usize,
    limit: usize,
}

impl TrendingCarousel {
    /// Create a carousel starting at the first period, showing at most `limit` rows.
    /// A `limit` of 0 is raised to 1 so a non-empty period is never blank.
    pub fn new(board: TrendingBoard, limit: usize) -> Self {
        Self {
            board,
            selected: 0,
            limit: limit.max(1),
        }
    }

    /// Index of the selected period within [`TrendingPeriod::ALL`].
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Maximum rows shown per period.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn period(&self) -> TrendingPeriod {
        TrendingPeriod::ALL[self.selected]
    }

    /// Label for the period title element.
    pub fn label(&self) -> &'static str {
        self.period().label()
    }

    /// Rotate the selection one step, wrapping at both ends.
    pub fn select_period(&mut self, step: Step) {
        let count = TrendingPeriod::ALL.len() as isize;
        self.selected = (self.selected as isize + step.delta()).rem_euclid(count) as usize;
        tracing::debug!(period = self.period().slug(), "Trending period selected");
    }

    /// Rows for the selected period, in stored order.
    ///
    /// An empty list yields a single [`TrendingRow::Placeholder`].
    pub fn rows(&self) -> Vec<TrendingRow> {
        let entries = self.board.entries(self.period());
        if entries.is_empty() {
            return vec![TrendingRow::Placeholder];
        }

        entries
            .iter()
            .take(self.limit)
            .map(|e| TrendingRow::Entry {
                rank: e.rank,
                title: e.title.clone(),
                agree: format_count(e.agree_count),
                disagree: format_count(e.disagree_count),
                views: format_count(e.view_count),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trending::TrendingEntry;
    use proptest::prelude::*;

    fn carousel() -> TrendingCarousel {
        TrendingCarousel::new(TrendingBoard::samples(), 5)
    }

    #[test]
    fn test_zero_limit_still_shows_top_entry() {
        let c = TrendingCarousel::new(TrendingBoard::samples(), 0);
        assert_eq!(c.limit(), 1);
        let rows = c.rows();
        assert_eq!(rows.len(), 1);
        assert!(matches!(rows[0], TrendingRow::Entry { rank: 1, .. }));
    }

    #[test]
    fn test_starts_at_realtime() {
        let c = carousel();
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.period(), TrendingPeriod::RealTime);
        assert_eq!(c.label(), "Real-time Trending");
    }

    #[test]
    fn test_back_from_first_wraps_to_last() {
        let mut c = carousel();
        c.select_period(Step::Back);
        assert_eq!(c.period(), TrendingPeriod::Monthly);
    }

    #[test]
    fn test_forward_from_last_wraps_to_first() {
        let mut c = carousel();
        for _ in 0..3 {
            c.select_period(Step::Forward);
        }
        assert_eq!(c.period(), TrendingPeriod::Monthly);
        c.select_period(Step::Forward);
        assert_eq!(c.period(), TrendingPeriod::RealTime);
    }

    #[test]
    fn test_rows_follow_stored_order_without_sorting() {
        let mut board = TrendingBoard::empty();
        board.set(
            TrendingPeriod::RealTime,
            vec![
                TrendingEntry::new(3, "c", 1, 1, 1),
                TrendingEntry::new(1, "a", 2175, 999, 1000),
            ],
        );
        let c = TrendingCarousel::new(board, 5);
        let rows = c.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            TrendingRow::Entry {
                rank: 1,
                title: "a".to_string(),
                agree: "2.2K".to_string(),
                disagree: "999".to_string(),
                views: "1.0K".to_string(),
            }
        );
        assert!(matches!(rows[0], TrendingRow::Entry { rank: 3, .. }));
    }

    #[test]
    fn test_empty_period_renders_placeholder() {
        let mut board = TrendingBoard::samples();
        board.set(TrendingPeriod::Today, Vec::new());
        let mut c = TrendingCarousel::new(board, 5);
        c.select_period(Step::Forward);
        assert_eq!(c.rows(), vec![TrendingRow::Placeholder]);
    }

    #[test]
    fn test_rows_capped_at_limit() {
        let c = TrendingCarousel::new(TrendingBoard::samples(), 3);
        assert_eq!(c.rows().len(), 3);
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_bounds(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut c = carousel();
            for forward in steps {
                c.select_period(if forward { Step::Forward } else { Step::Back });
                prop_assert!(c.selected_index() < TrendingPeriod::ALL.len());
            }
        }

        #[test]
        fn prop_four_steps_return_home(start in 0usize..4, forward in any::<bool>()) {
            let mut c = carousel();
            for _ in 0..start {
                c.select_period(Step::Forward);
            }
            let before = c.selected_index();
            let step = if forward { Step::Forward } else { Step::Back };
            for _ in 0..4 {
                c.select_period(step);
            }
            prop_assert_eq!(c.selected_index(), before);
        }
    }
}
