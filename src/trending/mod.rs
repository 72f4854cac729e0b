//! Trending leaderboard: period buckets, ranked entries, and the carousel
//! that rotates between them.
//!
//! - [`board`] - Per-period entry lists, built-in samples, and TOML loading
//! - [`carousel`] - Cyclic period selection and row rendering
//! - [`format`] - Compact count formatting ("1.2K")

mod board;
mod carousel;
mod format;

pub use board::{TrendingBoard, TrendingDataError, TrendingEntry};
pub use carousel::{Step, TrendingCarousel, TrendingRow, LOADING_PLACEHOLDER};
pub use format::format_count;

/// One of the fixed trending time windows.
///
/// Declaration order is the rotation order of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendingPeriod {
    RealTime,
    Today,
    Weekly,
    Monthly,
}

impl TrendingPeriod {
    /// All periods in rotation order.
    pub const ALL: [TrendingPeriod; 4] = [
        TrendingPeriod::RealTime,
        TrendingPeriod::Today,
        TrendingPeriod::Weekly,
        TrendingPeriod::Monthly,
    ];

    /// Stable identifier used as the table name in trending data files.
    pub fn slug(self) -> &'static str {
        match self {
            Self::RealTime => "realtime",
            Self::Today => "today",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Panel title shown above the leaderboard.
    pub fn label(self) -> &'static str {
        match self {
            Self::RealTime => "Real-time Trending",
            Self::Today => "Today's Trending",
            Self::Weekly => "Weekly Trending",
            Self::Monthly => "Monthly Trending",
        }
    }

    /// Parse a slug back into a period (case-insensitive).
    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for period in TrendingPeriod::ALL {
            assert_eq!(TrendingPeriod::from_slug(period.slug()), Some(period));
        }
    }

    #[test]
    fn from_slug_is_case_insensitive() {
        assert_eq!(
            TrendingPeriod::from_slug("Weekly"),
            Some(TrendingPeriod::Weekly)
        );
        assert_eq!(TrendingPeriod::from_slug("yearly"), None);
    }
}
