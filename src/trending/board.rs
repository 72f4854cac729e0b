//! Per-period trending entry lists.
//!
//! The board ships with built-in sample data. A TOML file with one array of
//! tables per period slug can replace it:
//!
//! ```toml
//! [[realtime]]
//! rank = 1
//! title = "Should remote work become the default?"
//! agree = 1520
//! disagree = 820
//! views = 15430
//! ```
//!
//! A period missing from the file ends up with an empty list, which the
//! carousel renders as a loading placeholder.
use super::TrendingPeriod;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendingDataError {
    #[error("Failed to read trending file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in trending file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Entry \"{title}\" in [{period}] has rank 0 (ranks start at 1)")]
    InvalidRank { period: &'static str, title: String },
}

/// One leaderboard row. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrendingEntry {
    /// Display rank. Descriptive only; row order is insertion order.
    pub rank: u32,
    pub title: String,
    #[serde(rename = "agree")]
    pub agree_count: u64,
    #[serde(rename = "disagree")]
    pub disagree_count: u64,
    #[serde(rename = "views")]
    pub view_count: u64,
}

impl TrendingEntry {
    pub fn new(rank: u32, title: &str, agree: u64, disagree: u64, views: u64) -> Self {
        Self {
            rank,
            title: title.to_string(),
            agree_count: agree,
            disagree_count: disagree,
            view_count: views,
        }
    }
}

/// Raw file layout: one optional array per period slug.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrendingFile {
    realtime: Vec<TrendingEntry>,
    today: Vec<TrendingEntry>,
    weekly: Vec<TrendingEntry>,
    monthly: Vec<TrendingEntry>,
}

/// Entry lists keyed by period.
#[derive(Debug, Clone, Default)]
pub struct TrendingBoard {
    lists: HashMap<TrendingPeriod, Vec<TrendingEntry>>,
}

impl TrendingBoard {
    /// A board with no data for any period.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the list for one period.
    pub fn set(&mut self, period: TrendingPeriod, entries: Vec<TrendingEntry>) {
        self.lists.insert(period, entries);
    }

    /// Entries for a period, in stored order. Absent periods yield an empty slice.
    pub fn entries(&self, period: TrendingPeriod) -> &[TrendingEntry] {
        self.lists.get(&period).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Load a board from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TrendingDataError> {
        let content = std::fs::read_to_string(path)?;
        let board = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded trending data");
        Ok(board)
    }

    /// Parse a board from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, TrendingDataError> {
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if TrendingPeriod::from_slug(key).is_none() {
                    tracing::warn!(key = %key, "Unknown period in trending file, ignoring");
                }
            }
        }

        let file: TrendingFile = toml::from_str(content)?;
        let mut board = Self::empty();
        for (period, entries) in [
            (TrendingPeriod::RealTime, file.realtime),
            (TrendingPeriod::Today, file.today),
            (TrendingPeriod::Weekly, file.weekly),
            (TrendingPeriod::Monthly, file.monthly),
        ] {
            if let Some(bad) = entries.iter().find(|e| e.rank == 0) {
                return Err(TrendingDataError::InvalidRank {
                    period: period.slug(),
                    title: bad.title.clone(),
                });
            }
            board.set(period, entries);
        }
        Ok(board)
    }

    /// Built-in sample leaderboard standing in for a backend.
    pub fn samples() -> Self {
        let mut board = Self::empty();
        board.set(
            TrendingPeriod::RealTime,
            vec![
                TrendingEntry::new(1, "Should remote work become the default?", 1520, 820, 15_430),
                TrendingEntry::new(2, "Is a four-day work week realistic?", 980, 1120, 9_870),
                TrendingEntry::new(3, "Ban smartphones in classrooms?", 760, 540, 6_210),
                TrendingEntry::new(4, "Should voting be mandatory?", 430, 610, 4_980),
                TrendingEntry::new(5, "Is AI art real art?", 390, 470, 3_720),
            ],
        );
        board.set(
            TrendingPeriod::Today,
            vec![
                TrendingEntry::new(1, "Is a four-day work week realistic?", 3240, 2870, 31_200),
                TrendingEntry::new(2, "Should tipping be abolished?", 2150, 1340, 22_450),
                TrendingEntry::new(3, "Should remote work become the default?", 1980, 1010, 19_800),
                TrendingEntry::new(4, "Are electric cars worth it yet?", 1430, 1290, 14_100),
                TrendingEntry::new(5, "Ban smartphones in classrooms?", 990, 720, 8_760),
            ],
        );
        board.set(
            TrendingPeriod::Weekly,
            vec![
                TrendingEntry::new(1, "Should voting be mandatory?", 8730, 9120, 102_300),
                TrendingEntry::new(2, "Is AI art real art?", 7410, 8020, 88_140),
                TrendingEntry::new(3, "Should tipping be abolished?", 6520, 4310, 71_900),
                TrendingEntry::new(4, "Universal basic income: yes or no?", 5980, 5870, 64_020),
                TrendingEntry::new(5, "Are electric cars worth it yet?", 4210, 3990, 47_650),
            ],
        );
        board.set(
            TrendingPeriod::Monthly,
            vec![
                TrendingEntry::new(1, "Universal basic income: yes or no?", 24_310, 23_980, 412_000),
                TrendingEntry::new(2, "Should remote work become the default?", 21_870, 12_440, 356_700),
                TrendingEntry::new(3, "Should voting be mandatory?", 18_020, 19_330, 298_450),
                TrendingEntry::new(4, "Is a four-day work week realistic?", 15_660, 13_210, 241_800),
                TrendingEntry::new(5, "Is AI art real art?", 12_400, 14_050, 203_100),
            ],
        );
        board
    }
}
