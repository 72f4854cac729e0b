/// Display-only "how heated is this debate" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    Hot,
    Warm,
    Normal,
}

impl HeatLevel {
    /// Badge text shown in the card's engagement line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "🔥 HOT",
            Self::Warm => "🌡 Heated",
            Self::Normal => "💭 Active",
        }
    }

    /// Theme role used to color the badge.
    pub fn style_role(self) -> &'static str {
        match self {
            Self::Hot => "heat_hot",
            Self::Warm => "heat_warm",
            Self::Normal => "heat_normal",
        }
    }
}

/// One discussion topic in the feed. Never mutated after creation.
///
/// The vote split is private so every card goes through [`TopicCard::new`]
/// and the two shares always sum to 100.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCard {
    pub title: String,
    /// Relative time, e.g. "12m ago".
    pub posted_at: String,
    pub author: String,
    agree_percent: u8,
    pub total_votes: u64,
    pub comment_count: u64,
    pub view_count_label: String,
    pub heat: HeatLevel,
}

impl TopicCard {
    /// Build a card, deriving the disagree share from the agree share.
    ///
    /// `agree_percent` is clamped to 100.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        posted_at: String,
        author: String,
        agree_percent: u8,
        total_votes: u64,
        comment_count: u64,
        view_count_label: String,
        heat: HeatLevel,
    ) -> Self {
        let agree_percent = agree_percent.min(100);
        Self {
            title,
            posted_at,
            author,
            agree_percent,
            total_votes,
            comment_count,
            view_count_label,
            heat,
        }
    }

    pub fn agree_percent(&self) -> u8 {
        self.agree_percent
    }

    pub fn disagree_percent(&self) -> u8 {
        100 - self.agree_percent
    }
}
