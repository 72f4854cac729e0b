//! Synthetic topic card generation.
//!
//! Cards are sampled with replacement from a fixed template pool. Everything
//! except author and heat is re-randomized per card, so the only source of
//! repeatability is the RNG passed in.
use super::{HeatLevel, TopicCard};
use crate::trending::format_count;
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound for the random "posted" age: one week.
const MAX_AGE_SECS: u64 = 7 * 86_400;

/// Template a generated card starts from.
#[derive(Debug, Clone, Copy)]
pub struct TopicTemplate {
    pub title: &'static str,
    pub author: &'static str,
    pub heat: HeatLevel,
}

/// Fixed template pool.
pub const TEMPLATES: &[TopicTemplate] = &[
    TopicTemplate {
        title: "Should homework be banned in primary schools?",
        author: "classroom_critic",
        heat: HeatLevel::Hot,
    },
    TopicTemplate {
        title: "Is nuclear power the answer to climate change?",
        author: "gridwatcher",
        heat: HeatLevel::Warm,
    },
    TopicTemplate {
        title: "Should social media require real-name accounts?",
        author: "anon_no_more",
        heat: HeatLevel::Hot,
    },
    TopicTemplate {
        title: "Is it fair to split the bill evenly on a date?",
        author: "dinner_for_two",
        heat: HeatLevel::Normal,
    },
    TopicTemplate {
        title: "Should pets be allowed in all restaurants?",
        author: "pawsitive",
        heat: HeatLevel::Normal,
    },
    TopicTemplate {
        title: "Are open-plan offices bad for productivity?",
        author: "deskbound",
        heat: HeatLevel::Warm,
    },
];

/// Format an age in seconds as relative time ("5m ago").
pub fn format_age(secs: u64) -> String {
    if secs < 60 {
        return "just now".to_string();
    }
    if secs < 3600 {
        return format!("{}m ago", secs / 60);
    }
    if secs < 86_400 {
        return format!("{}h ago", secs / 3600);
    }
    format!("{}d ago", secs / 86_400)
}

/// Generate `count` cards numbered from `first_seq`.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R, first_seq: u64, count: usize) -> Vec<TopicCard> {
    (0..count as u64)
        .filter_map(|i| {
            let template = TEMPLATES.choose(rng)?;
            Some(TopicCard::new(
                format!("{} #{}", template.title, first_seq + i),
                format_age(rng.gen_range(0..MAX_AGE_SECS)),
                template.author.to_string(),
                rng.gen_range(0..=100),
                rng.gen_range(10..5_000),
                rng.gen_range(0..400),
                format_count(rng.gen_range(50..20_000)),
                template.heat,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_batch_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_batch(&mut rng, 1, 5).len(), 5);
        assert!(generate_batch(&mut rng, 1, 0).is_empty());
    }

    #[test]
    fn test_titles_carry_running_sequence() {
        let mut rng = StdRng::seed_from_u64(7);
        let cards = generate_batch(&mut rng, 11, 3);
        assert!(cards[0].title.ends_with(" #11"));
        assert!(cards[2].title.ends_with(" #13"));
    }

    #[test]
    fn test_same_seed_same_cards() {
        let a = generate_batch(&mut StdRng::seed_from_u64(42), 1, 5);
        let b = generate_batch(&mut StdRng::seed_from_u64(42), 1, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_author_and_heat_come_from_template() {
        let mut rng = StdRng::seed_from_u64(3);
        for card in generate_batch(&mut rng, 1, 20) {
            let template = TEMPLATES
                .iter()
                .find(|t| card.title.starts_with(t.title))
                .expect("card title should start with a template title");
            assert_eq!(card.author, template.author);
            assert_eq!(card.heat, template.heat);
        }
    }

    #[test]
    fn test_format_age_buckets() {
        assert_eq!(format_age(5), "just now");
        assert_eq!(format_age(125), "2m ago");
        assert_eq!(format_age(7_200), "2h ago");
        assert_eq!(format_age(3 * 86_400 + 10), "3d ago");
    }

    proptest! {
        #[test]
        fn prop_percentages_sum_to_100(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            for card in generate_batch(&mut rng, 1, 5) {
                prop_assert!(card.agree_percent() <= 100);
                prop_assert!(card.disagree_percent() <= 100);
                prop_assert_eq!(card.agree_percent() as u32 + card.disagree_percent() as u32, 100);
            }
        }
    }
}
