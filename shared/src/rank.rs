//! Achievement rank classification
//!
//! Maps an achievement score to one of eight ordered tiers and reports
//! progress toward the next tier.

use serde::{Deserialize, Serialize};

/// Score at which the terminal tier begins.
const TERMINAL_SCORE: u64 = 10_000;

/// Achievement tier, ascending order.
///
/// Each tier owns a half-open score interval `[lower, upper)` except the
/// terminal tier, which is `[10000, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    BronzeBeginner,
    SilverStrider,
    GoldenGrinder,
    PlatinumPro,
    DiamondElite,
    Athlete,
    Olympian,
    NumberOne,
}

impl Rank {
    /// All tiers, ascending.
    pub const ALL: [Rank; 8] = [
        Rank::BronzeBeginner,
        Rank::SilverStrider,
        Rank::GoldenGrinder,
        Rank::PlatinumPro,
        Rank::DiamondElite,
        Rank::Athlete,
        Rank::Olympian,
        Rank::NumberOne,
    ];

    /// Get the score interval for this tier; `None` upper = unbounded.
    pub fn range(&self) -> (u64, Option<u64>) {
        match self {
            Rank::BronzeBeginner => (0, Some(500)),
            Rank::SilverStrider => (500, Some(1_000)),
            Rank::GoldenGrinder => (1_000, Some(2_000)),
            Rank::PlatinumPro => (2_000, Some(3_500)),
            Rank::DiamondElite => (3_500, Some(5_000)),
            Rank::Athlete => (5_000, Some(7_500)),
            Rank::Olympian => (7_500, Some(TERMINAL_SCORE)),
            Rank::NumberOne => (TERMINAL_SCORE, None),
        }
    }

    /// Get the display name for this tier
    pub fn name(&self) -> &'static str {
        match self {
            Rank::BronzeBeginner => "Bronze Beginner",
            Rank::SilverStrider => "Silver Strider",
            Rank::GoldenGrinder => "Golden Grinder",
            Rank::PlatinumPro => "Platinum Pro",
            Rank::DiamondElite => "Diamond Elite",
            Rank::Athlete => "Athlete",
            Rank::Olympian => "Olympian",
            Rank::NumberOne => "#1 ReHealth User",
        }
    }

    /// Classify a score into its tier.
    pub fn for_score(score: u64) -> Rank {
        for rank in Rank::ALL {
            match rank.range() {
                (_, Some(upper)) if score < upper => return rank,
                (_, None) => return rank,
                _ => continue,
            }
        }
        // The terminal tier is unbounded, so the loop always returns.
        Rank::NumberOne
    }

    /// The tier after this one, if any.
    pub fn next(&self) -> Option<Rank> {
        let index = Rank::ALL.iter().position(|r| r == self)?;
        Rank::ALL.get(index + 1).copied()
    }
}

/// A score's tier plus progress toward the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    pub rank: Rank,
    pub next_rank: Option<Rank>,
    /// Percent of the current tier's interval covered, in [0, 100].
    /// Exactly 0.0 at the tier's lower bound; strictly below 100.0 inside
    /// a tier; 100.0 only at the terminal tier.
    pub percent: f64,
}

impl RankProgress {
    /// Compute tier and progress for a score.
    pub fn for_score(score: u64) -> RankProgress {
        let rank = Rank::for_score(score);
        match rank.range() {
            (_, None) => RankProgress {
                rank,
                next_rank: None,
                percent: 100.0,
            },
            (lower, Some(upper)) => RankProgress {
                rank,
                next_rank: rank.next(),
                percent: (score - lower) as f64 / (upper - lower) as f64 * 100.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Rank::BronzeBeginner)]
    #[case(499, Rank::BronzeBeginner)]
    #[case(500, Rank::SilverStrider)]
    #[case(999, Rank::SilverStrider)]
    #[case(1_000, Rank::GoldenGrinder)]
    #[case(2_000, Rank::PlatinumPro)]
    #[case(3_500, Rank::DiamondElite)]
    #[case(5_000, Rank::Athlete)]
    #[case(7_500, Rank::Olympian)]
    #[case(9_999, Rank::Olympian)]
    #[case(10_000, Rank::NumberOne)]
    #[case(1_000_000, Rank::NumberOne)]
    fn test_rank_boundaries(#[case] score: u64, #[case] expected: Rank) {
        assert_eq!(Rank::for_score(score), expected);
    }

    #[test]
    fn test_rank_names() {
        assert_eq!(Rank::BronzeBeginner.name(), "Bronze Beginner");
        assert_eq!(Rank::NumberOne.name(), "#1 ReHealth User");
    }

    #[test]
    fn test_progress_midway_through_bronze() {
        let progress = RankProgress::for_score(250);
        assert_eq!(progress.rank, Rank::BronzeBeginner);
        assert_eq!(progress.next_rank, Some(Rank::SilverStrider));
        assert_eq!(progress.percent, 50.0);
    }

    #[test]
    fn test_progress_zero_at_lower_bound() {
        let progress = RankProgress::for_score(500);
        assert_eq!(progress.rank, Rank::SilverStrider);
        assert_eq!(progress.percent, 0.0);
    }

    #[test]
    fn test_progress_terminal_tier() {
        for score in [10_000, 15_000] {
            let progress = RankProgress::for_score(score);
            assert_eq!(progress.rank, Rank::NumberOne);
            assert_eq!(progress.next_rank, None);
            assert_eq!(progress.percent, 100.0);
        }
    }

    #[test]
    fn test_tier_table_is_contiguous() {
        // Each tier's upper bound is the next tier's lower bound
        for pair in Rank::ALL.windows(2) {
            let (_, upper) = pair[0].range();
            let (next_lower, _) = pair[1].range();
            assert_eq!(upper, Some(next_lower));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: progress is in [0, 100) inside a non-terminal tier
        /// and monotone non-decreasing within the tier
        #[test]
        fn prop_progress_bounded_and_monotone(score in 0u64..10_000) {
            let progress = RankProgress::for_score(score);
            prop_assert!(progress.percent >= 0.0);
            prop_assert!(progress.percent < 100.0);
            prop_assert!(progress.next_rank.is_some());

            let later = RankProgress::for_score(score + 1);
            if later.rank == progress.rank {
                prop_assert!(later.percent >= progress.percent);
            }
        }

        /// Property: the classified tier's interval contains the score
        #[test]
        fn prop_score_within_classified_range(score in 0u64..100_000) {
            let rank = Rank::for_score(score);
            let (lower, upper) = rank.range();
            prop_assert!(score >= lower);
            if let Some(upper) = upper {
                prop_assert!(score < upper);
            }
        }
    }
}
