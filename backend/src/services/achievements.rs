//! Achievements service
//!
//! Reduces a user's entire history to lifetime totals, converts them to
//! the weighted achievement score, and classifies the score into a rank
//! with progress toward the next tier.

use crate::error::ApiError;
use crate::repositories::{FoodRepository, SleepRepository, StepsRepository, WorkoutRepository};
use rehealth_shared::rank::RankProgress;
use rehealth_shared::scoring::{achievement_score, LifetimeTotals};
use rehealth_shared::types::AchievementsResponse;
use sqlx::PgPool;
use uuid::Uuid;

/// Achievements service
pub struct AchievementService;

impl AchievementService {
    /// All-time totals for a user
    ///
    /// The four totals are independent aggregate queries; each degrades
    /// to zero on empty history.
    pub async fn lifetime_totals(pool: &PgPool, user_id: Uuid) -> Result<LifetimeTotals, ApiError> {
        let steps = StepsRepository::lifetime_total(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let sleep_hours = SleepRepository::lifetime_hours(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let weight_lifted_kg = WorkoutRepository::lifetime_volume_kg(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let calories = FoodRepository::lifetime_calories(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(LifetimeTotals {
            steps,
            sleep_hours,
            weight_lifted_kg,
            calories,
        })
    }

    /// Totals, score, rank, and progress for a user
    pub async fn summary(pool: &PgPool, user_id: Uuid) -> Result<AchievementsResponse, ApiError> {
        let totals = Self::lifetime_totals(pool, user_id).await?;
        Self::summarize(totals)
    }

    /// Pure reduction from totals to the achievements response
    fn summarize(totals: LifetimeTotals) -> Result<AchievementsResponse, ApiError> {
        let score = achievement_score(&totals)?;
        let progress = RankProgress::for_score(score);

        Ok(AchievementsResponse {
            total_steps: totals.steps,
            total_sleep_hours: totals.sleep_hours,
            total_weight_lifted_kg: totals.weight_lifted_kg,
            total_calories: totals.calories,
            score,
            rank: progress.rank.name().to_string(),
            next_rank: progress.next_rank.map(|r| r.name().to_string()),
            progress_percent: progress.percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_new_user_summary() {
        let response = AchievementService::summarize(LifetimeTotals::default()).unwrap();
        assert_eq!(response.score, 0);
        assert_eq!(response.rank, "Bronze Beginner");
        assert_eq!(response.next_rank.as_deref(), Some("Silver Strider"));
        assert_eq!(response.progress_percent, 0.0);
    }

    #[test]
    fn test_terminal_rank_has_no_next() {
        // Enough steps alone to clear the top tier:
        // raw = steps/10000 * 0.45, so 10000 points needs ~2.23B steps
        let totals = LifetimeTotals {
            steps: 3_000_000_000,
            ..Default::default()
        };
        let response = AchievementService::summarize(totals).unwrap();
        assert_eq!(response.rank, "#1 ReHealth User");
        assert_eq!(response.next_rank, None);
        assert_eq!(response.progress_percent, 100.0);
    }

    #[test]
    fn test_summary_reports_totals_verbatim() {
        let totals = LifetimeTotals {
            steps: 12_345,
            sleep_hours: 67.5,
            weight_lifted_kg: 890.0,
            calories: 4_321,
        };
        let response = AchievementService::summarize(totals).unwrap();
        assert_eq!(response.total_steps, 12_345);
        assert_eq!(response.total_sleep_hours, 67.5);
        assert_eq!(response.total_weight_lifted_kg, 890.0);
        assert_eq!(response.total_calories, 4_321);
    }
}
