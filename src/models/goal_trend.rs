// ABOUTME: Goal trend classification derived from current and goal body weight
// ABOUTME: GoalTrend enum with a single pure classifier and per-trend recommendation text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Direction the user's goal weight implies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalTrend {
    /// Goal weight is below current weight
    Lose,
    /// Goal weight is above current weight
    Gain,
    /// Goal weight is within tolerance of current weight, or unknown
    #[default]
    Maintain,
}

impl GoalTrend {
    /// Classify the trend from current and goal weight
    ///
    /// `LOSE` when `goal < current - tolerance`, `GAIN` when
    /// `goal > current + tolerance`, otherwise `MAINTAIN`. Non-finite inputs
    /// compare false on both sides and therefore classify as `MAINTAIN`.
    #[must_use]
    pub fn classify(current_weight_kg: f64, goal_weight_kg: f64, tolerance_kg: f64) -> Self {
        if goal_weight_kg < current_weight_kg - tolerance_kg {
            Self::Lose
        } else if goal_weight_kg > current_weight_kg + tolerance_kg {
            Self::Gain
        } else {
            Self::Maintain
        }
    }

    /// Classify the trend for an optional profile
    ///
    /// Requires both a finite positive current weight and a finite positive
    /// goal weight; anything less (including a missing profile) is `MAINTAIN`.
    #[must_use]
    pub fn from_profile(profile: Option<&UserProfile>, tolerance_kg: f64) -> Self {
        let Some(profile) = profile else {
            return Self::Maintain;
        };
        match (profile.usable_current_weight(), profile.usable_goal_weight()) {
            (Some(current), Some(goal)) => Self::classify(current, goal, tolerance_kg),
            _ => Self::Maintain,
        }
    }

    /// Trend-specific sentence appended to the recommendation
    #[must_use]
    pub const fn recommendation_clause(self) -> &'static str {
        match self {
            Self::Lose => {
                "Protein is elevated to help preserve lean mass while in a calorie deficit."
            }
            Self::Gain => "Extra carbs and fats support a calorie surplus for muscle gain.",
            Self::Maintain => "Balanced ratios support keeping your current weight steady.",
        }
    }

    /// All trends in declaration order
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Lose, Self::Gain, Self::Maintain]
    }
}

impl Display for GoalTrend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Gain => write!(f, "gain"),
            Self::Maintain => write!(f, "maintain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_respects_tolerance() {
        assert_eq!(GoalTrend::classify(80.0, 70.0, 0.1), GoalTrend::Lose);
        assert_eq!(GoalTrend::classify(70.0, 80.0, 0.1), GoalTrend::Gain);
        assert_eq!(GoalTrend::classify(80.0, 80.05, 0.1), GoalTrend::Maintain);
        assert_eq!(GoalTrend::classify(80.0, 79.95, 0.1), GoalTrend::Maintain);
    }

    #[test]
    fn test_classify_nan_is_maintain() {
        assert_eq!(GoalTrend::classify(80.0, f64::NAN, 0.1), GoalTrend::Maintain);
    }

    #[test]
    fn test_from_profile_requires_both_weights() {
        assert_eq!(GoalTrend::from_profile(None, 0.1), GoalTrend::Maintain);

        let only_goal = UserProfile::default().with_goal_weight(60.0);
        assert_eq!(
            GoalTrend::from_profile(Some(&only_goal), 0.1),
            GoalTrend::Maintain
        );

        let zero_current = UserProfile::default()
            .with_current_weight(0.0)
            .with_goal_weight(60.0);
        assert_eq!(
            GoalTrend::from_profile(Some(&zero_current), 0.1),
            GoalTrend::Maintain
        );

        let infinite_current = UserProfile::default()
            .with_current_weight(f64::INFINITY)
            .with_goal_weight(70.0);
        assert_eq!(
            GoalTrend::from_profile(Some(&infinite_current), 0.1),
            GoalTrend::Maintain
        );

        let losing = UserProfile::default()
            .with_current_weight(90.0)
            .with_goal_weight(80.0);
        assert_eq!(GoalTrend::from_profile(Some(&losing), 0.1), GoalTrend::Lose);
    }

    #[test]
    fn test_clauses_are_distinct() {
        let [lose, gain, maintain] = GoalTrend::all().map(GoalTrend::recommendation_clause);
        assert_ne!(lose, gain);
        assert_ne!(gain, maintain);
        assert_ne!(lose, maintain);
    }
}
