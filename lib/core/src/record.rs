use serde::{Deserialize, Serialize};

use crate::vector::FeatureVector;

/// One row of the hero dataset.
///
/// `name` and `role` are stored normalized (trimmed, lowercased) so
/// lookups are case-insensitive. The six stat fields are the hero's
/// feature columns, in the order declared by
/// [`FEATURE_COLUMNS`](crate::FEATURE_COLUMNS).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroRecord {
    pub name: String,
    pub role: String,
    pub defense_overall: f64,
    pub offense_overall: f64,
    pub skill_effect_overall: f64,
    pub difficulty_overall: f64,
    pub win_rate: f64,
    pub pick_rate: f64,
}

impl HeroRecord {
    /// Create a record, normalizing `name` and `role`.
    #[must_use]
    pub fn new(name: &str, role: &str, stats: [f64; 6]) -> Self {
        let [defense_overall, offense_overall, skill_effect_overall, difficulty_overall, win_rate, pick_rate] =
            stats;
        Self {
            name: normalize(name),
            role: normalize(role),
            defense_overall,
            offense_overall,
            skill_effect_overall,
            difficulty_overall,
            win_rate,
            pick_rate,
        }
    }

    /// Project the record onto feature space, in fixed column order.
    #[inline]
    #[must_use]
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new([
            self.defense_overall,
            self.offense_overall,
            self.skill_effect_overall,
            self.difficulty_overall,
            self.win_rate,
            self.pick_rate,
        ])
    }
}

/// Normalize a name or role for case-insensitive matching.
#[inline]
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
