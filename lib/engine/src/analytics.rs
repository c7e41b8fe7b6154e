//! Aggregations that feed the chart-rendering collaborators: pick-rate
//! ranking, role distribution, and stat correlation. Plain projections
//! and counts over the roster; rendering happens elsewhere.

use serde::{Deserialize, Serialize};

use herodex_core::{FEATURE_COLUMNS, FEATURE_DIM};

use crate::engine::Engine;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickRateEntry {
    pub name: String,
    pub pick_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

/// Pairwise Pearson correlation of the feature columns. `values[i][j]`
/// correlates `columns[i]` with `columns[j]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Engine {
    /// Heroes ranked by descending pick rate, ties in dataset row order.
    #[must_use]
    pub fn top_pick_rates(&self, limit: usize) -> Vec<PickRateEntry> {
        let mut heroes: Vec<&_> = self.roster().all().iter().collect();
        heroes.sort_by(|a, b| b.pick_rate.total_cmp(&a.pick_rate));
        heroes.truncate(limit);
        heroes
            .into_iter()
            .map(|h| PickRateEntry {
                name: h.name.clone(),
                pick_rate: h.pick_rate,
            })
            .collect()
    }

    /// Hero count per role, descending by count; equal counts keep the
    /// order in which the role first appears in the dataset.
    #[must_use]
    pub fn role_distribution(&self) -> Vec<RoleCount> {
        let mut counts: Vec<RoleCount> = Vec::new();
        for record in self.roster().all() {
            match counts.iter_mut().find(|c| c.role == record.role) {
                Some(entry) => entry.count += 1,
                None => counts.push(RoleCount {
                    role: record.role.clone(),
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Pearson correlation matrix of the six feature columns. A constant
    /// column correlates 0.0 with everything except itself.
    #[must_use]
    pub fn stat_correlation(&self) -> CorrelationMatrix {
        let records = self.roster().all();
        let n = records.len() as f64;

        // Column-major copy of the feature table.
        let mut table = vec![Vec::with_capacity(records.len()); FEATURE_DIM];
        for record in records {
            for (column, value) in table.iter_mut().zip(record.features().as_slice()) {
                column.push(*value);
            }
        }

        let means: Vec<f64> = table.iter().map(|c| c.iter().sum::<f64>() / n).collect();
        let stddevs: Vec<f64> = table
            .iter()
            .zip(&means)
            .map(|(c, m)| (c.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / n).sqrt())
            .collect();

        let mut values = vec![vec![0.0f64; FEATURE_DIM]; FEATURE_DIM];
        for i in 0..FEATURE_DIM {
            for j in 0..FEATURE_DIM {
                if i == j {
                    values[i][j] = 1.0;
                    continue;
                }
                let denom = stddevs[i] * stddevs[j];
                if denom == 0.0 {
                    continue;
                }
                let cov = table[i]
                    .iter()
                    .zip(&table[j])
                    .map(|(a, b)| (a - means[i]) * (b - means[j]))
                    .sum::<f64>()
                    / n;
                values[i][j] = cov / denom;
            }
        }

        CorrelationMatrix {
            columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herodex_core::{HeroRecord, Roster};

    fn sample_engine() -> Engine {
        let roster = Roster::from_records(vec![
            HeroRecord::new("a", "marksman", [1.0, 6.0, 0.0, 0.0, 0.50, 0.9]),
            HeroRecord::new("b", "marksman", [2.0, 5.0, 0.0, 0.0, 0.51, 0.7]),
            HeroRecord::new("c", "tank", [3.0, 4.0, 0.0, 0.0, 0.52, 0.5]),
            HeroRecord::new("d", "tank", [4.0, 3.0, 0.0, 0.0, 0.53, 0.3]),
            HeroRecord::new("e", "tank", [5.0, 2.0, 0.0, 0.0, 0.54, 0.1]),
            HeroRecord::new("f", "mage", [6.0, 1.0, 0.0, 0.0, 0.55, 0.2]),
        ]);
        Engine::new(roster).unwrap()
    }

    #[test]
    fn test_top_pick_rates_descending() {
        let engine = sample_engine();
        let top = engine.top_pick_rates(3);
        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_role_distribution_counts() {
        let engine = sample_engine();
        let roles = engine.role_distribution();
        assert_eq!(roles[0].role, "tank");
        assert_eq!(roles[0].count, 3);
        assert_eq!(roles[1].role, "marksman");
        assert_eq!(roles[1].count, 2);
        assert_eq!(roles[2].role, "mage");
        assert_eq!(roles[2].count, 1);
    }

    #[test]
    fn test_correlation_diagonal_and_symmetry() {
        let engine = sample_engine();
        let matrix = engine.stat_correlation();
        assert_eq!(matrix.columns.len(), FEATURE_DIM);
        for i in 0..FEATURE_DIM {
            assert_eq!(matrix.values[i][i], 1.0);
            for j in 0..FEATURE_DIM {
                assert!((matrix.values[i][j] - matrix.values[j][i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_correlation_perfect_inverse_and_constant() {
        let engine = sample_engine();
        let matrix = engine.stat_correlation();
        // defense_overall and offense_overall move in exact opposition.
        assert!((matrix.values[0][1] + 1.0).abs() < 1e-9);
        // skill_effect_overall is constant, so it correlates with nothing.
        assert_eq!(matrix.values[2][0], 0.0);
        assert_eq!(matrix.values[2][2], 1.0);
    }
}
