use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use herodex_core::{normalize, Error, FeatureVector, Result, Roster};

/// Visible neighbors per query. An index needs `DEFAULT_NEIGHBORS + 1`
/// records before a query can be satisfied, since the query hero itself
/// never appears in its own result.
pub const DEFAULT_NEIGHBORS: usize = 5;

/// One entry of a nearest-neighbor result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Neighbor {
    /// Source row index in the roster the index was built from.
    pub row: usize,
    pub name: String,
    pub distance: f64,
}

/// Exact nearest-neighbor index over the hero feature space.
///
/// Holds one [`FeatureVector`] per hero in roster row order, paired with
/// the hero's name. Queries are a brute-force O(n·d) scan over Euclidean
/// distance - exact by design, never an approximate structure, so results
/// are deterministic and equal distances keep the source row order.
///
/// Built once from a [`Roster`] at startup; immutable afterwards.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    names: Vec<String>,
    vectors: Vec<FeatureVector>,
    by_name: AHashMap<String, usize>,
}

impl SimilarityIndex {
    /// Build the index from a roster.
    ///
    /// Fails with [`Error::EmptyDataset`] on a zero-record roster and
    /// with [`Error::InsufficientData`] when there are too few heroes to
    /// answer a default-size query.
    pub fn build(roster: &Roster) -> Result<SimilarityIndex> {
        if roster.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if roster.len() < DEFAULT_NEIGHBORS + 1 {
            return Err(Error::InsufficientData {
                required: DEFAULT_NEIGHBORS + 1,
                actual: roster.len(),
            });
        }

        let mut names = Vec::with_capacity(roster.len());
        let mut vectors = Vec::with_capacity(roster.len());
        let mut by_name = AHashMap::with_capacity(roster.len());

        for (row, record) in roster.all().iter().enumerate() {
            names.push(record.name.clone());
            vectors.push(record.features());
            by_name.insert(record.name.clone(), row);
        }

        Ok(SimilarityIndex {
            names,
            vectors,
            by_name,
        })
    }

    /// The `k` heroes closest to `name` in feature space, ascending by
    /// Euclidean distance. The query hero is excluded from the scan, not
    /// merely ranked last. Equal distances keep source row order (stable
    /// sort), so repeated calls return identical output.
    ///
    /// Returns `min(k, n - 1)` entries; fails with [`Error::HeroNotFound`]
    /// if the normalized name is absent.
    pub fn nearest(&self, name: &str, k: usize) -> Result<Vec<Neighbor>> {
        let query_row = self
            .by_name
            .get(&normalize(name))
            .copied()
            .ok_or_else(|| Error::HeroNotFound(normalize(name)))?;
        let query = &self.vectors[query_row];

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(row, _)| *row != query_row)
            .map(|(row, vector)| Neighbor {
                row,
                name: self.names[row].clone(),
                distance: query.l2_distance(vector),
            })
            .collect();

        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);
        Ok(neighbors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herodex_core::HeroRecord;

    fn hero(name: &str, stats: [f64; 6]) -> HeroRecord {
        HeroRecord::new(name, "fighter", stats)
    }

    fn sample_roster() -> Roster {
        Roster::from_records(vec![
            hero("a", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("b", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("c", [2.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("d", [3.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("e", [4.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("f", [5.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ])
    }

    #[test]
    fn test_build_rejects_empty_roster() {
        let roster = Roster::from_records(vec![]);
        assert!(matches!(
            SimilarityIndex::build(&roster),
            Err(Error::EmptyDataset)
        ));
    }

    #[test]
    fn test_build_rejects_too_few_records() {
        let roster = Roster::from_records(vec![
            hero("a", [0.0; 6]),
            hero("b", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let err = SimilarityIndex::build(&roster).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData {
                required: 6,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_nearest_excludes_self_and_sorts_ascending() {
        let index = SimilarityIndex::build(&sample_roster()).unwrap();
        let neighbors = index.nearest("c", 5).unwrap();

        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|n| n.name != "c"));
        for pair in neighbors.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_nearest_tie_break_keeps_row_order() {
        // b and d are both at distance 1 from c; b comes first in the
        // dataset, so it must come first in the result.
        let index = SimilarityIndex::build(&sample_roster()).unwrap();
        let neighbors = index.nearest("c", 2).unwrap();
        let names: Vec<&str> = neighbors.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["b", "d"]);
    }

    #[test]
    fn test_nearest_is_deterministic() {
        let index = SimilarityIndex::build(&sample_roster()).unwrap();
        let first = index.nearest("a", 5).unwrap();
        let second = index.nearest("a", 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nearest_caps_at_dataset_size() {
        let index = SimilarityIndex::build(&sample_roster()).unwrap();
        let neighbors = index.nearest("a", 50).unwrap();
        assert_eq!(neighbors.len(), 5); // n - 1
    }

    #[test]
    fn test_nearest_normalizes_query_name() {
        let index = SimilarityIndex::build(&sample_roster()).unwrap();
        assert!(index.nearest("  A ", 3).is_ok());
        assert!(matches!(
            index.nearest("ghost", 3),
            Err(Error::HeroNotFound(_))
        ));
    }

    #[test]
    fn test_distance_uses_all_features() {
        let roster = Roster::from_records(vec![
            hero("q", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("near", [0.1, 0.1, 0.1, 0.1, 0.1, 0.1]),
            hero("far", [9.0, 9.0, 9.0, 9.0, 9.0, 9.0]),
            hero("x", [5.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            hero("y", [0.0, 5.0, 0.0, 0.0, 0.0, 0.0]),
            hero("z", [0.0, 0.0, 0.0, 0.0, 0.0, 5.0]),
        ]);
        let index = SimilarityIndex::build(&roster).unwrap();
        let neighbors = index.nearest("q", 1).unwrap();
        assert_eq!(neighbors[0].name, "near");
    }
}
