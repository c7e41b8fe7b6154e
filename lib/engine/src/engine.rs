use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use herodex_core::{normalize, HeroRecord, Result, Roster};
use herodex_similarity::{SimilarityIndex, DEFAULT_NEIGHBORS};

use crate::lane::Lane;

/// Display projection used by the recommendation queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroSummary {
    pub name: String,
    pub role: String,
    pub win_rate: f64,
    pub pick_rate: f64,
}

impl From<&HeroRecord> for HeroSummary {
    fn from(record: &HeroRecord) -> Self {
        Self {
            name: record.name.clone(),
            role: record.role.clone(),
            win_rate: record.win_rate,
            pick_rate: record.pick_rate,
        }
    }
}

/// Full-stat projection for side-by-side hero comparison, shaped for a
/// grouped-bar rendering collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroComparison {
    pub name: String,
    pub win_rate: f64,
    pub pick_rate: f64,
    pub offense_overall: f64,
    pub defense_overall: f64,
    pub skill_effect_overall: f64,
    pub difficulty_overall: f64,
}

impl From<&HeroRecord> for HeroComparison {
    fn from(record: &HeroRecord) -> Self {
        Self {
            name: record.name.clone(),
            win_rate: record.win_rate,
            pick_rate: record.pick_rate,
            offense_overall: record.offense_overall,
            defense_overall: record.defense_overall,
            skill_effect_overall: record.skill_effect_overall,
            difficulty_overall: record.difficulty_overall,
        }
    }
}

/// The recommendation engine: roster plus similarity index, built once at
/// startup and immutable for the process lifetime.
///
/// All queries are pure reads, so an `Engine` can be shared across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct Engine {
    roster: Roster,
    index: SimilarityIndex,
}

impl Engine {
    /// Build the engine from a loaded roster. Fails when the roster is
    /// too small to answer neighbor queries.
    pub fn new(roster: Roster) -> Result<Engine> {
        let index = SimilarityIndex::build(&roster)?;
        info!(heroes = roster.len(), "similarity index built");
        Ok(Engine { roster, index })
    }

    /// The heroes most similar to `name` in feature space, in neighbor
    /// order. A miss is a recoverable [`HeroNotFound`] error, surfaced to
    /// the user as a structured result rather than a failure.
    ///
    /// [`HeroNotFound`]: herodex_core::Error::HeroNotFound
    pub fn recommend_similar(&self, name: &str) -> Result<Vec<HeroSummary>> {
        let neighbors = self.index.nearest(name, DEFAULT_NEIGHBORS)?;
        debug!(hero = %normalize(name), count = neighbors.len(), "similar heroes");
        Ok(neighbors
            .iter()
            .map(|n| HeroSummary::from(&self.roster.all()[n.row]))
            .collect())
    }

    /// Top heroes for a lane: roster filtered to the lane's roles, stable
    /// sorted by descending win rate (ties keep dataset row order),
    /// truncated to five. An unknown lane is a recoverable
    /// [`InvalidLane`] error.
    ///
    /// [`InvalidLane`]: herodex_core::Error::InvalidLane
    pub fn recommend_by_lane(&self, lane: &str) -> Result<Vec<HeroSummary>> {
        let lane: Lane = lane.parse()?;
        let mut picks = self.roster.filter_by_roles(lane.roles());
        picks.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));
        picks.truncate(DEFAULT_NEIGHBORS);
        debug!(%lane, count = picks.len(), "lane recommendation");
        Ok(picks.into_iter().map(HeroSummary::from).collect())
    }

    /// Records for the named heroes, in request order, one row per hero.
    /// Names that match nothing are silently dropped rather than
    /// reported; callers that care must diff the result against their
    /// input.
    #[must_use]
    pub fn compare_heroes<S: AsRef<str>>(&self, names: &[S]) -> Vec<HeroComparison> {
        let mut seen: Vec<&str> = Vec::with_capacity(names.len());
        let mut rows = Vec::with_capacity(names.len());
        for name in names {
            if let Some(record) = self.roster.get(name.as_ref()) {
                if !seen.contains(&record.name.as_str()) {
                    seen.push(&record.name);
                    rows.push(HeroComparison::from(record));
                }
            }
        }
        rows
    }

    /// The underlying dataset, for collaborators that project or count
    /// over the full roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
