//! # herodex
//!
//! A hero similarity and recommendation engine over a static dataset.
//!
//! herodex loads a flat CSV of hero stats once per process, builds a
//! 6-dimensional feature vector per hero, and answers three kinds of
//! read-only queries: nearest heroes in feature space, top heroes per
//! lane, and side-by-side stat comparison.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! herodex --dataset heroes.csv similar layla
//! herodex --dataset heroes.csv lane gold
//! herodex --dataset heroes.csv compare layla franco eudora
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use herodex::prelude::*;
//!
//! let roster = Roster::load("heroes.csv")?;
//! let engine = Engine::new(roster)?;
//!
//! let similar = engine.recommend_similar("layla")?;
//! let gold_picks = engine.recommend_by_lane("gold")?;
//! # Ok::<(), herodex::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! herodex is composed of several crates:
//!
//! - `herodex-core` - Hero records, feature vectors, the dataset roster
//! - `herodex-similarity` - Exact Euclidean k-nearest-neighbor index
//! - `herodex-engine` - Query layer and chart-feeding aggregations
//!
//! ## Guarantees
//!
//! - **Exact search**: brute-force Euclidean scan, never approximate
//! - **Deterministic**: equal distances keep dataset row order
//! - **Immutable**: roster and index are built once and never mutated,
//!   so queries are lock-free and thread-safe

// Re-export core types
pub use herodex_core::{
    normalize, Error, FeatureVector, HeroRecord, Result, Roster, FEATURE_COLUMNS, FEATURE_DIM,
};

// Re-export the similarity index
pub use herodex_similarity::{Neighbor, SimilarityIndex, DEFAULT_NEIGHBORS};

// Re-export the query layer
pub use herodex_engine::{
    CorrelationMatrix, Engine, HeroComparison, HeroSummary, Lane, PickRateEntry, RoleCount,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Engine, Error, FeatureVector, HeroComparison, HeroRecord, HeroSummary, Lane, Neighbor,
        Result, Roster, SimilarityIndex,
    };
}
