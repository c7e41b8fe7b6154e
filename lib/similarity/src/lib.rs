//! # herodex Similarity
//!
//! Nearest-neighbor retrieval over the hero feature space.
//!
//! [`SimilarityIndex`] is built once from a
//! [`Roster`](herodex_core::Roster) and answers k-nearest-neighbor
//! queries with exact Euclidean distances. Features contribute in their
//! native units and scales; standardizing them would change results.

pub mod index;

pub use index::{Neighbor, SimilarityIndex, DEFAULT_NEIGHBORS};
