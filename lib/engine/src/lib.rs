//! # herodex Engine
//!
//! The query layer of herodex. An [`Engine`] is the immutable context
//! object built once at startup from a loaded
//! [`Roster`](herodex_core::Roster); it owns the similarity index and
//! answers the three retrieval queries:
//!
//! - [`Engine::recommend_similar`] - nearest heroes in feature space
//! - [`Engine::recommend_by_lane`] - top heroes for a lane by win rate
//! - [`Engine::compare_heroes`] - side-by-side stat projection
//!
//! plus the aggregations consumed by chart renderers (pick-rate ranking,
//! role distribution, stat correlation).

pub mod analytics;
pub mod engine;
pub mod lane;

pub use analytics::{CorrelationMatrix, PickRateEntry, RoleCount};
pub use engine::{Engine, HeroComparison, HeroSummary};
pub use lane::Lane;
