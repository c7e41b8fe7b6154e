//! # herodex Core
//!
//! Core library for the herodex recommendation engine.
//!
//! This crate provides the dataset layer everything else builds on:
//!
//! - [`HeroRecord`] - One normalized row of the hero dataset
//! - [`FeatureVector`] - A hero's stats as a fixed-order point in feature space
//! - [`Roster`] - The immutable in-memory dataset with lookup and filtering
//!
//! ## Example
//!
//! ```rust
//! use herodex_core::{HeroRecord, Roster};
//!
//! let roster = Roster::from_records(vec![
//!     HeroRecord::new("Layla", "Marksman", [2.0, 8.0, 4.0, 1.0, 0.51, 1.2]),
//!     HeroRecord::new("Franco", "Tank", [9.0, 5.0, 6.0, 4.0, 0.48, 0.7]),
//! ]);
//!
//! let hero = roster.find_by_name("LAYLA").unwrap();
//! assert_eq!(hero.role, "marksman");
//! ```

pub mod error;
pub mod record;
pub mod roster;
pub mod vector;

pub use error::{Error, Result};
pub use record::{normalize, HeroRecord};
pub use roster::Roster;
pub use vector::{FeatureVector, FEATURE_COLUMNS, FEATURE_DIM};
