//! Viewport-aware grouping of geo-located items into map clusters
//!
//! Items are projected to pixels at the current zoom and merged when they
//! would overlap on screen. Clusters map back to the item list through
//! [`cluster::SubsetView`]s, which are detached whenever the list or the
//! viewport changes.

pub mod cluster;
pub mod config;
pub mod error;

pub use config::GrouperConfig;
pub use error::{GroupError, Result};
