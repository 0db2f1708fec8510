//! Package cluster groups geo-located items into non-overlapping map clusters
//!
//! A pass projects the visible items to pixels, sorts them along both axes,
//! then grows clusters greedily from the leftmost unvisited point.
pub mod axis_index;
pub mod colocated;
pub mod engine;
pub mod grouper;
pub mod point;
pub mod projection;
pub mod proximity;
pub mod scheduler;
pub mod subset;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod axis_index_test;
#[cfg(test)]
mod subset_test;

pub use axis_index::{Axis, AxisIndex};
pub use colocated::{Colocated, MarkerDiff, PositionKey, group_by_position};
pub use engine::{GeoGrouper, compute_groups};
pub use grouper::{Cluster, group_points};
pub use point::{BoundingBox, GroupPoint, LatLng, PixelPoint};
pub use projection::{MapView, Projector, WebMercator};
pub use proximity::{absorb_neighbours, adaptive_radius};
pub use scheduler::{RecomputeScheduler, TimerQueue, same_geometry};
pub use subset::{ClusterGroup, ItemList, Selection, SubsetView, reconcile};
