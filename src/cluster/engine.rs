use std::time::Instant;

use tracing::debug;

use super::axis_index::AxisIndex;
use super::grouper::group_points;
use super::point::LatLng;
use super::projection::Projector;
use super::scheduler::{RecomputeScheduler, same_geometry};
use super::subset::{ClusterGroup, ItemList, SubsetView, reconcile};
use crate::config::GrouperConfig;
use crate::error::Result;

/// Runs one full grouping pass over `items` as seen through `projector`
///
/// # Arguments
///
/// * `items` - Item list snapshot
/// * `extractor` - Returns an item's coordinate, if it has one
/// * `projector` - Viewport: bounds, zoom and projection
/// * `epsilon` - Base clustering radius in pixels
/// * `generation` - Generation stamped on the returned views
pub fn compute_groups<T, F, P>(
    items: &[T],
    extractor: F,
    projector: &P,
    epsilon: f64,
    generation: u64,
) -> Vec<ClusterGroup>
where
    F: Fn(&T) -> Option<LatLng>,
    P: Projector + ?Sized,
{
    let started = Instant::now();
    let zoom = projector.current_zoom();

    let index = AxisIndex::from_items(items, extractor, projector);
    let clusters = group_points(&index, epsilon);
    let groups = reconcile(&clusters, &index, projector, zoom, generation);

    debug!(
        items = items.len(),
        visible = index.len(),
        clusters = groups.len(),
        zoom,
        epsilon,
        elapsed = ?started.elapsed(),
        "grouping pass done"
    );

    groups
}

/// Keeps the clusters of an item list up to date with list and viewport changes
///
/// Changes are only recorded when they happen; the pass itself runs from
/// [`GeoGrouper::poll`] once the debounce delay has elapsed. Every accepted
/// change detaches the views issued by the previous pass.
pub struct GeoGrouper<T, P, F> {
    list: ItemList<T>,
    projector: P,
    extractor: F,
    config: GrouperConfig,
    scheduler: RecomputeScheduler,
    groups: Vec<ClusterGroup>,
    passes: u64,
}

impl<T, P, F> GeoGrouper<T, P, F>
where
    P: Projector,
    F: Fn(&T) -> Option<LatLng>,
{
    pub fn new(items: Vec<T>, projector: P, extractor: F, config: GrouperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            list: ItemList::new(items),
            projector,
            extractor,
            scheduler: RecomputeScheduler::new(config.debounce),
            config,
            groups: Vec::new(),
            passes: 0,
        })
    }

    pub fn list(&self) -> &ItemList<T> {
        &self.list
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Mutable access to the viewport; follow up with [`GeoGrouper::viewport_changed`]
    pub fn projector_mut(&mut self) -> &mut P {
        &mut self.projector
    }

    pub fn config(&self) -> &GrouperConfig {
        &self.config
    }

    /// Clusters of the latest pass
    pub fn groups(&self) -> &[ClusterGroup] {
        &self.groups
    }

    /// Number of passes run so far
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn is_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// When the pending recompute becomes due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.deadline()
    }

    /// Replaces the item list
    ///
    /// Returns `true` if the change affects clustering, in which case views are
    /// detached and a recompute scheduled.
    pub fn set_items(&mut self, items: Vec<T>, now: Instant) -> bool {
        let old = self.list.replace(items);
        let accepted = self
            .scheduler
            .list_changed(&old, self.list.items(), &self.extractor, now);
        if accepted {
            self.list.invalidate_views();
        }
        accepted
    }

    /// Records a pan or zoom of the viewport
    pub fn viewport_changed(&mut self, now: Instant) {
        self.list.invalidate_views();
        self.scheduler.viewport_changed(now);
    }

    /// Writes `item` through `view` at `position`
    ///
    /// The write is handled as a list change: if the item moved (or gained
    /// a coordinate), views are detached and a recompute is scheduled.
    ///
    /// # Returns
    ///
    /// Whether a recompute was scheduled
    pub fn update_through(
        &mut self,
        view: &SubsetView,
        position: usize,
        item: T,
        now: Instant,
    ) -> Result<bool> {
        let index = view.source_index(position)?;
        let old = view.set(&mut self.list, position, item)?;

        let moved = !same_geometry(
            std::slice::from_ref(&old),
            std::slice::from_ref(&self.list.items()[index]),
            &self.extractor,
        );
        if moved {
            self.list.invalidate_views();
            self.scheduler.trigger(now);
        }
        Ok(moved)
    }

    /// Items behind a view of the latest pass
    pub fn view_items(&self, view: &SubsetView) -> Result<Vec<&T>> {
        view.items(&self.list)
    }

    /// Runs the pending recompute if its delay has run out
    ///
    /// Returns whether a pass ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }
        self.recompute();
        true
    }

    /// Runs a pass right away
    pub fn recompute(&mut self) -> &[ClusterGroup] {
        let generation = self.list.invalidate_views();
        self.groups = compute_groups(
            self.list.items(),
            &self.extractor,
            &self.projector,
            self.config.epsilon,
            generation,
        );
        self.passes += 1;
        &self.groups
    }

    /// Detaches all views and drops any pending recompute
    pub fn detach(&mut self) {
        self.list.invalidate_views();
        self.scheduler.cancel();
        self.groups.clear();
    }
}
