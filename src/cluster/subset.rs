//! Mapping clusters back to the item list
//!
//! A [`SubsetView`] is a sorted list of item-list indices stamped with the
//! generation of the [`ItemList`] it was built against. Each accepted list or
//! viewport change bumps the generation, which detaches every view handed out
//! by earlier passes: reads and writes through them fail with
//! [`GroupError::StaleView`] instead of touching misaligned positions.

use super::axis_index::AxisIndex;
use super::grouper::Cluster;
use super::point::{LatLng, PixelPoint};
use super::projection::Projector;
use crate::error::{GroupError, Result};

/// Backing item list with a generation stamp for issued views
#[derive(Debug, Clone, Default)]
pub struct ItemList<T> {
    items: Vec<T>,
    generation: u64,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swaps in a new snapshot, returning the previous one
    ///
    /// A snapshot of a different length detaches every view. Same-length
    /// snapshots keep views attached; whether they must be detached is
    /// decided by the caller through [`ItemList::invalidate_views`].
    pub fn replace(&mut self, items: Vec<T>) -> Vec<T> {
        if items.len() != self.items.len() {
            self.invalidate_views();
        }
        std::mem::replace(&mut self.items, items)
    }

    /// Detaches every view issued so far, returns the new generation
    pub fn invalidate_views(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn backing(&self, index: usize) -> &T {
        assert!(
            index < self.items.len(),
            "subset index {} beyond item list of {} (generation {})",
            index,
            self.items.len(),
            self.generation
        );
        &self.items[index]
    }

    fn backing_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.items.len(),
            "subset index {} beyond item list of {} (generation {})",
            index,
            self.items.len(),
            self.generation
        );
        &mut self.items[index]
    }
}

/// Order-preserving window onto the items behind one cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetView {
    indices: Vec<usize>,
    generation: u64,
}

impl SubsetView {
    /// Creates a view over `indices`, sorted ascending and deduplicated
    pub fn new<I>(indices: I, generation: u64) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self {
            indices,
            generation,
        }
    }

    /// Item-list indices, ascending
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current<T>(&self, list: &ItemList<T>) -> bool {
        self.generation == list.generation
    }

    fn check<T>(&self, list: &ItemList<T>) -> Result<()> {
        if self.is_current(list) {
            Ok(())
        } else {
            Err(GroupError::StaleView {
                captured: self.generation,
                current: list.generation,
            })
        }
    }

    /// Item-list index of the `position`-th item of the view
    pub fn source_index(&self, position: usize) -> Result<usize> {
        self.indices
            .get(position)
            .copied()
            .ok_or(GroupError::PositionOutOfRange {
                position,
                len: self.indices.len(),
            })
    }

    pub fn get<'a, T>(&self, list: &'a ItemList<T>, position: usize) -> Result<&'a T> {
        self.check(list)?;
        let index = self.source_index(position)?;
        Ok(list.backing(index))
    }

    /// All items of the view, in item-list order
    pub fn items<'a, T>(&self, list: &'a ItemList<T>) -> Result<Vec<&'a T>> {
        self.check(list)?;
        Ok(self.indices.iter().map(|&i| list.backing(i)).collect())
    }

    /// Writes `item` at the `position`-th slot of the view, returning the old item
    pub fn set<T>(&self, list: &mut ItemList<T>, position: usize, item: T) -> Result<T> {
        self.check(list)?;
        let index = self.source_index(position)?;
        Ok(std::mem::replace(list.backing_mut(index), item))
    }
}

/// What a click on a cluster's marker selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The marker stands for exactly one item
    Single(usize),
    /// The marker stands for several items, listed in item-list order
    Multiple(Vec<usize>),
}

/// Cluster as handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterGroup {
    /// Geographic center of the cluster
    pub center: LatLng,
    /// Pixel center at the zoom of the pass that produced it
    pub pixel: PixelPoint,
    /// Items behind the cluster
    pub view: SubsetView,
}

impl ClusterGroup {
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// A cluster of one item is usually drawn as a plain marker
    pub fn is_single(&self) -> bool {
        self.view.len() == 1
    }

    pub fn selection(&self) -> Selection {
        match self.view.indices() {
            [only] => Selection::Single(*only),
            indices => Selection::Multiple(indices.to_vec()),
        }
    }
}

/// Converts the clusters of a pass into renderer-facing groups
///
/// # Arguments
///
/// * `clusters` - Output of [`group_points`](super::grouper::group_points) for `index`
/// * `index` - Axis index the clusters were built from
/// * `projector` - Used to unproject pixel centers at `zoom`
/// * `zoom` - Zoom level of the pass
/// * `generation` - Generation stamped on the produced views
pub fn reconcile<P>(
    clusters: &[Cluster],
    index: &AxisIndex,
    projector: &P,
    zoom: i32,
    generation: u64,
) -> Vec<ClusterGroup>
where
    P: Projector + ?Sized,
{
    clusters
        .iter()
        .map(|cluster| {
            let pixel = cluster.center();
            ClusterGroup {
                center: projector.unproject(&pixel, zoom),
                pixel,
                view: SubsetView::new(
                    cluster
                        .members()
                        .iter()
                        .map(|&id| index.point(id).source_index),
                    generation,
                ),
            }
        })
        .collect()
}
