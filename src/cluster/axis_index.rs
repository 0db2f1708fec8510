//! Axis orderings of the points visible in one pass

use super::point::{GroupPoint, LatLng, PixelPoint};
use super::projection::Projector;

/// One of the two pixel-space axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Coordinate of `p` along this axis
    pub fn of(self, p: &PixelPoint) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Points of a pass together with their x-sorted and y-sorted orderings
///
/// Points are stored once, in item-list order. The orderings hold indices
/// into that storage (point ids), and every point records its rank in both.
#[derive(Debug, Clone, Default)]
pub struct AxisIndex {
    points: Vec<GroupPoint>,
    by_x: Vec<usize>,
    by_y: Vec<usize>,
}

impl AxisIndex {
    /// Builds the index from already projected points
    ///
    /// # Arguments
    ///
    /// * `pixels` - `(source_index, pixel)` pairs; the order given is the
    ///   tie-break order for equal coordinates
    pub fn from_pixels<I>(pixels: I) -> AxisIndex
    where
        I: IntoIterator<Item = (usize, PixelPoint)>,
    {
        let mut points: Vec<GroupPoint> = pixels
            .into_iter()
            .map(|(source_index, pixel)| GroupPoint {
                pixel,
                source_index,
                x_rank: 0,
                y_rank: 0,
            })
            .collect();

        let by_x = sorted_ids(&points, Axis::X);
        let by_y = sorted_ids(&points, Axis::Y);

        for (rank, &id) in by_x.iter().enumerate() {
            points[id].x_rank = rank;
        }
        for (rank, &id) in by_y.iter().enumerate() {
            points[id].y_rank = rank;
        }

        AxisIndex { points, by_x, by_y }
    }

    /// Builds the index from the item list as seen through the current viewport
    ///
    /// Items without a coordinate, outside the visible bounds, or whose
    /// projection fails are skipped.
    pub fn from_items<T, F, P>(items: &[T], extractor: F, projector: &P) -> AxisIndex
    where
        F: Fn(&T) -> Option<LatLng>,
        P: Projector + ?Sized,
    {
        let bounds = projector.current_bounds();
        let zoom = projector.current_zoom();

        Self::from_pixels(items.iter().enumerate().filter_map(|(i, item)| {
            let ll = extractor(item)?;
            if !bounds.contains(&ll) {
                return None;
            }
            projector.project(&ll, zoom).map(|pixel| (i, pixel))
        }))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, id: usize) -> &GroupPoint {
        &self.points[id]
    }

    pub fn points(&self) -> &[GroupPoint] {
        &self.points
    }

    /// Point ids sorted ascending along `axis`
    pub fn order(&self, axis: Axis) -> &[usize] {
        match axis {
            Axis::X => &self.by_x,
            Axis::Y => &self.by_y,
        }
    }

    /// Rank of point `id` in the ordering along `axis`
    pub fn rank(&self, id: usize, axis: Axis) -> usize {
        match axis {
            Axis::X => self.points[id].x_rank,
            Axis::Y => self.points[id].y_rank,
        }
    }
}

/// Stable sort of point ids by one coordinate
fn sorted_ids(points: &[GroupPoint], axis: Axis) -> Vec<usize> {
    let mut ids: Vec<usize> = (0..points.len()).collect();
    ids.sort_by(|&a, &b| axis.of(&points[a].pixel).total_cmp(&axis.of(&points[b].pixel)));
    ids
}
