use bitvec::prelude::*;

use super::axis_index::{Axis, AxisIndex};
use super::point::PixelPoint;
use super::proximity::absorb_neighbours;

/// Cluster produced by one grouping pass
///
/// The center is the running mean of the absorbed points, updated in O(1)
/// as each point joins. It is only exposed read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    center: PixelPoint,
    /// Point ids (into the pass's [`AxisIndex`]) in absorption order
    members: Vec<usize>,
}

impl Cluster {
    /// Starts a cluster holding a single point
    pub fn seed(id: usize, pixel: &PixelPoint) -> Cluster {
        Cluster {
            center: *pixel,
            members: vec![id],
        }
    }

    pub fn center(&self) -> PixelPoint {
        self.center
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn absorb(&mut self, id: usize, pixel: &PixelPoint) {
        let n = self.members.len() as f64;
        self.center.x = (self.center.x * n + pixel.x) / (n + 1.0);
        self.center.y = (self.center.y * n + pixel.y) / (n + 1.0);
        self.members.push(id);
    }
}

/// Groups the points of `index` into clusters
///
/// Seeds are taken in ascending x order; each seed is expanded by querying
/// around every member, including members that joined during expansion, so
/// chains of close points end up in one cluster.
///
/// # Arguments
///
/// * `index` - Axis orderings of the current pass
/// * `epsilon` - Base clustering radius in pixels
///
/// # Returns
///
/// Clusters ordered by the x coordinate of their seed point. Every point of
/// `index` belongs to exactly one of them.
pub fn group_points(index: &AxisIndex, epsilon: f64) -> Vec<Cluster> {
    let mut visited = bitvec![0; index.len()];
    let mut clusters = Vec::new();

    for &seed in index.order(Axis::X) {
        if visited[seed] {
            continue;
        }
        visited.set(seed, true);

        let mut cluster = Cluster::seed(seed, &index.point(seed).pixel);
        // members grows while we iterate
        let mut i = 0;
        while i < cluster.len() {
            let id = cluster.members[i];
            absorb_neighbours(index, &mut visited, id, &mut cluster, epsilon);
            i += 1;
        }

        clusters.push(cluster);
    }

    clusters
}
