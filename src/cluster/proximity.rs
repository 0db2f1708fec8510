use bitvec::prelude::*;

use super::axis_index::{Axis, AxisIndex};
use super::grouper::Cluster;

// For a point already in `cluster`, walk both orderings outward from its rank:
//
// query(P, C, epsilon)
//    for each axis A in (x, y), for each direction D in (forward, backward)
//       for each point Q after P along A in direction D
//          if Q is visited: continue
//          if |Q.A - C.A| > epsilon: stop walking in D
//          eps = epsilon + 4 * log2(|C|)
//          if dist(Q, C)^2 <= eps^2
//             move C's center to the mean including Q, add Q to C, mark Q visited
//
// The stop test uses the base epsilon and the cluster center as it is at the
// moment Q is looked at; the acceptance test uses the adaptive radius.

/// Radius within which a candidate joins a cluster of `size` points
pub fn adaptive_radius(epsilon: f64, size: usize) -> f64 {
    epsilon + 4.0 * (size as f64).log2()
}

/// Folds unvisited neighbours of point `id` into `cluster`
///
/// # Arguments
///
/// * `index` - Axis orderings of the current pass
/// * `visited` - Per-point visited flags of the current pass, indexed by point id
/// * `id` - Point already absorbed into `cluster`
/// * `cluster` - Cluster being expanded, mutated in place
/// * `epsilon` - Base radius in pixels
pub fn absorb_neighbours(
    index: &AxisIndex,
    visited: &mut BitSlice,
    id: usize,
    cluster: &mut Cluster,
    epsilon: f64,
) {
    for axis in [Axis::X, Axis::Y] {
        let order = index.order(axis);
        let rank = index.rank(id, axis);

        walk(index, visited, order[rank + 1..].iter(), axis, cluster, epsilon);
        walk(index, visited, order[..rank].iter().rev(), axis, cluster, epsilon);
    }
}

fn walk<'a, I>(
    index: &AxisIndex,
    visited: &mut BitSlice,
    candidates: I,
    axis: Axis,
    cluster: &mut Cluster,
    epsilon: f64,
) where
    I: Iterator<Item = &'a usize>,
{
    for &candidate in candidates {
        if visited[candidate] {
            continue;
        }

        let pixel = index.point(candidate).pixel;
        if (axis.of(&pixel) - axis.of(&cluster.center())).abs() > epsilon {
            break;
        }

        let eps = adaptive_radius(epsilon, cluster.len());
        if pixel.sq_dist(&cluster.center()) <= eps * eps {
            cluster.absorb(candidate, &pixel);
            visited.set(candidate, true);
        }
    }
}
