//! Grouping of items sitting at the same position
//!
//! Used to keep one marker per position across list updates: markers whose
//! position survives an update can be reused instead of rebuilt.

use std::collections::{HashMap, HashSet};

use super::point::LatLng;

/// Decimal places a position is rounded to before comparison
pub const POSITION_DECIMALS: i32 = 6;

/// Position rounded to [`POSITION_DECIMALS`], usable as a map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionKey {
    lat: i64,
    lng: i64,
}

impl PositionKey {
    pub fn of(ll: &LatLng) -> PositionKey {
        let factor = 10f64.powi(POSITION_DECIMALS);
        PositionKey {
            lat: (ll.lat * factor).round() as i64,
            lng: (ll.lng * factor).round() as i64,
        }
    }

    /// Position the key stands for
    pub fn latlng(&self) -> LatLng {
        let factor = 10f64.powi(POSITION_DECIMALS);
        LatLng::new(self.lat as f64 / factor, self.lng as f64 / factor)
    }
}

/// Items found at one position
#[derive(Debug, Clone, PartialEq)]
pub struct Colocated {
    pub key: PositionKey,
    /// Coordinate of the first item seen at this position
    pub position: LatLng,
    /// Item-list indices, ascending
    pub indices: Vec<usize>,
}

/// Groups items by position, in order of first appearance
///
/// Items without a coordinate, or with a non-finite one, are left out.
pub fn group_by_position<T, F>(items: &[T], extractor: F) -> Vec<Colocated>
where
    F: Fn(&T) -> Option<LatLng>,
{
    let mut slots: HashMap<PositionKey, usize> = HashMap::new();
    let mut groups: Vec<Colocated> = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let Some(ll) = extractor(item) else {
            continue;
        };
        if !ll.lat.is_finite() || !ll.lng.is_finite() {
            continue;
        }
        let key = PositionKey::of(&ll);
        match slots.get(&key) {
            Some(&slot) => groups[slot].indices.push(i),
            None => {
                slots.insert(key, groups.len());
                groups.push(Colocated {
                    key,
                    position: ll,
                    indices: vec![i],
                });
            }
        }
    }

    groups
}

/// Marker changes between two position groupings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerDiff {
    /// Positions present before and after; their markers can be reused
    pub kept: Vec<PositionKey>,
    /// Positions needing a new marker
    pub added: Vec<PositionKey>,
    /// Positions whose marker must be removed
    pub removed: Vec<PositionKey>,
}

impl MarkerDiff {
    /// Compares `old` and `new`; `kept` and `added` follow `new` order,
    /// `removed` follows `old` order
    pub fn between(old: &[Colocated], new: &[Colocated]) -> MarkerDiff {
        let old_keys: HashSet<PositionKey> = old.iter().map(|g| g.key).collect();
        let new_keys: HashSet<PositionKey> = new.iter().map(|g| g.key).collect();

        let mut diff = MarkerDiff::default();
        for group in new {
            if old_keys.contains(&group.key) {
                diff.kept.push(group.key);
            } else {
                diff.added.push(group.key);
            }
        }
        diff.removed = old
            .iter()
            .map(|g| g.key)
            .filter(|key| !new_keys.contains(key))
            .collect();

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
