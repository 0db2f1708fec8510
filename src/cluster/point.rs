//! Geographic and pixel-space points

/// Maximum per-axis difference at which two coordinates are considered the same place
pub const LATLNG_MARGIN: f64 = 1.0e-9;

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Geometric equality: both axes within [`LATLNG_MARGIN`] of each other
    pub fn same_place(&self, other: &LatLng) -> bool {
        let margin = (self.lat - other.lat)
            .abs()
            .max((self.lng - other.lng).abs());
        margin <= LATLNG_MARGIN
    }
}

/// Point in projected (screen) space, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns squared (without sqrt) euclidean distance between two points
    pub fn sq_dist(&self, b: &PixelPoint) -> f64 {
        let dx = self.x - b.x;
        let dy = self.y - b.y;
        dx * dx + dy * dy
    }
}

/// Geographic rectangle given by its south-west and north-east corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl BoundingBox {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Checks if the coordinate is inside the box, edges included
    pub fn contains(&self, ll: &LatLng) -> bool {
        ll.lat >= self.south_west.lat
            && ll.lat <= self.north_east.lat
            && ll.lng >= self.south_west.lng
            && ll.lng <= self.north_east.lng
    }

    /// Smallest box containing every coordinate, or `None` for an empty input
    pub fn around<'a, I>(coords: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut iter = coords.into_iter();
        let first = *iter.next()?;
        let mut min = first;
        let mut max = first;

        for ll in iter {
            min.lat = min.lat.min(ll.lat);
            min.lng = min.lng.min(ll.lng);
            max.lat = max.lat.max(ll.lat);
            max.lng = max.lng.max(ll.lng);
        }

        Some(BoundingBox::new(min, max))
    }
}

/// A projected item taking part in one recompute pass
///
/// Ranks are positions within the x-sorted and y-sorted orderings of the
/// pass. `source_index` points back into the item list as it was when the
/// pass started; it is not an identity across passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupPoint {
    pub pixel: PixelPoint,
    pub source_index: usize,
    pub x_rank: usize,
    pub y_rank: usize,
}

impl GroupPoint {
    pub fn x(&self) -> f64 {
        self.pixel.x
    }

    pub fn y(&self) -> f64 {
        self.pixel.y
    }
}
