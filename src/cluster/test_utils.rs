//! Shared helpers for the cluster tests

use super::point::{BoundingBox, LatLng, PixelPoint};
use super::projection::Projector;

/// Projector treating coordinates as pixels: x = lng, y = lat, at every zoom
#[derive(Debug, Clone, Copy)]
pub struct PlaneProjector {
    pub bounds: BoundingBox,
    pub zoom: i32,
}

impl Default for PlaneProjector {
    fn default() -> Self {
        Self {
            bounds: BoundingBox::new(LatLng::new(-1.0e9, -1.0e9), LatLng::new(1.0e9, 1.0e9)),
            zoom: 0,
        }
    }
}

impl Projector for PlaneProjector {
    fn project(&self, coord: &LatLng, _zoom: i32) -> Option<PixelPoint> {
        Some(PixelPoint::new(coord.lng, coord.lat))
    }

    fn unproject(&self, pixel: &PixelPoint, _zoom: i32) -> LatLng {
        LatLng::new(pixel.y, pixel.x)
    }

    fn current_bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn current_zoom(&self) -> i32 {
        self.zoom
    }
}

/// Item placed at pixel `(x, y)` under [`PlaneProjector`]
pub fn at(x: f64, y: f64) -> Option<LatLng> {
    Some(LatLng::new(y, x))
}

/// Extractor for `Option<LatLng>` items
pub fn coord(item: &Option<LatLng>) -> Option<LatLng> {
    *item
}
