//! Conversion between geographic coordinates and pixel space
//!
//! The grouper never talks to a map widget directly. It consumes the
//! [`Projector`] trait; [`MapView`] is a ready-made implementation using
//! spherical Web Mercator with 256 px tiles.

use std::f64::consts::PI;

use super::point::{BoundingBox, LatLng, PixelPoint};

/// Earth radius used by spherical Web Mercator, in meters
pub const EARTH_R: f64 = 6378137.0;

/// Latitude beyond which Web Mercator is clamped
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Width of a map tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Viewport services supplied by the host map
pub trait Projector {
    /// Projects a coordinate to pixel space at the given zoom.
    ///
    /// Returns `None` when the coordinate can't be projected; such items
    /// are left out of the pass.
    fn project(&self, coord: &LatLng, zoom: i32) -> Option<PixelPoint>;

    /// Inverse of [`Projector::project`]
    fn unproject(&self, pixel: &PixelPoint, zoom: i32) -> LatLng;

    /// Currently visible geographic area
    fn current_bounds(&self) -> BoundingBox;

    fn current_zoom(&self) -> i32;
}

/// Spherical Web Mercator (EPSG:3857) projection to pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebMercator;

impl WebMercator {
    /// Size of the whole world in pixels at a zoom level
    pub fn scale(zoom: i32) -> f64 {
        TILE_SIZE * 2f64.powi(zoom)
    }

    pub fn project(&self, coord: &LatLng, zoom: i32) -> Option<PixelPoint> {
        if !coord.lat.is_finite() || !coord.lng.is_finite() {
            return None;
        }

        let lat = coord.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let sin = lat.sin();

        let x = EARTH_R * coord.lng.to_radians();
        let y = EARTH_R * ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;

        let scale = Self::scale(zoom);
        let k = 0.5 / (PI * EARTH_R);
        Some(PixelPoint::new(
            scale * (k * x + 0.5),
            scale * (-k * y + 0.5),
        ))
    }

    pub fn unproject(&self, pixel: &PixelPoint, zoom: i32) -> LatLng {
        let scale = Self::scale(zoom);
        let k = 0.5 / (PI * EARTH_R);

        let x = (pixel.x / scale - 0.5) / k;
        let y = (pixel.y / scale - 0.5) / -k;

        LatLng::new(
            (2.0 * (y / EARTH_R).exp().atan() - PI / 2.0).to_degrees(),
            (x / EARTH_R).to_degrees(),
        )
    }
}

/// Viewport state of a Web Mercator map: visible bounds and zoom level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    bounds: BoundingBox,
    zoom: i32,
    projection: WebMercator,
}

impl MapView {
    pub fn new(bounds: BoundingBox, zoom: i32) -> Self {
        Self {
            bounds,
            zoom,
            projection: WebMercator,
        }
    }

    /// Moves the viewport (pan and/or zoom)
    pub fn set_view(&mut self, bounds: BoundingBox, zoom: i32) {
        self.bounds = bounds;
        self.zoom = zoom;
    }
}

impl Projector for MapView {
    fn project(&self, coord: &LatLng, zoom: i32) -> Option<PixelPoint> {
        self.projection.project(coord, zoom)
    }

    fn unproject(&self, pixel: &PixelPoint, zoom: i32) -> LatLng {
        self.projection.unproject(pixel, zoom)
    }

    fn current_bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn current_zoom(&self) -> i32 {
        self.zoom
    }
}
