use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::{
    complex_to_pixel_coords, fractional_pixel_to_complex_coords, pixel_to_complex_coords,
};

/// The region of the plane currently mapped onto a render surface.
///
/// A viewport is an immutable snapshot: zooming produces a new value rather
/// than mutating one a renderer might be reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    pixel_rect: PixelRect,
}

impl Viewport {
    #[must_use]
    pub fn new(region: ComplexRect, pixel_rect: PixelRect) -> Self {
        Self { region, pixel_rect }
    }

    pub fn region(&self) -> ComplexRect {
        self.region
    }

    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn with_region(&self, region: ComplexRect) -> Self {
        Self {
            region,
            pixel_rect: self.pixel_rect,
        }
    }

    pub fn pixel_to_plane(&self, pixel: Point) -> Complex {
        pixel_to_complex_coords(pixel, self.pixel_rect, self.region)
    }

    pub fn fractional_pixel_to_plane(&self, x: f64, y: f64) -> Complex {
        fractional_pixel_to_complex_coords(x, y, self.pixel_rect, self.region)
    }

    /// Fractional pixel position `(x, y)` of a plane point.
    pub fn plane_to_pixel(&self, point: Complex) -> (f64, f64) {
        complex_to_pixel_coords(point, self.pixel_rect, self.region)
    }

    /// Converts a selection into the viewport that shows it undistorted.
    ///
    /// The selection is widened on one axis so the result has the same aspect
    /// ratio as the pixel surface: a selection wider than the surface keeps its
    /// real bounds, anything else keeps its imaginary bounds. Both extents are
    /// centred on the selection's midpoint.
    pub fn fit_selection(&self, selection: ComplexRect) -> Result<Self, ComplexRectError> {
        let aspect = self.pixel_rect.aspect_ratio();
        let center = selection.center();

        let region = if selection.aspect_ratio() > aspect {
            let imag_extent = selection.width() / aspect;
            ComplexRect::new(
                Complex::new(selection.min().real, center.imag - imag_extent / 2.0),
                Complex::new(selection.max().real, center.imag + imag_extent / 2.0),
            )?
        } else {
            let real_extent = selection.height() * aspect;
            ComplexRect::new(
                Complex::new(center.real - real_extent / 2.0, selection.min().imag),
                Complex::new(center.real + real_extent / 2.0, selection.max().imag),
            )?
        };

        Ok(self.with_region(region))
    }
}
