use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Affine map of one axis from pixel space onto the plane.
///
/// `pixel_coord` is measured from pixel 0 and is not range-checked: values
/// outside `[0, pixel_extent)` extrapolate past the plane bounds.
pub fn map_to_plane(pixel_coord: f64, pixel_extent: u32, plane_min: f64, plane_max: f64) -> f64 {
    plane_min + (pixel_coord / pixel_extent as f64) * (plane_max - plane_min)
}

/// Inverse of [`map_to_plane`]. Requires `plane_min < plane_max`.
pub fn map_to_pixel(plane_coord: f64, pixel_extent: u32, plane_min: f64, plane_max: f64) -> f64 {
    (plane_coord - plane_min) / (plane_max - plane_min) * pixel_extent as f64
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    fractional_pixel_to_complex_coords(
        pixel_position.x as f64,
        pixel_position.y as f64,
        pixel_rect,
        complex_rect,
    )
}

pub fn fractional_pixel_to_complex_coords(
    x: f64,
    y: f64,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Complex {
    let min = complex_rect.min();
    let max = complex_rect.max();

    Complex {
        real: map_to_plane(x, pixel_rect.width(), min.real, max.real),
        imag: map_to_plane(y, pixel_rect.height(), min.imag, max.imag),
    }
}

/// Maps a plane point back to fractional pixel coordinates `(x, y)`.
pub fn complex_to_pixel_coords(
    point: Complex,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> (f64, f64) {
    let min = complex_rect.min();
    let max = complex_rect.max();

    (
        map_to_pixel(point.real, pixel_rect.width(), min.real, max.real),
        map_to_pixel(point.imag, pixel_rect.height(), min.imag, max.imag),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_region() -> ComplexRect {
        ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap()
    }

    #[test]
    fn test_map_to_plane() {
        assert_eq!(map_to_plane(0.0, 4, -2.0, 2.0), -2.0);
        assert_eq!(map_to_plane(2.0, 4, -2.0, 2.0), 0.0);
        assert_eq!(map_to_plane(3.0, 4, -2.0, 2.0), 1.0);
    }

    #[test]
    fn test_map_to_plane_extrapolates_out_of_range_pixels() {
        assert_eq!(map_to_plane(4.0, 4, -2.0, 2.0), 2.0);
        assert_eq!(map_to_plane(-1.0, 4, -2.0, 2.0), -3.0);
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let pixel_rect = PixelRect::new(100, 100).unwrap();
        let complex_rect =
            ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, complex_rect);

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: 2, y: 2 }, pixel_rect, square_region());

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_last_pixel_stops_one_step_short_of_max_bound() {
        let pixel_rect = PixelRect::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: 3, y: 3 }, pixel_rect, square_region());

        assert_eq!(result, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_round_trip_plane_to_pixel_to_plane() {
        let pixel_rect = PixelRect::new(640, 480).unwrap();
        let complex_rect =
            ComplexRect::new(Complex::new(-0.7453, 0.1127), Complex::new(-0.7449, 0.1130)).unwrap();
        let samples = [
            Complex::new(-0.7453, 0.1127),
            Complex::new(-0.7451, 0.11285),
            Complex::new(-0.74495, 0.11299),
            Complex::new(-0.8, 0.2),
        ];

        for point in samples {
            let (x, y) = complex_to_pixel_coords(point, pixel_rect, complex_rect);
            let back = fractional_pixel_to_complex_coords(x, y, pixel_rect, complex_rect);

            assert!((back.real - point.real).abs() < 1e-12, "{:?} -> {:?}", point, back);
            assert!((back.imag - point.imag).abs() < 1e-12, "{:?} -> {:?}", point, back);
        }
    }
}
