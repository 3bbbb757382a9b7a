use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::convert::Infallible;

pub const HUE_CYCLE: u32 = 256;
pub const BRIGHTNESS_KNEE: u32 = 18;

/// Converts hue/saturation/brightness (each nominally in `[0, 1]`, hue taken
/// modulo 1) to RGB using the classic six-sector colour wheel with
/// round-half-up channel quantisation.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    let channel = |value: f32| (value * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let grey = channel(brightness);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => (0.0, 0.0, 0.0),
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Colours an iteration count by cycling hue every [`HUE_CYCLE`] iterations
/// at full saturation, with brightness `n / (n + BRIGHTNESS_KNEE)`.
///
/// Bounded orbits go through the same formula; there is no dedicated
/// interior colour.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HsbColourMap {
    hue_cycle: u32,
    brightness_knee: u32,
}

impl Default for HsbColourMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HsbColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self {
            hue_cycle: HUE_CYCLE,
            brightness_knee: BRIGHTNESS_KNEE,
        }
    }

    pub fn colour_of(&self, iterations: u32) -> Colour {
        let n = iterations as f32;
        let hue = n / self.hue_cycle as f32;
        let brightness = n / (n + self.brightness_knee as f32);

        hsb_to_rgb(hue, 1.0, brightness)
    }
}

impl ColourMap<u32> for HsbColourMap {
    type Failure = Infallible;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        Ok(self.colour_of(iterations))
    }

    fn display_name(&self) -> &str {
        "HSB cycle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::MAX_ITERATIONS;

    #[test]
    fn test_zero_iterations_is_black() {
        assert_eq!(HsbColourMap::new().colour_of(0), Colour::BLACK);
    }

    #[test]
    fn test_full_hue_cycle_wraps_to_red() {
        // brightness 256/274: 0.934 * 255 + 0.5 truncates to 238
        assert_eq!(
            HsbColourMap::new().colour_of(256),
            Colour { r: 238, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_quarter_hue_cycle() {
        // hue 0.25 lands halfway through sector 1, brightness 64/82
        assert_eq!(
            HsbColourMap::new().colour_of(64),
            Colour {
                r: 100,
                g: 199,
                b: 0
            }
        );
    }

    #[test]
    fn test_max_iterations_uses_the_same_formula() {
        // hue 1024/256 = 4.0 wraps to 0, brightness 1024/1042
        assert_eq!(
            HsbColourMap::new().colour_of(MAX_ITERATIONS),
            Colour { r: 251, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_brightness_grows_with_iterations() {
        let map = HsbColourMap::new();
        let peak = |c: Colour| c.r.max(c.g).max(c.b);

        assert!(peak(map.colour_of(256)) > peak(map.colour_of(5)));
    }

    #[test]
    fn test_hsb_to_rgb_primary_sectors() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(
            hsb_to_rgb(1.0 / 3.0, 1.0, 1.0),
            Colour { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            hsb_to_rgb(2.0 / 3.0, 1.0, 1.0),
            Colour { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_hsb_to_rgb_zero_saturation_is_grey() {
        assert_eq!(
            hsb_to_rgb(0.7, 0.0, 0.5),
            Colour {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_map_port_matches_colour_of() {
        let map = HsbColourMap::new();

        assert_eq!(map.map(77), Ok(map.colour_of(77)));
        assert_eq!(map.display_name(), "HSB cycle");
    }
}
