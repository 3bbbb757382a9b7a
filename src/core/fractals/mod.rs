pub mod escape_time;
pub mod fractal_kinds;
pub mod fractal_variant;
pub mod hsb_colour_map;
