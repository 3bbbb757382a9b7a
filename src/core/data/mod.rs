pub mod colour;
pub mod column_tile;
pub mod complex;
pub mod complex_rect;
pub mod fractal_config;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod viewport;
