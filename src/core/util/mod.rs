pub mod available_workers;
pub mod calculate_column_tiles;
pub mod pixel_to_complex_coords;
