use crate::core::data::column_tile::ColumnTile;
use crate::core::data::pixel_rect::PixelRect;
use std::num::NonZeroU32;

/// Never more tiles than columns, so no worker is handed an empty range.
pub fn calculate_tiles_in_pixel_rect(max_tiles: NonZeroU32, pixel_rect: PixelRect) -> u32 {
    max_tiles.get().min(pixel_rect.width())
}

/// Splits the width of `pixel_rect` into contiguous column tiles.
///
/// Every tile but the last is `width / tiles` columns wide; the last one also
/// takes the remainder and always ends at the full width.
pub fn calculate_column_tiles(max_tiles: NonZeroU32, pixel_rect: PixelRect) -> Vec<ColumnTile> {
    let total_tiles = calculate_tiles_in_pixel_rect(max_tiles, pixel_rect);
    let tile_width = pixel_rect.width() / total_tiles;

    (0..total_tiles)
        .map(|tile_num| {
            let start = tile_num * tile_width;
            let end = if tile_num == total_tiles - 1 {
                pixel_rect.width() // Last tile takes any remainder columns
            } else {
                start + tile_width
            };

            ColumnTile { start, end }
        })
        .collect()
}
