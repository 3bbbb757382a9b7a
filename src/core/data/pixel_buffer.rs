use crate::core::data::colour::Colour;
use crate::core::data::column_tile::ColumnTile;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
    TilesDoNotCoverWidth {
        width: u32,
        tiles: Vec<ColumnTile>,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} pixel rect",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
            Self::TilesDoNotCoverWidth { width, tiles } => {
                write!(
                    f,
                    "{} column tiles do not exactly cover width {}",
                    tiles.len(),
                    width
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// RGB pixels stored column by column.
///
/// Column-major order keeps every column range in one contiguous slice, so
/// render workers can each be handed an exclusive `&mut [u8]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let column_offset = pixel.x as usize * self.pixel_rect.height() as usize;

        Ok((column_offset + pixel.y as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Splits the buffer into one exclusive slice per tile.
    ///
    /// Tiles must be ordered, contiguous, start at column 0 and end at the
    /// buffer width.
    pub fn column_tiles_mut(
        &mut self,
        tiles: &[ColumnTile],
    ) -> Result<Vec<&mut [u8]>, PixelBufferError> {
        let width = self.pixel_rect.width();
        let covers_width = !tiles.is_empty()
            && tiles.first().map(|t| t.start) == Some(0)
            && tiles.last().map(|t| t.end) == Some(width)
            && tiles.windows(2).all(|pair| pair[0].end == pair[1].start)
            && tiles.iter().all(|t| t.start < t.end);

        if !covers_width {
            return Err(PixelBufferError::TilesDoNotCoverWidth {
                width,
                tiles: tiles.to_vec(),
            });
        }

        let column_bytes = self.pixel_rect.height() as usize * BYTES_PER_PIXEL;
        let mut remaining: &mut [u8] = &mut self.buffer;
        let mut slices = Vec::with_capacity(tiles.len());

        for tile in tiles {
            let (head, tail) =
                std::mem::take(&mut remaining).split_at_mut(tile.width() as usize * column_bytes);
            slices.push(head);
            remaining = tail;
        }

        Ok(slices)
    }

    /// Copies the pixels out in row-major RGB order, as image formats expect.
    #[must_use]
    pub fn to_row_major(&self) -> PixelBufferData {
        let width = self.pixel_rect.width() as usize;
        let height = self.pixel_rect.height() as usize;
        let mut rows = Vec::with_capacity(self.buffer.len());

        for y in 0..height {
            for x in 0..width {
                let index = (x * height + y) * BYTES_PER_PIXEL;
                rows.extend_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);
            }
        }

        rows
    }
}
