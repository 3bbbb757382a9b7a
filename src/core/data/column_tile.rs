/// A contiguous run of pixel columns `[start, end)` owned by one render worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColumnTile {
    pub start: u32,
    pub end: u32,
}

impl ColumnTile {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    #[must_use]
    pub fn columns(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }
}
