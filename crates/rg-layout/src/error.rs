use thiserror::Error;

use rg_core::Cell;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `row` is the 1-based data row (the header is not counted).
    #[error("row {row}: cell {cell} lies outside the grid bounds")]
    OutOfBounds { row: usize, cell: Cell },

    #[error("row {row}: cell {cell} already listed on row {first}")]
    DuplicateCell { row: usize, first: usize, cell: Cell },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
