pub mod grid;

pub use grid::{GridCell, GridHeader, GridOptions, PaletteGrid};
