pub mod ambient;
pub mod config;
pub mod palette;
pub mod report;

pub use ambient::{resolve_ambient, AmbientSetting};
pub use config::AppConfig;
pub use palette::{
    default_palette, parse_palette, parse_palette_list, PaletteEntry, Role, MAX_PALETTE_SIZE,
};
pub use report::{
    ComfortReasons, ComfortResponse, ContrastResponse, FactorReport, GridCellReport,
    GridHeaderReport, GridResponse,
};
