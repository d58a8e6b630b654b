use comfort_engine::Srgb;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::PaletteError;

/// What a palette color is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Page or surface color
    #[default]
    #[serde(alias = "bg")]
    Background,
    /// Text or icon color
    #[serde(alias = "fg")]
    Foreground,
}

impl Role {
    /// `bg` or `fg`
    pub fn abbrev(self) -> &'static str {
        match self {
            Role::Background => "bg",
            Role::Foreground => "fg",
        }
    }

    /// Parse `bg`, `fg`, `background` or `foreground` (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bg" | "background" => Some(Role::Background),
            "fg" | "foreground" => Some(Role::Foreground),
            _ => None,
        }
    }
}

/// One color of a palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaletteEntry {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Color string (`#rgb`, `#rrggbb`, `rgb(r, g, b)`, `white`, `black`)
    #[schema(example = "#7f42ff")]
    pub color: String,
    /// Background or foreground (default: background)
    #[serde(default)]
    pub role: Role,
}

impl PaletteEntry {
    pub fn new(color: impl Into<String>, role: Role) -> Self {
        Self {
            name: None,
            color: color.into(),
            role,
        }
    }
}

/// The four seed colors: two light surfaces, black and a violet accent
pub fn default_palette() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry::new("#f8f8f8", Role::Background),
        PaletteEntry::new("#f5f0ff", Role::Background),
        PaletteEntry::new("#000000", Role::Foreground),
        PaletteEntry::new("#7f42ff", Role::Foreground),
    ]
}

/// Largest palette accepted; a grid holds n * (n - 1) cells
pub const MAX_PALETTE_SIZE: usize = 32;

/// Parse every entry's color, reporting the first failure by position
pub fn parse_palette(entries: &[PaletteEntry]) -> Result<Vec<Srgb>, PaletteError> {
    if entries.len() > MAX_PALETTE_SIZE {
        return Err(PaletteError::TooLarge(entries.len()));
    }
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .color
                .parse::<Srgb>()
                .map_err(|source| PaletteError::InvalidColor { index, source })
        })
        .collect()
}

/// Parse a compact palette list: `"#f8f8f8:bg,#000:fg,#7f42ff"`.
///
/// Each item is `color[:role]`; a missing role means background.
/// Only the color syntax is checked later, by [`parse_palette`].
pub fn parse_palette_list(list: &str) -> Result<Vec<PaletteEntry>, PaletteError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match item.rsplit_once(':') {
            Some((color, role)) => Role::from_name(role)
                .map(|role| PaletteEntry::new(color.trim(), role))
                .ok_or_else(|| PaletteError::UnknownRole(role.trim().to_string())),
            None => Ok(PaletteEntry::new(item, Role::default())),
        })
        .collect()
}
