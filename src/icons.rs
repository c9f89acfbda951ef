//! Icon name to asset resolution

use std::path::{Path, PathBuf};

/// Edge length of every icon, in pixels
pub const ICON_SIZE: u16 = 20;

/// The closed set of icons used by the form and preview screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    User,
    Mail,
    Phone,
    Description,
    Position,
    Download,
    View,
    ChevronLeft,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::User,
        Icon::Mail,
        Icon::Phone,
        Icon::Description,
        Icon::Position,
        Icon::Download,
        Icon::View,
        Icon::ChevronLeft,
    ];

    /// Asset file stem. Casing matches the files shipped in `icons/`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Mail => "mail",
            Self::Phone => "phone",
            Self::Description => "Description",
            Self::Position => "position",
            Self::Download => "Download",
            Self::View => "view",
            Self::ChevronLeft => "chevron-left",
        }
    }

    /// Single-cell stand-in drawn by the terminal UI
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Mail => "✉",
            Self::Phone => "☎",
            Self::Description => "≡",
            Self::Position => "◆",
            Self::Download => "⤓",
            Self::View => "◉",
            Self::ChevronLeft => "‹",
        }
    }
}

/// A resolved icon: where its image lives and how large it is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    pub path: PathBuf,
    pub size: u16,
    pub alt: String,
    pub glyph: &'static str,
}

/// Resolves icons by convention to `<asset_dir>/icons/<name>.svg`.
///
/// Nothing is checked on disk; a missing file is a packaging problem.
#[derive(Debug, Clone)]
pub struct IconResolver {
    asset_dir: PathBuf,
}

impl IconResolver {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
        }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    pub fn resolve(&self, icon: Icon) -> IconAsset {
        IconAsset {
            path: self
                .asset_dir
                .join("icons")
                .join(format!("{}.svg", icon.name())),
            size: ICON_SIZE,
            alt: format!("{} icon", icon.name()),
            glyph: icon.glyph(),
        }
    }
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new("public")
    }
}
