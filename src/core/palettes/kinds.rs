use crate::core::data::colour::Colour;
use crate::core::palettes::hex::hex;
use crate::core::palettes::palette::Palette;

const ELECTRIC_BLUE: [Colour; 5] = [
    hex("#000764"),
    hex("#206bcb"),
    hex("#edffff"),
    hex("#ffaa00"),
    hex("#000200"),
];

const MAGMA: [Colour; 10] = [
    hex("#000004"),
    hex("#1b0c41"),
    hex("#4b0c6b"),
    hex("#781c6d"),
    hex("#a52c60"),
    hex("#cf4446"),
    hex("#ed6925"),
    hex("#fb9a06"),
    hex("#f7d03c"),
    hex("#fcffa4"),
];

const DEEP_FOREST: [Colour; 5] = [
    hex("#041d01"),
    hex("#0b4d02"),
    hex("#218c02"),
    hex("#4ec000"),
    hex("#b6ef00"),
];

const MONOCHROME: [Colour; 2] = [hex("#000000"), hex("#ffffff")];

const CYBERPUNK: [Colour; 5] = [
    hex("#0d0221"),
    hex("#240b36"),
    hex("#c31432"),
    hex("#fdbb2d"),
    hex("#22c1c3"),
];

/// The built-in palette registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteKinds {
    #[default]
    ElectricBlue,
    Magma,
    DeepForest,
    Monochrome,
    Cyberpunk,
}

impl PaletteKinds {
    pub const ALL: &'static [Self] = &[
        Self::ElectricBlue,
        Self::Magma,
        Self::DeepForest,
        Self::Monochrome,
        Self::Cyberpunk,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ElectricBlue => "Electric Blue",
            Self::Magma => "Magma",
            Self::DeepForest => "Deep Forest",
            Self::Monochrome => "Monochrome",
            Self::Cyberpunk => "Cyberpunk",
        }
    }

    #[must_use]
    pub const fn anchors(self) -> &'static [Colour] {
        match self {
            Self::ElectricBlue => &ELECTRIC_BLUE,
            Self::Magma => &MAGMA,
            Self::DeepForest => &DEEP_FOREST,
            Self::Monochrome => &MONOCHROME,
            Self::Cyberpunk => &CYBERPUNK,
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        Palette::from_static(self.anchors())
    }

    /// Exact, case-insensitive lookup by display name.
    #[must_use]
    pub fn find(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(name.trim()))
    }

    /// Registry lookup; unknown names fall back to the default palette.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::find(name).unwrap_or_default()
    }
}

impl std::fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
