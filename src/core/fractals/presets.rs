use crate::core::data::viewport::{Viewport, ViewportError};

/// A named point of interest on a preset's plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bookmark {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub description: &'static str,
}

impl Bookmark {
    pub fn viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.x, self.y, self.zoom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationPreset {
    pub name: &'static str,
    /// Display-only label in TeX-like notation.
    pub formula: &'static str,
    pub real: &'static str,
    pub imag: &'static str,
    pub bookmarks: &'static [Bookmark],
}

impl EquationPreset {
    pub fn matches(&self, real: &str, imag: &str) -> bool {
        self.real == real && self.imag == imag
    }

    pub fn find_bookmark(&self, name: &str) -> Option<&'static Bookmark> {
        let name = name.trim();
        self.bookmarks
            .iter()
            .find(|bookmark| bookmark.name.eq_ignore_ascii_case(name))
    }
}

pub const MANDELBROT: EquationPreset = EquationPreset {
    name: "Mandelbrot Set",
    formula: "Z_{n+1} = Z_{n}^2 + C",
    real: "x*x - y*y + x0",
    imag: "2*x*y + y0",
    bookmarks: &[
        Bookmark {
            name: "The Main Bulb",
            x: -0.5,
            y: 0.0,
            zoom: 1.5,
            description: "The central cardioid and main circular bulb.",
        },
        Bookmark {
            name: "Seahorse Valley",
            x: -0.743643887037158,
            y: 0.13182590420531197,
            zoom: 0.000001,
            description: "A famous region full of spiral shapes resembling seahorses.",
        },
        Bookmark {
            name: "Triple Spiral",
            x: -0.088,
            y: 0.654,
            zoom: 0.001,
            description: "Elegant triple-spiral structures.",
        },
        Bookmark {
            name: "Elephant Valley",
            x: 0.28,
            y: 0.008,
            zoom: 0.01,
            description: "Named for the elephant-trunk-like structures.",
        },
    ],
};

pub const CUBIC_MANDELBROT: EquationPreset = EquationPreset {
    name: "Cubic Mandelbrot",
    formula: "Z_{n+1} = Z_{n}^3 + C",
    real: "x*x*x - 3*x*y*y + x0",
    imag: "3*x*x*y - y*y*y + y0",
    bookmarks: &[
        Bookmark {
            name: "Cubic Core",
            x: 0.0,
            y: 0.0,
            zoom: 2.0,
            description: "The center of the cubic Mandelbrot set.",
        },
        Bookmark {
            name: "Symmetric Valley",
            x: -0.42,
            y: 0.0,
            zoom: 0.1,
            description: "Highly symmetric structures along the real axis.",
        },
        Bookmark {
            name: "Edge Spirals",
            x: 0.2,
            y: 0.45,
            zoom: 0.05,
            description: "Spiraling filaments at the boundary.",
        },
    ],
};

pub const BURNING_SHIP: EquationPreset = EquationPreset {
    name: "Burning Ship",
    formula: "Z_{n+1} = (|Re(Z_{n})| + i|Im(Z_{n})|)^2 + C",
    real: "x*x - y*y + x0",
    imag: "abs(2*x*y) + y0",
    bookmarks: &[
        Bookmark {
            name: "The Ship",
            x: -0.45,
            y: -0.5,
            zoom: 1.5,
            description: "The iconic ship-like structure.",
        },
        Bookmark {
            name: "Masts",
            x: -1.75,
            y: -0.03,
            zoom: 0.1,
            description: "The long needle-like masts extending outwards.",
        },
        Bookmark {
            name: "Hull Detail",
            x: -1.744,
            y: -0.01,
            zoom: 0.001,
            description: "Intricate chaotic structures near the hull.",
        },
    ],
};

pub const TRICORN: EquationPreset = EquationPreset {
    name: "Tricorn",
    formula: "Z_{n+1} = \\bar{Z}_{n}^2 + C",
    real: "x*x - y*y + x0",
    imag: "-2*x*y + y0",
    bookmarks: &[
        Bookmark {
            name: "The Hat",
            x: 0.0,
            y: 0.0,
            zoom: 2.5,
            description: "The main three-pointed shape.",
        },
        Bookmark {
            name: "Pointed Edge",
            x: -1.1,
            y: 0.0,
            zoom: 0.2,
            description: "A detailed view of one of the tricorn tips.",
        },
    ],
};

pub const CELTIC: EquationPreset = EquationPreset {
    name: "Celtic Fractal",
    formula: "Z_{n+1} = |Re(Z_{n}^2)| + i Im(Z_{n}^2) + C",
    real: "abs(x*x - y*y) + x0",
    imag: "2*x*y + y0",
    bookmarks: &[
        Bookmark {
            name: "Celtic Knot",
            x: -0.1,
            y: 0.0,
            zoom: 2.0,
            description: "The central overlapping circular patterns.",
        },
        Bookmark {
            name: "Braided Valley",
            x: 0.5,
            y: 0.3,
            zoom: 0.1,
            description: "Filaments that look like braided ropes.",
        },
    ],
};

pub const EQUATION_PRESETS: &[EquationPreset] =
    &[MANDELBROT, CUBIC_MANDELBROT, BURNING_SHIP, TRICORN, CELTIC];

/// The preset whose equations are exactly `real` and `imag`, if any.
pub fn active_preset(real: &str, imag: &str) -> Option<&'static EquationPreset> {
    EQUATION_PRESETS
        .iter()
        .find(|preset| preset.matches(real, imag))
}

/// Bookmarks offered for the given equations; custom formulas get the
/// Mandelbrot ones.
pub fn bookmarks_for(real: &str, imag: &str) -> &'static [Bookmark] {
    active_preset(real, imag)
        .map_or(MANDELBROT.bookmarks, |preset| preset.bookmarks)
}

/// Case-insensitive lookup by preset name.
pub fn find_preset(name: &str) -> Option<&'static EquationPreset> {
    let name = name.trim();
    EQUATION_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
