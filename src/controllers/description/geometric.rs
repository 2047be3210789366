use crate::controllers::description::describer::ViewDescriber;
use crate::controllers::description::errors::DescribeError;

/// Recognisable neighbourhoods of the Mandelbrot set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    MainCardioid,
    Period2Bulb,
    SeahorseValley,
    ElephantValley,
    FarExterior,
    Boundary,
}

impl Region {
    #[must_use]
    pub fn classify(x: f64, y: f64) -> Self {
        let q = (x - 0.25).powi(2) + y * y;

        if x * x + y * y > 4.0 {
            Self::FarExterior
        } else if q * (q + (x - 0.25)) <= 0.25 * y * y {
            Self::MainCardioid
        } else if (x + 1.0).powi(2) + y * y <= 0.0625 {
            Self::Period2Bulb
        } else if (-0.8..=-0.7).contains(&x) && (0.05..=0.2).contains(&y.abs()) {
            Self::SeahorseValley
        } else if (0.25..=0.35).contains(&x) && y.abs() <= 0.1 {
            Self::ElephantValley
        } else {
            Self::Boundary
        }
    }

    fn sentence(self) -> &'static str {
        match self {
            Self::MainCardioid => {
                "The view rests inside the main cardioid, a calm black heart where every orbit stays bounded."
            }
            Self::Period2Bulb => {
                "This is the period-2 bulb, a perfect disc budding from the cardioid's western cusp."
            }
            Self::SeahorseValley => {
                "Seahorse valley curls here, double spirals uncoiling between the cardioid and its largest bulb."
            }
            Self::ElephantValley => {
                "Elephant valley stretches here, trunks of filaments marching along the cardioid's eastern rim."
            }
            Self::FarExterior => {
                "The orbits here flee at once, leaving smooth bands of colour far outside the set."
            }
            Self::Boundary => {
                "Filaments and tiny bulbs crowd the boundary, each hinting at a smaller copy of the whole."
            }
        }
    }
}

fn depth_sentence(zoom: f64) -> &'static str {
    if zoom >= 1.0 {
        "Seen from afar, the whole landscape fits in the frame."
    } else if zoom >= 1e-3 {
        "At this magnification the structure begins to repeat itself."
    } else if zoom >= 1e-8 {
        "Deep in the zoom, self-similar detail unfolds without end."
    } else {
        "At this depth the view approaches the limits of double precision."
    }
}

/// Offline describer that names the region under the view centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricDescriber;

impl ViewDescriber for GeometricDescriber {
    fn describe(&self, center_x: f64, center_y: f64, zoom: f64) -> Result<String, DescribeError> {
        if !center_x.is_finite() || !center_y.is_finite() || !zoom.is_finite() {
            return Err(DescribeError::NonFiniteView);
        }

        let region = Region::classify(center_x, center_y);
        Ok(format!("{} {}", region.sentence(), depth_sentence(zoom)))
    }
}
