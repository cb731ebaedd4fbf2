use std::fmt;

use serde::Deserialize;

use crate::models::aero::{ModelSize, polar::AnalysisSettings};

/// Which quantity the request prescribes per station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Solve for the angle of attack reaching each `cl_values` entry.
    #[default]
    Cl,
    /// Evaluate directly at each `alpha_values` entry, in degrees.
    Alpha,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cl => "cl",
            Self::Alpha => "alpha",
        })
    }
}

/// A batch analysis request.
///
/// Coordinates run from the trailing edge along the upper surface, around the
/// leading edge, and back along the lower surface. Flow fields left out of the
/// JSON take the [`AnalysisSettings`] defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Request {
    pub x_coords: Vec<f64>,
    pub y_coords: Vec<f64>,

    #[serde(default)]
    pub mode: Mode,

    /// Target lift coefficients, required in [`Mode::Cl`].
    #[serde(default)]
    pub cl_values: Option<Vec<f64>>,

    /// Angles of attack in degrees, required in [`Mode::Alpha`].
    #[serde(default)]
    pub alpha_values: Option<Vec<f64>>,

    /// Chord Reynolds number per station.
    pub re_values: Vec<f64>,

    #[serde(default = "defaults::n_crit")]
    pub n_crit: f64,
    #[serde(default = "defaults::free_transition")]
    pub xtr_top: f64,
    #[serde(default = "defaults::free_transition")]
    pub xtr_bot: f64,
    #[serde(default)]
    pub mach: f64,

    #[serde(default)]
    pub model_size: ModelSize,
}

mod defaults {
    use crate::models::aero::polar::AnalysisSettings;

    pub(super) fn n_crit() -> f64 {
        AnalysisSettings::default().n_crit
    }

    pub(super) fn free_transition() -> f64 {
        1.0
    }
}

impl Request {
    /// Flow settings shared by every station.
    #[must_use]
    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            n_crit: self.n_crit,
            xtr_top: self.xtr_top,
            xtr_bot: self.xtr_bot,
            mach: self.mach,
        }
    }
}
