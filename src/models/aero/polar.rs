//! Batch polar analysis over a list of stations.
//!
//! A station pairs one target (lift coefficient or angle of attack) with one
//! Reynolds number. Stations are processed sequentially and results are
//! returned in station order.

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uom::si::{angle::degree, f64::Angle};

use crate::support::geometry::Airfoil;

use super::{
    AeroModel, AlphaSolveError, AlphaSolverConfig, FlowCondition, FlowError, OperatingPoint,
    solve_for_cl,
};

/// Flow settings shared by every station of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    /// Amplification factor for natural transition.
    pub n_crit: f64,

    /// Forced transition on the upper surface, `x/c`. `1.0` is free transition.
    pub xtr_top: f64,

    /// Forced transition on the lower surface, `x/c`. `1.0` is free transition.
    pub xtr_bot: f64,

    /// Free-stream Mach number.
    pub mach: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            n_crit: 9.0,
            xtr_top: 1.0,
            xtr_bot: 1.0,
            mach: 0.0,
        }
    }
}

impl AnalysisSettings {
    /// Builds the flow condition for one station.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError`] if any value is out of range.
    pub fn flow_at(&self, reynolds: f64) -> Result<FlowCondition, FlowError> {
        FlowCondition::new(reynolds, self.mach, self.n_crit, self.xtr_top, self.xtr_bot)
    }
}

/// Per-station results, one entry per input station in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FoilPolar {
    /// True when the batch ran to completion.
    ///
    /// This does not imply convergence; see [`FoilPolar::converged`].
    pub success: bool,

    /// Angle of attack in degrees.
    pub alpha: Vec<f64>,

    /// Drag coefficient.
    pub cd: Vec<f64>,

    /// Lift coefficient.
    pub cl: Vec<f64>,

    /// Pitching moment coefficient about the quarter chord.
    pub cm: Vec<f64>,

    /// Upper-surface transition location as a fraction of chord (x/c).
    pub xtr_top: Vec<f64>,

    /// Lower-surface transition location as a fraction of chord (x/c).
    pub xtr_bot: Vec<f64>,

    /// Whether each station reached its target.
    ///
    /// Always true for an alpha sweep.
    pub converged: Vec<bool>,
}

impl FoilPolar {
    fn with_capacity(n: usize) -> Self {
        Self {
            success: true,
            alpha: Vec::with_capacity(n),
            cd: Vec::with_capacity(n),
            cl: Vec::with_capacity(n),
            cm: Vec::with_capacity(n),
            xtr_top: Vec::with_capacity(n),
            xtr_bot: Vec::with_capacity(n),
            converged: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, point: &OperatingPoint, converged: bool) {
        self.alpha.push(point.alpha_deg());
        self.cd.push(point.cd);
        self.cl.push(point.cl);
        self.cm.push(point.cm);
        self.xtr_top.push(point.xtr_top.into_inner());
        self.xtr_bot.push(point.xtr_bot.into_inner());
        self.converged.push(converged);
    }

    /// Number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// Number of stations that did not reach their target.
    #[must_use]
    pub fn unconverged(&self) -> usize {
        self.converged.iter().filter(|&&c| !c).count()
    }
}

/// Errors that abort a polar batch.
#[derive(Debug, Error)]
pub enum PolarError {
    /// Target and Reynolds arrays have different lengths.
    #[error("length mismatch: {targets} targets but {re_values} Reynolds numbers")]
    LengthMismatch { targets: usize, re_values: usize },

    /// A station's flow condition is invalid.
    #[error("station {station}")]
    Flow {
        station: usize,
        #[source]
        source: FlowError,
    },

    /// The alpha solve for a station failed.
    #[error("station {station}")]
    Solve {
        station: usize,
        #[source]
        source: AlphaSolveError,
    },

    /// The aerodynamic model failed during a sweep.
    #[error("aerodynamic model failed")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn check_lengths(targets: usize, re_values: usize) -> Result<(), PolarError> {
    if targets == re_values {
        Ok(())
    } else {
        Err(PolarError::LengthMismatch { targets, re_values })
    }
}

/// Finds the angle of attack for each `(cl, re)` station.
///
/// Non-convergence at a station is not an error; the last evaluated point is
/// recorded and its `converged` flag is false.
///
/// # Errors
///
/// Returns a [`PolarError`] on mismatched lengths, an invalid flow condition,
/// or a solver/model failure. The whole batch is discarded.
pub fn analyze_at_cls<M: AeroModel>(
    airfoil: &Airfoil,
    cl_values: &[f64],
    re_values: &[f64],
    settings: &AnalysisSettings,
    config: &AlphaSolverConfig,
    model: &M,
) -> Result<FoilPolar, PolarError> {
    check_lengths(cl_values.len(), re_values.len())?;

    let mut polar = FoilPolar::with_capacity(cl_values.len());
    for (station, (&target_cl, &reynolds)) in cl_values.iter().zip(re_values).enumerate() {
        let flow = settings
            .flow_at(reynolds)
            .map_err(|source| PolarError::Flow { station, source })?;
        let result = solve_for_cl(target_cl, flow, airfoil, model, config)
            .map_err(|source| PolarError::Solve { station, source })?;
        polar.push(&result.point, result.converged);
    }

    info!(
        stations = polar.len(),
        unconverged = polar.unconverged(),
        "lift polar complete"
    );
    Ok(polar)
}

/// Evaluates the model directly at each `(alpha, re)` station.
///
/// Angles are in degrees. Stations are passed to the model as one batch
/// through [`AeroModel::evaluate_many`].
///
/// # Errors
///
/// Returns a [`PolarError`] on mismatched lengths, an invalid flow condition,
/// or a model failure.
pub fn analyze_at_alphas<M: AeroModel>(
    airfoil: &Airfoil,
    alpha_values: &[f64],
    re_values: &[f64],
    settings: &AnalysisSettings,
    model: &M,
) -> Result<FoilPolar, PolarError> {
    check_lengths(alpha_values.len(), re_values.len())?;

    let stations = alpha_values
        .iter()
        .zip(re_values)
        .enumerate()
        .map(|(station, (&alpha, &reynolds))| {
            let flow = settings
                .flow_at(reynolds)
                .map_err(|source| PolarError::Flow { station, source })?;
            Ok((Angle::new::<degree>(alpha), flow))
        })
        .collect::<Result<Vec<_>, PolarError>>()?;

    let points = model
        .evaluate_many(airfoil, &stations)
        .map_err(|err| PolarError::Model(Box::new(err)))?;

    let mut polar = FoilPolar::with_capacity(points.len());
    for point in &points {
        polar.push(point, true);
    }

    info!(stations = polar.len(), "alpha polar complete");
    Ok(polar)
}
