use serde::{Deserialize, Serialize};
use twine_core::Model;
use uom::si::f64::Angle;

use crate::support::geometry::Airfoil;

use super::{FlowCondition, OperatingPoint};

/// An aerodynamic evaluator for a single airfoil section.
///
/// Implementations are treated as black boxes by the solvers in this crate:
/// they are called repeatedly with different angles of attack and must be
/// deterministic for identical inputs. Errors abort the surrounding batch.
pub trait AeroModel {
    /// Failure raised by the evaluator (e.g., degenerate geometry).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the airfoil at one angle of attack and flow condition.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error if the point cannot be evaluated.
    fn evaluate(
        &self,
        airfoil: &Airfoil,
        alpha: Angle,
        flow: &FlowCondition,
    ) -> Result<OperatingPoint, Self::Error>;

    /// Evaluates a batch of stations, preserving their order.
    ///
    /// The default implementation calls [`AeroModel::evaluate`] once per
    /// station. Evaluators with vectorized inputs should override it.
    ///
    /// # Errors
    ///
    /// Returns the first evaluator error encountered.
    fn evaluate_many(
        &self,
        airfoil: &Airfoil,
        stations: &[(Angle, FlowCondition)],
    ) -> Result<Vec<OperatingPoint>, Self::Error> {
        stations
            .iter()
            .map(|(alpha, flow)| self.evaluate(airfoil, *alpha, flow))
            .collect()
    }
}

/// Surrogate model capacity, from fastest to most accurate.
///
/// Evaluators are free to interpret this as they see fit.
/// [`ThinAirfoil`](super::ThinAirfoil) uses it to pick its integration resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    XXSmall,
    XSmall,
    Small,
    Medium,
    Large,
    #[default]
    XLarge,
    XXLarge,
    XXXLarge,
}

/// Binds an [`AeroModel`] to one airfoil and flow condition.
///
/// The resulting [`Model`] takes the angle of attack as its only input,
/// which is the shape iterative solvers expect.
#[derive(Debug, Clone, Copy)]
pub struct FoilModel<'a, M> {
    model: &'a M,
    airfoil: &'a Airfoil,
    flow: FlowCondition,
}

impl<'a, M> FoilModel<'a, M> {
    pub fn new(model: &'a M, airfoil: &'a Airfoil, flow: FlowCondition) -> Self {
        Self {
            model,
            airfoil,
            flow,
        }
    }

    /// The bound flow condition.
    pub fn flow(&self) -> &FlowCondition {
        &self.flow
    }
}

impl<M: AeroModel> Model for FoilModel<'_, M> {
    type Input = Angle;
    type Output = OperatingPoint;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.model.evaluate(self.airfoil, *input, &self.flow)
    }
}
