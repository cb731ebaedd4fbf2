use std::f64::consts::PI;

use crate::support::geometry::Airfoil;

/// Half-width of the finite-difference stencil for camber slope, in `x/c`.
const SLOPE_STEP: f64 = 1e-3;

/// Thin-airfoil properties of a mean camber line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CamberLine {
    /// Zero-lift angle of attack, in radians.
    pub alpha_zero_lift: f64,

    /// Incompressible quarter-chord moment coefficient.
    pub cm_quarter_chord: f64,
}

impl CamberLine {
    /// Evaluates the Glauert integrals with `panels` midpoint samples in θ,
    /// where `x/c = (1 - cos θ) / 2`.
    pub(super) fn new(airfoil: &Airfoil, panels: usize) -> Self {
        let d_theta = PI / panels as f64;

        let (mut zero_lift, mut a1, mut a2) = (0.0, 0.0, 0.0);
        for i in 0..panels {
            let theta = (i as f64 + 0.5) * d_theta;
            let slope = camber_slope(airfoil, 0.5 * (1.0 - theta.cos()));
            zero_lift += slope * (theta.cos() - 1.0) * d_theta;
            a1 += slope * theta.cos() * d_theta;
            a2 += slope * (2.0 * theta).cos() * d_theta;
        }

        let a1 = 2.0 / PI * a1;
        let a2 = 2.0 / PI * a2;

        Self {
            alpha_zero_lift: -zero_lift / PI,
            cm_quarter_chord: PI / 4.0 * (a2 - a1),
        }
    }
}

/// Central-difference camber slope `dz/dx`, one-sided at the ends.
fn camber_slope(airfoil: &Airfoil, xc: f64) -> f64 {
    let lo = (xc - SLOPE_STEP).max(0.0);
    let hi = (xc + SLOPE_STEP).min(1.0);
    (airfoil.camber_at(hi) - airfoil.camber_at(lo)) / (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::aero::test_support::{cambered_foil, naca4, symmetric_foil};

    #[test]
    fn symmetric_section_has_no_camber_effects() {
        let camber = CamberLine::new(&symmetric_foil(), 96);
        assert_relative_eq!(camber.alpha_zero_lift, 0.0, epsilon = 1e-9);
        assert_relative_eq!(camber.cm_quarter_chord, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn naca_2412_matches_thin_airfoil_theory() {
        // Closed-form thin-airfoil values for the NACA 2412 mean line.
        let camber = CamberLine::new(&cambered_foil(), 192);
        assert_relative_eq!(camber.alpha_zero_lift.to_degrees(), -2.08, epsilon = 0.1);
        assert_relative_eq!(camber.cm_quarter_chord, -0.053, epsilon = 0.005);
    }

    #[test]
    fn more_camber_shifts_zero_lift_further() {
        let mild = CamberLine::new(&naca4(0.02, 0.4, 0.12, 80), 96);
        let strong = CamberLine::new(&naca4(0.04, 0.4, 0.12, 80), 96);
        assert!(strong.alpha_zero_lift < mild.alpha_zero_lift);
        assert!(strong.cm_quarter_chord < mild.cm_quarter_chord);
    }
}
