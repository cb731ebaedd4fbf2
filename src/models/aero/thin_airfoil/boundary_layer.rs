//! Flat-plate boundary layer estimates.

/// Transition length Reynolds number at the reference `NCrit` of 9.
const TRANSITION_REYNOLDS: f64 = 5.0e5;

/// Growth of the transition Reynolds number per unit of `NCrit`.
const NCRIT_GROWTH: f64 = 1.25;

/// Sensitivity of transition location to lift (pressure gradient).
const LIFT_SENSITIVITY: f64 = 0.8;

/// Earliest natural transition location, `x/c`.
const MIN_TRANSITION: f64 = 0.01;

/// Natural transition locations `(top, bottom)` as chord fractions.
///
/// Transition moves forward on the suction side and aft on the pressure side
/// as lift increases. Higher `NCrit` (quieter flow) delays transition.
pub(super) fn natural_transition(reynolds: f64, n_crit: f64, cl: f64) -> (f64, f64) {
    let x0 = TRANSITION_REYNOLDS * NCRIT_GROWTH.powf(n_crit - 9.0) / reynolds;
    let shift = (LIFT_SENSITIVITY * cl).exp();
    (
        (x0 / shift).clamp(MIN_TRANSITION, 1.0),
        (x0 * shift).clamp(MIN_TRANSITION, 1.0),
    )
}

/// Mean skin friction coefficient of one surface transitioning at `xtr`.
///
/// Composite flat plate: Blasius laminar flow ahead of transition, and a
/// power-law turbulent plate with its virtual laminar length removed.
pub(super) fn skin_friction(reynolds: f64, xtr: f64) -> f64 {
    let turbulent = cf_turbulent(reynolds);
    let re_tr = reynolds * xtr;
    if re_tr < 1.0 {
        return turbulent;
    }
    turbulent - cf_turbulent(re_tr) * xtr + cf_laminar(re_tr) * xtr
}

fn cf_laminar(reynolds: f64) -> f64 {
    1.328 / reynolds.sqrt()
}

fn cf_turbulent(reynolds: f64) -> f64 {
    0.074 / reynolds.powf(0.2)
}

/// Thickness form factor applied to skin friction drag.
pub(super) fn form_factor(thickness: f64) -> f64 {
    1.0 + 2.0 * thickness + 60.0 * thickness.powi(4)
}
