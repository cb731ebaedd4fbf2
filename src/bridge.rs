//! JSON framing for the `foil-bridge` process interface.
//!
//! One [`Request`] is read per invocation and exactly one [`Response`] is
//! written back. Every failure becomes a response with `success: false` and
//! empty arrays, so callers always receive a JSON object.

mod request;
mod response;

pub use request::{Mode, Request};
pub use response::Response;

use thiserror::Error;

use crate::{
    models::aero::{
        AlphaSolverConfig, ThinAirfoil,
        polar::{FoilPolar, PolarError, analyze_at_alphas, analyze_at_cls},
    },
    support::geometry::{Airfoil, GeometryError},
};

/// Errors raised while handling a bridge request.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The request is not valid JSON or does not match the request schema.
    #[error("invalid request")]
    Json(#[from] serde_json::Error),

    /// A field required by the selected mode is absent.
    #[error("missing field `{field}` required by {mode} mode")]
    MissingField { field: &'static str, mode: Mode },

    /// The airfoil contour is invalid.
    #[error("invalid airfoil geometry")]
    Geometry(#[from] GeometryError),

    /// The batch analysis failed.
    #[error("analysis failed")]
    Polar(#[from] PolarError),
}

/// Parses a request from JSON text.
///
/// # Errors
///
/// Returns [`BridgeError::Json`] on malformed input.
pub fn parse(input: &str) -> Result<Request, BridgeError> {
    Ok(serde_json::from_str(input)?)
}

/// Runs a request against the built-in [`ThinAirfoil`] model.
///
/// # Errors
///
/// Returns a [`BridgeError`] if a required field is missing, the geometry is
/// invalid, or the analysis fails.
pub fn handle(request: &Request, config: &AlphaSolverConfig) -> Result<FoilPolar, BridgeError> {
    let airfoil = Airfoil::new(&request.x_coords, &request.y_coords)?;
    let settings = request.settings();
    let model = ThinAirfoil::new(request.model_size);

    let polar = match request.mode {
        Mode::Cl => {
            let cl_values = request.cl_values.as_deref().ok_or(BridgeError::MissingField {
                field: "cl_values",
                mode: Mode::Cl,
            })?;
            analyze_at_cls(
                &airfoil,
                cl_values,
                &request.re_values,
                &settings,
                config,
                &model,
            )?
        }
        Mode::Alpha => {
            let alpha_values =
                request
                    .alpha_values
                    .as_deref()
                    .ok_or(BridgeError::MissingField {
                        field: "alpha_values",
                        mode: Mode::Alpha,
                    })?;
            analyze_at_alphas(&airfoil, alpha_values, &request.re_values, &settings, &model)?
        }
    };
    Ok(polar)
}

/// Parses, runs, and wraps one request, rendering any error into the envelope.
#[must_use]
pub fn respond(input: &str, config: &AlphaSolverConfig) -> Response {
    match parse(input).and_then(|request| handle(&request, config)) {
        Ok(polar) => Response::success(polar),
        Err(err) => Response::failure(&err),
    }
}
