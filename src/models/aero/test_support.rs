use std::cell::RefCell;
use std::f64::consts::PI;
use std::io;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use uom::si::{angle::degree, f64::Angle};

use crate::support::geometry::Airfoil;

use super::{AeroModel, FlowCondition, OperatingPoint};

/// Lift linear in alpha: `CL = slope * (alpha - alpha_zero)`, with optional saturation.
#[derive(Debug)]
pub(super) struct LinearLift {
    /// Lift slope per degree.
    pub slope: f64,
    /// Zero-lift angle in degrees.
    pub alpha_zero: f64,
    /// Magnitude cap on CL, if any.
    pub cl_max: Option<f64>,
    /// Every alpha the model was called with, in degrees.
    pub calls: RefCell<Vec<f64>>,
}

impl Default for LinearLift {
    fn default() -> Self {
        Self::with_slope(0.1)
    }
}

impl LinearLift {
    pub(super) fn with_slope(slope: f64) -> Self {
        Self {
            slope,
            alpha_zero: 0.0,
            cl_max: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(super) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// A placeholder operating point with fixed drag, moment and transition.
    pub(super) fn point(alpha_deg: f64, cl: f64) -> OperatingPoint {
        OperatingPoint::new(alpha_deg, cl, 0.01, -0.05, 0.5, 0.6).unwrap()
    }
}

impl AeroModel for LinearLift {
    type Error = std::convert::Infallible;

    fn evaluate(
        &self,
        _airfoil: &Airfoil,
        alpha: Angle,
        _flow: &FlowCondition,
    ) -> Result<OperatingPoint, Self::Error> {
        let alpha_deg = alpha.get::<degree>();
        self.calls.borrow_mut().push(alpha_deg);

        let cl = self.slope * (alpha_deg - self.alpha_zero);
        let cl = match self.cl_max {
            Some(cap) => cl.clamp(-cap, cap),
            None => cl,
        };
        Ok(Self::point(alpha_deg, cl))
    }
}

#[derive(Debug, Error)]
#[error("evaluator exploded")]
pub(super) struct Exploded;

/// Fails on every call.
pub(super) struct Failing;

impl AeroModel for Failing {
    type Error = Exploded;

    fn evaluate(
        &self,
        _airfoil: &Airfoil,
        _alpha: Angle,
        _flow: &FlowCondition,
    ) -> Result<OperatingPoint, Self::Error> {
        Err(Exploded)
    }
}

/// NACA 4-digit section with cosine spacing, ordered TE-upper-LE-lower-TE.
pub(super) fn naca4(camber: f64, camber_pos: f64, thickness: f64, n: usize) -> Airfoil {
    let stations: Vec<f64> = (0..=n)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / n as f64).cos()))
        .collect();

    let surface = |x: f64| {
        let t = 5.0
            * thickness
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4));
        let (yc, dyc) = if camber == 0.0 {
            (0.0, 0.0)
        } else if x < camber_pos {
            (
                camber / camber_pos.powi(2) * (2.0 * camber_pos * x - x.powi(2)),
                2.0 * camber / camber_pos.powi(2) * (camber_pos - x),
            )
        } else {
            (
                camber / (1.0 - camber_pos).powi(2)
                    * (1.0 - 2.0 * camber_pos + 2.0 * camber_pos * x - x.powi(2)),
                2.0 * camber / (1.0 - camber_pos).powi(2) * (camber_pos - x),
            )
        };
        let theta = dyc.atan();
        (
            [x - t * theta.sin(), yc + t * theta.cos()],
            [x + t * theta.sin(), yc - t * theta.cos()],
        )
    };

    let upper = stations.iter().rev().map(|&x| surface(x).0);
    let lower = stations.iter().skip(1).map(|&x| surface(x).1);
    Airfoil::from_points(upper.chain(lower).collect()).unwrap()
}

pub(super) fn symmetric_foil() -> Airfoil {
    naca4(0.0, 0.0, 0.12, 80)
}

pub(super) fn cambered_foil() -> Airfoil {
    naca4(0.02, 0.4, 0.12, 80)
}

/// Shared in-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a thread-local subscriber and returns its formatted logs.
pub(super) fn capture_logs<T>(level: Level, f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (value, logs)
}
