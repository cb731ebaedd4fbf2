//! Airfoil contour geometry.
//!
//! An [`Airfoil`] is a validated closed contour given as parallel `x`/`y`
//! coordinate arrays. Points are ordered from the trailing edge along the
//! upper surface, around the leading edge, and back to the trailing edge
//! along the lower surface. This is the Selig ordering used by most airfoil
//! coordinate files and surrogate aerodynamic models.
//!
//! Chordwise queries take `x/c` in `[0, 1]`, measured from the leading edge
//! (the point with minimum `x`) to the trailing edge (the midpoint of the
//! first and last points). The contour is assumed to be at zero incidence;
//! `y` values are normalized by the same chord.

use thiserror::Error;

/// Minimum number of contour points accepted by [`Airfoil::new`].
pub const MIN_POINTS: usize = 5;

/// Errors raised while validating an airfoil contour.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The coordinate arrays differ in length.
    #[error("x_coords has {x} points but y_coords has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// Too few points to describe upper and lower surfaces.
    #[error("contour has {count} points, at least {MIN_POINTS} are required")]
    TooFewPoints { count: usize },

    /// A coordinate is NaN or infinite.
    #[error("coordinate {index} is not finite")]
    NonFinite { index: usize },

    /// The leading edge is the first or last point, so one surface is missing.
    #[error("leading edge is at contour end (index {index}); expected TE-upper-LE-lower-TE ordering")]
    LeadingEdgeAtEnd { index: usize },

    /// The trailing edge does not lie downstream of the leading edge.
    #[error("chord length {chord} is not positive")]
    DegenerateChord { chord: f64 },

    /// The contour encloses no area or runs clockwise (lower surface first).
    #[error("contour signed area {area} is not positive; expected TE-upper-LE-lower-TE ordering")]
    NotCounterClockwise { area: f64 },
}

/// A validated airfoil contour.
#[derive(Debug, Clone, PartialEq)]
pub struct Airfoil {
    points: Vec<[f64; 2]>,
    le_index: usize,
    x_le: f64,
    y_le: f64,
    chord: f64,
}

impl Airfoil {
    /// Builds an airfoil from parallel coordinate arrays.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the arrays are mismatched, too short,
    /// contain non-finite values, or do not follow the expected ordering.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, GeometryError> {
        if x.len() != y.len() {
            return Err(GeometryError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Self::from_points(x.iter().zip(y).map(|(&x, &y)| [x, y]).collect())
    }

    /// Builds an airfoil from `[x, y]` pairs.
    ///
    /// # Errors
    ///
    /// See [`Airfoil::new`].
    pub fn from_points(points: Vec<[f64; 2]>) -> Result<Self, GeometryError> {
        let count = points.len();
        if count < MIN_POINTS {
            return Err(GeometryError::TooFewPoints { count });
        }

        if let Some(index) = points
            .iter()
            .position(|[x, y]| !x.is_finite() || !y.is_finite())
        {
            return Err(GeometryError::NonFinite { index });
        }

        let le_index = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a[0].total_cmp(&b[0]))
            .map_or(0, |(i, _)| i);
        if le_index == 0 || le_index == count - 1 {
            return Err(GeometryError::LeadingEdgeAtEnd { index: le_index });
        }

        let [x_le, y_le] = points[le_index];
        let x_te = 0.5 * (points[0][0] + points[count - 1][0]);
        let chord = x_te - x_le;
        if chord.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
            return Err(GeometryError::DegenerateChord { chord });
        }

        let area = signed_area(&points);
        if area.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
            return Err(GeometryError::NotCounterClockwise { area });
        }

        Ok(Self {
            points,
            le_index,
            x_le,
            y_le,
            chord,
        })
    }

    /// Number of contour points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid airfoil has at least [`MIN_POINTS`] points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Contour points in input order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Index of the leading edge point.
    #[must_use]
    pub fn leading_edge_index(&self) -> usize {
        self.le_index
    }

    /// Chord length in the coordinate units of the input.
    #[must_use]
    pub fn chord(&self) -> f64 {
        self.chord
    }

    /// Upper surface points, trailing edge to leading edge.
    #[must_use]
    pub fn upper_surface(&self) -> &[[f64; 2]] {
        &self.points[..=self.le_index]
    }

    /// Lower surface points, leading edge to trailing edge.
    #[must_use]
    pub fn lower_surface(&self) -> &[[f64; 2]] {
        &self.points[self.le_index..]
    }

    /// Upper surface height at `x/c`, normalized by chord.
    #[must_use]
    pub fn upper_at(&self, xc: f64) -> f64 {
        self.surface_at(self.upper_surface(), xc)
    }

    /// Lower surface height at `x/c`, normalized by chord.
    #[must_use]
    pub fn lower_at(&self, xc: f64) -> f64 {
        self.surface_at(self.lower_surface(), xc)
    }

    /// Mean camber line height at `x/c`, normalized by chord.
    #[must_use]
    pub fn camber_at(&self, xc: f64) -> f64 {
        0.5 * (self.upper_at(xc) + self.lower_at(xc))
    }

    /// Local thickness at `x/c`, normalized by chord.
    #[must_use]
    pub fn thickness_at(&self, xc: f64) -> f64 {
        self.upper_at(xc) - self.lower_at(xc)
    }

    /// Maximum thickness-to-chord ratio, sampled at `stations` evenly spaced points.
    #[must_use]
    pub fn max_thickness(&self, stations: usize) -> f64 {
        let n = stations.max(2);
        (0..n)
            .map(|i| self.thickness_at(i as f64 / (n - 1) as f64))
            .fold(0.0, f64::max)
    }

    /// Linear interpolation of a surface polyline at `x/c`.
    ///
    /// The first segment spanning the station wins. Stations outside the
    /// polyline's `x` range take the height of the nearest end point.
    fn surface_at(&self, surface: &[[f64; 2]], xc: f64) -> f64 {
        let x = self.x_le + xc.clamp(0.0, 1.0) * self.chord;

        let height = surface
            .windows(2)
            .find_map(|pair| {
                let ([x0, y0], [x1, y1]) = (pair[0], pair[1]);
                let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
                if x < lo || x > hi {
                    return None;
                }
                let span = x1 - x0;
                if span.abs() <= f64::EPSILON * self.chord {
                    Some(0.5 * (y0 + y1))
                } else {
                    Some(y0 + (x - x0) / span * (y1 - y0))
                }
            })
            .unwrap_or_else(|| {
                surface
                    .iter()
                    .min_by(|a, b| (a[0] - x).abs().total_cmp(&(b[0] - x).abs()))
                    .map_or(self.y_le, |p| p[1])
            });

        (height - self.y_le) / self.chord
    }
}

/// Shoelace signed area, positive for counterclockwise contours.
fn signed_area(points: &[[f64; 2]]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let [x0, y0] = points[i];
            let [x1, y1] = points[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    0.5 * twice
}
