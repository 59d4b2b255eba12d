//! # Obstacle geometry
//!
//! Functions producing the boundary of simple shapes as a sequence of points. Every boundary is
//! closed, i.e. the last point equals the first.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::f64::consts::{FRAC_PI_2, TAU};

use super::Point;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of points sampled along each straight edge, excluding the edge's end vertex.
pub const POINTS_PER_EDGE: usize = 25;

/// Number of points sampled around a circle, excluding the closing point.
pub const POINTS_PER_CIRCLE: usize = 100;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("Shape dimension {name} must be finite and positive, found {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Shape centre must be finite, found ({0}, {1})")]
    InvalidCentre(f64, f64),

    #[error("A regular polygon needs at least 3 sides, found {0}")]
    TooFewSides(usize),
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Boundary of an axis aligned rectangle centred on `(x, y)` with width `w` and height `h`.
pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Result<Vec<Point>, GeometryError> {
    check_centre(x, y)?;
    check_dimension("w", w)?;
    check_dimension("h", h)?;

    let (hw, hh) = (0.5 * w, 0.5 * h);
    let corners = [
        (x - hw, y - hh),
        (x + hw, y - hh),
        (x + hw, y + hh),
        (x - hw, y + hh),
    ];

    Ok(sample_closed_polyline(&corners))
}

/// Boundary of a circle centred on `(x, y)` with radius `r`.
pub fn circle(x: f64, y: f64, r: f64) -> Result<Vec<Point>, GeometryError> {
    check_centre(x, y)?;
    check_dimension("r", r)?;

    let mut points: Vec<Point> = (0..POINTS_PER_CIRCLE)
        .map(|i| {
            let a = TAU * i as f64 / POINTS_PER_CIRCLE as f64;
            (x + r * a.cos(), y + r * a.sin())
        })
        .collect();
    points.push(points[0]);

    Ok(points)
}

/// Boundary of a regular `n` sided polygon centred on `(x, y)`, with its vertices on a circle of
/// radius `r` and the first vertex straight up.
pub fn regular_polygon(x: f64, y: f64, n: usize, r: f64) -> Result<Vec<Point>, GeometryError> {
    check_centre(x, y)?;
    check_dimension("r", r)?;
    if n < 3 {
        return Err(GeometryError::TooFewSides(n));
    }

    let vertices: Vec<Point> = (0..n)
        .map(|i| {
            let a = FRAC_PI_2 + TAU * i as f64 / n as f64;
            (x + r * a.cos(), y + r * a.sin())
        })
        .collect();

    Ok(sample_closed_polyline(&vertices))
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn check_centre(x: f64, y: f64) -> Result<(), GeometryError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    }
    else {
        Err(GeometryError::InvalidCentre(x, y))
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    }
    else {
        Err(GeometryError::InvalidDimension { name, value })
    }
}

/// Sample points along each edge of the closed polygon through `vertices`.
fn sample_closed_polyline(vertices: &[Point]) -> Vec<Point> {
    let mut points = Vec::with_capacity(vertices.len() * POINTS_PER_EDGE + 1);

    for (i, &(x0, y0)) in vertices.iter().enumerate() {
        let (x1, y1) = vertices[(i + 1) % vertices.len()];

        for j in 0..POINTS_PER_EDGE {
            let t = j as f64 / POINTS_PER_EDGE as f64;
            points.push((x0 + t * (x1 - x0), y0 + t * (y1 - y0)));
        }
    }
    points.push(vertices[0]);

    points
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
