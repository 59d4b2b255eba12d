//! Parameters structure for the static scene

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters describing the static scene.
///
/// All coordinates are in configuration space.
///
/// Units: radians
#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    /// Obstacles, drawn in the order given.
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,

    /// Start configuration `[theta1, theta2]`.
    pub start: [f64; 2],

    /// Goal configuration `[theta1, theta2]`.
    pub goal: [f64; 2],
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// A single obstacle shape. `(x, y)` is always the centre of the shape.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ObstacleSpec {
    Rectangle { x: f64, y: f64, w: f64, h: f64 },
    Circle { x: f64, y: f64, r: f64 },
    RegularPolygon { x: f64, y: f64, n: usize, r: f64 },
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            obstacles: vec![
                ObstacleSpec::Rectangle { x: -3.0, y: 3.0, w: 2.0, h: 2.0 },
                ObstacleSpec::Circle { x: 2.0, y: 2.0, r: 1.0 },
                ObstacleSpec::RegularPolygon { x: -2.0, y: -2.0, n: 5, r: 2.0 },
                ObstacleSpec::RegularPolygon { x: 4.0, y: -4.0, n: 3, r: 2.0 },
            ],
            start: [0.0, 0.0],
            goal: [5.0, 5.0],
        }
    }
}
