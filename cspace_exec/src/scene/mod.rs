//! # Static scene
//!
//! The fixed content of the configuration space plot: the obstacle boundaries, and the start and
//! goal markers. The scene is built once from parameters before the main loop starts and never
//! changes afterwards.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

pub mod geometry;
mod params;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::debug;

pub use geometry::GeometryError;
pub use params::*;

// ------------------------------------------------------------------------------------------------
// TYPES
// ------------------------------------------------------------------------------------------------

/// A point in configuration space, `(theta1, theta2)`.
///
/// Units: radians
pub type Point = (f64, f64);

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Fixed scene content.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticScene {
    /// Boundary points of every obstacle, concatenated.
    pub obstacles: Vec<Point>,

    /// Configuration the arm starts in.
    pub start: Point,

    /// Configuration the operator is trying to reach.
    pub goal: Point,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Obstacle {index} is invalid: {source}")]
    InvalidObstacle {
        index: usize,
        source: GeometryError,
    },

    #[error("The {0} marker must have finite coordinates")]
    InvalidMarker(&'static str),
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl StaticScene {
    /// Build the scene from its parameters.
    pub fn build(params: &Params) -> Result<Self, SceneError> {
        let mut obstacles = Vec::new();

        for (index, spec) in params.obstacles.iter().enumerate() {
            let points = spec
                .boundary()
                .map_err(|source| SceneError::InvalidObstacle { index, source })?;

            debug!("Obstacle {}: {:?}, {} points", index, spec, points.len());

            obstacles.extend(points);
        }

        let start = to_point("start", params.start)?;
        let goal = to_point("goal", params.goal)?;

        Ok(Self {
            obstacles,
            start,
            goal,
        })
    }
}

impl ObstacleSpec {
    /// Generate the boundary of this obstacle.
    pub fn boundary(&self) -> Result<Vec<Point>, GeometryError> {
        match *self {
            ObstacleSpec::Rectangle { x, y, w, h } => geometry::rectangle(x, y, w, h),
            ObstacleSpec::Circle { x, y, r } => geometry::circle(x, y, r),
            ObstacleSpec::RegularPolygon { x, y, n, r } => geometry::regular_polygon(x, y, n, r),
        }
    }
}

fn to_point(name: &'static str, p: [f64; 2]) -> Result<Point, SceneError> {
    if p[0].is_finite() && p[1].is_finite() {
        Ok((p[0], p[1]))
    }
    else {
        Err(SceneError::InvalidMarker(name))
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_default_scene() {
        let scene = StaticScene::build(&Params::default()).unwrap();

        let expected_len = 4 * geometry::POINTS_PER_EDGE
            + geometry::POINTS_PER_CIRCLE
            + 5 * geometry::POINTS_PER_EDGE
            + 3 * geometry::POINTS_PER_EDGE
            + 4;

        assert_eq!(scene.obstacles.len(), expected_len);
        assert_eq!(scene.start, (0.0, 0.0));
        assert_eq!(scene.goal, (5.0, 5.0));
    }

    #[test]
    fn test_build_from_toml() {
        let params: Params = util::params::from_str(
            r#"
            start = [0.0, 0.0]
            goal = [1.0, -1.0]

            [[obstacles]]
            shape = "circle"
            x = 2.0
            y = 2.0
            r = 1.0

            [[obstacles]]
            shape = "regular_polygon"
            x = -2.0
            y = -2.0
            n = 5
            r = 2.0
            "#,
        )
        .unwrap();

        let scene = StaticScene::build(&params).unwrap();

        assert_eq!(
            scene.obstacles.len(),
            geometry::POINTS_PER_CIRCLE + 1 + 5 * geometry::POINTS_PER_EDGE + 1
        );
        assert_eq!(scene.goal, (1.0, -1.0));
    }

    #[test]
    fn test_build_invalid_obstacle() {
        let params = Params {
            obstacles: vec![
                ObstacleSpec::Circle { x: 0.0, y: 0.0, r: 1.0 },
                ObstacleSpec::RegularPolygon { x: 0.0, y: 0.0, n: 1, r: 1.0 },
            ],
            ..Params::default()
        };

        match StaticScene::build(&params) {
            Err(SceneError::InvalidObstacle { index: 1, .. }) => (),
            r => panic!("Expected obstacle 1 to be invalid, got {:?}", r),
        }
    }

    #[test]
    fn test_build_invalid_marker() {
        let params = Params {
            goal: [f64::INFINITY, 0.0],
            ..Params::default()
        };

        assert!(matches!(
            StaticScene::build(&params),
            Err(SceneError::InvalidMarker("goal"))
        ));
    }
}
