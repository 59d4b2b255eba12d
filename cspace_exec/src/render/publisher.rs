//! # Frame publisher
//!
//! Owns the surface and the static scene. The scene is submitted to the surface once, when the
//! publisher is created; after that each published frame only moves the operator's marker.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::debug;

use super::{RenderError, SeriesHandle, SeriesKind, Surface};
use crate::{
    joint_ctrl::{ActivityLabel, JointState},
    scene::StaticScene,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Publishes joint states onto a surface.
pub struct FramePublisher<S: Surface> {
    surface: S,

    scene: StaticScene,

    marker: SeriesHandle,

    num_frames: u64,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl<S: Surface> FramePublisher<S> {
    /// Create a new publisher, submitting the static scene to the surface.
    pub fn new(mut surface: S, scene: StaticScene) -> Result<Self, RenderError> {
        surface.add_static_series(SeriesKind::Obstacles, scene.obstacles.clone())?;
        surface.add_static_series(SeriesKind::Start, vec![scene.start])?;
        surface.add_static_series(SeriesKind::Goal, vec![scene.goal])?;

        let marker = surface.add_dynamic_series(SeriesKind::Marker)?;

        debug!(
            "Static scene submitted: {} obstacle points, start {:?}, goal {:?}",
            scene.obstacles.len(),
            scene.start,
            scene.goal
        );

        Ok(Self {
            surface,
            scene,
            marker,
            num_frames: 0,
        })
    }

    /// Move the marker to the given joint state and redraw.
    pub fn publish(&mut self, state: JointState) -> Result<(), RenderError> {
        self.surface.update_series(self.marker, state.as_point())?;
        self.surface.request_redraw()?;

        self.num_frames += 1;

        Ok(())
    }

    /// Update the joint activity indicator, shown on the next frame.
    pub fn show_activity(&mut self, activity: ActivityLabel) {
        self.surface.set_activity(activity);
    }

    /// Show a warning to the operator and redraw so it appears immediately.
    pub fn show_warning(&mut self, warning: &str) -> Result<(), RenderError> {
        self.surface.set_warning(Some(warning.to_string()));
        self.surface.request_redraw()
    }

    /// Returns true if the operator asked to quit through the surface.
    pub fn quit_requested(&mut self) -> bool {
        self.surface.quit_requested()
    }

    /// Number of frames successfully published.
    pub fn num_frames(&self) -> u64 {
        self.num_frames
    }

    pub fn scene(&self) -> &StaticScene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
