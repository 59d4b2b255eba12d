//! # Rendering
//!
//! This module provides the [`Surface`] interface over a retained-mode plotting backend, the
//! [`FramePublisher`] which drives a surface from the joint state, and [`TermSurface`], a
//! terminal backend.
//!
//! A surface holds a number of series. Static series are submitted once with all their points
//! and never change. Dynamic series hold a single point which is moved with
//! [`Surface::update_series`]. Nothing is drawn until [`Surface::request_redraw`] is called.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;
mod publisher;
mod term_surface;

#[cfg(test)]
pub(crate) mod mock;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

pub use params::*;
pub use publisher::*;
pub use term_surface::*;

use crate::{joint_ctrl::ActivityLabel, scene::Point};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Identifies a series on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle(pub usize);

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// The role of a series, which decides how the surface styles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Obstacles,
    Start,
    Goal,
    Marker,
}

/// Errors which can occur when rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("The rendering backend failed: {0}")]
    Backend(std::io::Error),

    #[error("No series exists with handle {0:?}")]
    UnknownSeries(SeriesHandle),

    #[error("Series {0:?} is static and cannot be updated")]
    StaticSeries(SeriesHandle),

    #[error("Invalid surface parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid colour for {name}: {value:?}")]
    InvalidColour { name: &'static str, value: String },
}

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A persistent plot surface.
pub trait Surface {
    /// Add a series whose points never change.
    fn add_static_series(
        &mut self,
        kind: SeriesKind,
        points: Vec<Point>,
    ) -> Result<SeriesHandle, RenderError>;

    /// Add a single point series which can be moved. The point is not drawn until it has been
    /// set with [`Surface::update_series`].
    fn add_dynamic_series(&mut self, kind: SeriesKind) -> Result<SeriesHandle, RenderError>;

    /// Move the point of a dynamic series.
    fn update_series(&mut self, handle: SeriesHandle, point: Point) -> Result<(), RenderError>;

    /// Set the joint activity indicator shown with the plot.
    fn set_activity(&mut self, activity: ActivityLabel);

    /// Set or clear the warning shown to the operator.
    fn set_warning(&mut self, warning: Option<String>);

    /// Draw the current frame.
    ///
    /// May block until the backend has accepted the frame.
    fn request_redraw(&mut self) -> Result<(), RenderError>;

    /// Returns true once the operator has asked to quit through the surface.
    fn quit_requested(&mut self) -> bool;
}
