//! Recording surface used by the tests

use std::{thread, time::Duration};

use super::{RenderError, SeriesHandle, SeriesKind, Surface};
use crate::{joint_ctrl::ActivityLabel, scene::Point};

/// A surface which records everything submitted to it.
#[derive(Debug, Default)]
pub struct MockSurface {
    /// Every static series submitted, in order.
    pub static_series: Vec<(SeriesKind, Vec<Point>)>,

    /// Current point of each dynamic series.
    pub dynamic_series: Vec<(SeriesKind, Option<Point>)>,

    /// Position of the first dynamic series at every successful redraw.
    pub frames: Vec<Option<Point>>,

    /// Activity shown at every successful redraw.
    pub frame_activity: Vec<ActivityLabel>,

    pub activity: ActivityLabel,

    pub warning: Option<String>,

    pub redraws: usize,

    /// Number of upcoming redraws which fail with a backend error.
    pub fail_next_redraws: usize,

    pub quit: bool,

    /// Report a quit request after this many calls to `quit_requested`.
    pub quit_after: Option<usize>,

    /// Number of calls to `quit_requested`.
    pub quit_polls: usize,

    /// Time every successful redraw blocks for.
    pub redraw_delay: Option<Duration>,
}

impl Surface for MockSurface {
    fn add_static_series(
        &mut self,
        kind: SeriesKind,
        points: Vec<Point>,
    ) -> Result<SeriesHandle, RenderError> {
        self.static_series.push((kind, points));
        Ok(SeriesHandle(self.static_series.len() - 1))
    }

    fn add_dynamic_series(&mut self, kind: SeriesKind) -> Result<SeriesHandle, RenderError> {
        self.dynamic_series.push((kind, None));
        Ok(SeriesHandle(1000 + self.dynamic_series.len() - 1))
    }

    fn update_series(&mut self, handle: SeriesHandle, point: Point) -> Result<(), RenderError> {
        if handle.0 < 1000 {
            return Err(RenderError::StaticSeries(handle));
        }

        match self.dynamic_series.get_mut(handle.0 - 1000) {
            Some(s) => {
                s.1 = Some(point);
                Ok(())
            }
            None => Err(RenderError::UnknownSeries(handle)),
        }
    }

    fn set_activity(&mut self, activity: ActivityLabel) {
        self.activity = activity;
    }

    fn set_warning(&mut self, warning: Option<String>) {
        self.warning = warning;
    }

    fn request_redraw(&mut self) -> Result<(), RenderError> {
        if self.fail_next_redraws > 0 {
            self.fail_next_redraws -= 1;
            return Err(RenderError::Backend(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock backend failure",
            )));
        }

        if let Some(delay) = self.redraw_delay {
            thread::sleep(delay);
        }

        self.redraws += 1;
        self.frames
            .push(self.dynamic_series.first().and_then(|s| s.1));
        self.frame_activity.push(self.activity);

        Ok(())
    }

    fn quit_requested(&mut self) -> bool {
        self.quit_polls += 1;

        if let Some(n) = self.quit_after {
            if self.quit_polls > n {
                self.quit = true;
            }
        }

        self.quit
    }
}
