//! # Terminal surface
//!
//! [`Surface`] implementation drawing the configuration space plot into a terminal with ratatui.
//!
//! Layout, top to bottom:
//!
//! - the joint activity indicator,
//! - the plot, with the marker position in the title,
//! - the warning line (empty when there's no warning),
//! - the about line.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::{
    io::{self, Stdout},
    str::FromStr,
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame, Terminal,
};

use super::{
    Params, RenderError, SeriesHandle, SeriesKind, Surface, MAX_GRID_LINES_PER_SIDE,
};
use crate::{joint_ctrl::ActivityLabel, scene::Point};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

const PLOT_TITLE: &str = "Configuration space of a 2R robot";

/// One line about text and key help, shown under the plot.
const ABOUT_TEXT: &str =
    "The configuration space of a 2R robot as a 2D plot. Left stick drives J1 and J2 | q: quit";

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Colours used by the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub axes: Color,
    pub grid: Color,
    pub obstacle: Color,
    pub start: Color,
    pub goal: Color,
    pub marker: Color,
}

/// A terminal plot surface.
pub struct TermSurface<B: Backend> {
    terminal: Terminal<B>,

    theme: Theme,

    axis_limit_rad: f64,

    grid_spacing_rad: f64,

    series: Vec<SeriesData>,

    activity: ActivityLabel,

    warning: Option<String>,

    /// Set when the surface put the real terminal into raw mode and must restore it.
    owns_terminal: bool,

    quit: bool,
}

#[derive(Debug)]
struct SeriesData {
    kind: SeriesKind,

    points: Vec<Point>,

    dynamic: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Theme {
    /// Parse the theme colours from the surface parameters.
    pub fn from_params(params: &Params) -> Result<Self, RenderError> {
        Ok(Self {
            background: parse_colour("background", &params.background)?,
            axes: parse_colour("axes", &params.axes)?,
            grid: parse_colour("grid", &params.grid)?,
            obstacle: parse_colour("obstacle", &params.obstacle)?,
            start: parse_colour("start", &params.start)?,
            goal: parse_colour("goal", &params.goal)?,
            marker: parse_colour("marker", &params.marker)?,
        })
    }

    fn series_colour(&self, kind: SeriesKind) -> Color {
        match kind {
            SeriesKind::Obstacles => self.obstacle,
            SeriesKind::Start => self.start,
            SeriesKind::Goal => self.goal,
            SeriesKind::Marker => self.marker,
        }
    }
}

impl TermSurface<CrosstermBackend<Stdout>> {
    /// Create a surface on the process's terminal.
    ///
    /// The terminal is switched to raw mode on the alternate screen, and restored when the
    /// surface is dropped. Key presses are read by [`Surface::quit_requested`].
    pub fn stdout(params: &Params) -> Result<Self, RenderError> {
        params.validate().map_err(RenderError::InvalidParams)?;
        let theme = Theme::from_params(params)?;

        enable_raw_mode().map_err(RenderError::Backend)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(RenderError::Backend(e));
        }

        let mut surface = match Self::with_theme(CrosstermBackend::new(stdout), theme, params) {
            Ok(s) => s,
            Err(e) => {
                restore_terminal();
                return Err(e);
            }
        };
        surface.owns_terminal = true;

        surface.terminal.clear().map_err(RenderError::Backend)?;

        Ok(surface)
    }
}

impl<B: Backend> TermSurface<B> {
    /// Create a surface on the given backend.
    pub fn new(backend: B, params: &Params) -> Result<Self, RenderError> {
        params.validate().map_err(RenderError::InvalidParams)?;
        let theme = Theme::from_params(params)?;

        Self::with_theme(backend, theme, params)
    }

    fn with_theme(backend: B, theme: Theme, params: &Params) -> Result<Self, RenderError> {
        let terminal = Terminal::new(backend).map_err(RenderError::Backend)?;

        Ok(Self {
            terminal,
            theme,
            axis_limit_rad: params.axis_limit_rad,
            grid_spacing_rad: params.grid_spacing_rad,
            series: Vec::new(),
            activity: ActivityLabel::default(),
            warning: None,
            owns_terminal: false,
            quit: false,
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    fn add_series(&mut self, kind: SeriesKind, points: Vec<Point>, dynamic: bool) -> SeriesHandle {
        self.series.push(SeriesData {
            kind,
            points,
            dynamic,
        });

        SeriesHandle(self.series.len() - 1)
    }

    /// Read all pending key events, latching the quit flag on `q`, `Esc` or `Ctrl+C`.
    fn read_key_events(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => (),
                Ok(false) => break,
                Err(e) => {
                    warn!("Could not poll terminal events: {}", e);
                    break;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    _ => (),
                },
                Ok(_) => (),
                Err(e) => {
                    warn!("Could not read terminal event: {}", e);
                    break;
                }
            }
        }
    }
}

impl<B: Backend> Surface for TermSurface<B> {
    fn add_static_series(
        &mut self,
        kind: SeriesKind,
        points: Vec<Point>,
    ) -> Result<SeriesHandle, RenderError> {
        Ok(self.add_series(kind, points, false))
    }

    fn add_dynamic_series(&mut self, kind: SeriesKind) -> Result<SeriesHandle, RenderError> {
        Ok(self.add_series(kind, Vec::with_capacity(1), true))
    }

    fn update_series(&mut self, handle: SeriesHandle, point: Point) -> Result<(), RenderError> {
        let series = self
            .series
            .get_mut(handle.0)
            .ok_or(RenderError::UnknownSeries(handle))?;

        if !series.dynamic {
            return Err(RenderError::StaticSeries(handle));
        }

        series.points.clear();
        series.points.push(point);

        Ok(())
    }

    fn set_activity(&mut self, activity: ActivityLabel) {
        self.activity = activity;
    }

    fn set_warning(&mut self, warning: Option<String>) {
        self.warning = warning;
    }

    fn request_redraw(&mut self) -> Result<(), RenderError> {
        let Self {
            terminal,
            theme,
            axis_limit_rad,
            grid_spacing_rad,
            series,
            activity,
            warning,
            ..
        } = self;

        let view = View {
            theme,
            axis_limit_rad: *axis_limit_rad,
            grid_spacing_rad: *grid_spacing_rad,
            series,
            activity: *activity,
            warning: warning.as_deref(),
        };

        terminal
            .draw(|frame| view.draw(frame))
            .map(|_| ())
            .map_err(RenderError::Backend)
    }

    fn quit_requested(&mut self) -> bool {
        if self.owns_terminal && !self.quit {
            self.read_key_events();
        }

        self.quit
    }
}

impl<B: Backend> Drop for TermSurface<B> {
    fn drop(&mut self) {
        if self.owns_terminal {
            restore_terminal();
            self.terminal.show_cursor().ok();
        }
    }
}

// ------------------------------------------------------------------------------------------------
// DRAWING
// ------------------------------------------------------------------------------------------------

/// Borrowed view of everything drawn in one frame.
struct View<'a> {
    theme: &'a Theme,
    axis_limit_rad: f64,
    grid_spacing_rad: f64,
    series: &'a [SeriesData],
    activity: ActivityLabel,
    warning: Option<&'a str>,
}

impl<'a> View<'a> {
    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(Paragraph::new(self.activity_line()), chunks[0]);
        frame.render_widget(self.plot(), chunks[1]);

        if let Some(warning) = self.warning {
            frame.render_widget(
                Paragraph::new(warning).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                chunks[2],
            );
        }

        frame.render_widget(
            Paragraph::new(ABOUT_TEXT).style(Style::default().fg(self.theme.axes)),
            chunks[3],
        );
    }

    /// "Joints: J1 | J2", with the actively driven joints emphasised.
    fn activity_line(&self) -> Line<'static> {
        let joint_style = |active: bool| {
            if active {
                Style::default()
                    .fg(self.theme.axes)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            }
            else {
                Style::default().fg(self.theme.axes).add_modifier(Modifier::DIM)
            }
        };

        Line::from(vec![
            Span::styled("Joints:   ", Style::default().fg(self.theme.axes)),
            Span::styled(" J1 ", joint_style(self.activity.axis1_active)),
            Span::raw(" | "),
            Span::styled(" J2 ", joint_style(self.activity.axis2_active)),
        ])
    }

    fn plot(&self) -> impl ratatui::widgets::Widget + '_ {
        let lim = self.axis_limit_rad;

        let title = match self.marker_position() {
            Some((t1, t2)) => format!(
                " {} - theta1 = {:+.3} rad, theta2 = {:+.3} rad ",
                PLOT_TITLE, t1, t2
            ),
            None => format!(" {} ", PLOT_TITLE),
        };

        Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.axes))
                    .title(title),
            )
            .background_color(self.theme.background)
            .marker(Marker::Braille)
            .x_bounds([-lim, lim])
            .y_bounds([-lim, lim])
            .paint(move |ctx| {
                // Grid
                for g in grid_lines(lim, self.grid_spacing_rad) {
                    ctx.draw(&CanvasLine::new(g, -lim, g, lim, self.theme.grid));
                    ctx.draw(&CanvasLine::new(-lim, g, lim, g, self.theme.grid));
                }

                // Obstacles as dots, on their own layer below the markers
                for s in self.series.iter().filter(|s| s.kind == SeriesKind::Obstacles) {
                    ctx.draw(&Points {
                        coords: &s.points,
                        color: self.theme.series_colour(s.kind),
                    });
                }
                ctx.layer();

                for s in self.series.iter().filter(|s| s.kind != SeriesKind::Obstacles) {
                    let glyph = match s.kind {
                        SeriesKind::Start => "o",
                        SeriesKind::Goal => "x",
                        _ => "@",
                    };
                    let style = Style::default()
                        .fg(self.theme.series_colour(s.kind))
                        .add_modifier(Modifier::BOLD);

                    for &(x, y) in &s.points {
                        ctx.print(x, y, Span::styled(glyph, style));
                    }
                }
            })
    }

    fn marker_position(&self) -> Option<Point> {
        self.series
            .iter()
            .find(|s| s.kind == SeriesKind::Marker)
            .and_then(|s| s.points.first().copied())
    }
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn parse_colour(name: &'static str, value: &str) -> Result<Color, RenderError> {
    Color::from_str(value).map_err(|_| RenderError::InvalidColour {
        name,
        value: value.to_string(),
    })
}

/// Grid line positions: multiples of `spacing` strictly inside `(-limit, limit)`, at most
/// `MAX_GRID_LINES_PER_SIDE` each side of zero.
fn grid_lines(limit: f64, spacing: f64) -> Vec<f64> {
    if !(spacing > 0.0) || !limit.is_finite() {
        return Vec::new();
    }

    let n = (limit / spacing).ceil().min(MAX_GRID_LINES_PER_SIDE) as i64;

    (-n..=n)
        .map(|i| i as f64 * spacing)
        .filter(|g| g.abs() < limit)
        .collect()
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
