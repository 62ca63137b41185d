//! Boundary between the plotting core and whatever draws the curves.
use crate::errors::RenderError;
use crate::plotter::Curve;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle of a rendered figure, only used to dispose or replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureHandle(pub u64);

impl fmt::Display for FigureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "figure #{}", self.0)
    }
}

/// Title, axis labels and legend of the combined figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub need_legend: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            title: "Function graphs".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            need_legend: true,
            width: 800,
            height: 600,
        }
    }
}

/// Everything a renderer needs to draw one figure.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub options: &'a FigureOptions,
    /// `[min, max)` of the sampled axis, used when there is nothing to draw
    pub domain: (f64, f64),
    pub curves: &'a [Curve],
}

pub trait Renderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<FigureHandle, RenderError>;

    fn dispose(&mut self, _handle: FigureHandle) {}
}

/// What a [`RecordingRenderer`] saw for one `render` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFigure {
    pub handle: FigureHandle,
    pub title: String,
    pub labels: Vec<String>,
    pub points: Vec<usize>,
}

/// Headless renderer keeping a log of requests, for scripting and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    next_handle: u64,
    pub figures: Vec<RecordedFigure>,
    pub disposed: Vec<FigureHandle>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&RecordedFigure> {
        self.figures.last()
    }

    /// Figures rendered and not yet disposed.
    pub fn live(&self) -> Vec<FigureHandle> {
        self.figures
            .iter()
            .map(|f| f.handle)
            .filter(|h| !self.disposed.contains(h))
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<FigureHandle, RenderError> {
        self.next_handle += 1;
        let handle = FigureHandle(self.next_handle);
        self.figures.push(RecordedFigure {
            handle,
            title: request.options.title.clone(),
            labels: request.curves.iter().map(|c| c.label.clone()).collect(),
            points: request.curves.iter().map(|c| c.y.len()).collect(),
        });
        debug!("recorded {} with {} curves", handle, request.curves.len());
        Ok(handle)
    }

    fn dispose(&mut self, handle: FigureHandle) {
        self.disposed.push(handle);
    }
}
