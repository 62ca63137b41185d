use crate::errors::RenderError;
use crate::plotter::Curve;
use crate::plotter::render::{FigureHandle, RenderRequest, Renderer};
use itertools::{Itertools, MinMaxResult};
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.svg` gives SVG, anything else PNG
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// Writes every figure to one image file, overwriting the previous figure.
#[derive(Debug, Clone)]
pub struct PlottersRenderer {
    path: PathBuf,
    next_handle: u64,
}

impl PlottersRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_handle: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for PlottersRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Result<FigureHandle, RenderError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let size = (request.options.width, request.options.height);
        match ImageFormat::from_path(&self.path) {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&self.path, size).into_drawing_area();
                draw_figure(&root, request)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&self.path, size).into_drawing_area();
                draw_figure(&root, request)?;
            }
        }
        self.next_handle += 1;
        info!("figure with {} curve(s) written to {}", request.curves.len(), self.path.display());
        Ok(FigureHandle(self.next_handle))
    }

    fn dispose(&mut self, handle: FigureHandle) {
        // the image on disk is replaced by the next render
        debug!("{} released", handle);
    }
}

fn backend<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend(e.to_string())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    request: &RenderRequest<'_>,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(backend)?;
    let (x_min, x_max) = request.domain;
    let (y_min, y_max) = y_range(request.curves);

    let mut chart = ChartBuilder::on(root)
        .caption(&request.options.title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc(&request.options.x_label)
        .y_desc(&request.options.y_label)
        .draw()
        .map_err(backend)?;

    for (i, curve) in request.curves.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        for (k, segment) in segments(curve).into_iter().enumerate() {
            let series = chart
                .draw_series(LineSeries::new(segment, &color))
                .map_err(backend)?;
            // one legend entry per curve, however many pieces it is drawn in
            if k == 0 {
                series
                    .label(curve.label.clone())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
        }
    }

    if request.options.need_legend && !request.curves.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend)?;
    }
    root.present().map_err(backend)?;
    Ok(())
}

/// Runs of finite samples; a NaN or an infinity ends a run.
pub fn segments(curve: &Curve) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (&x, &y) in curve.x.iter().zip(curve.y.iter()) {
        if y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Common y-range of all curves with a 5% margin; `(-1, 1)` around nothing.
pub fn y_range(curves: &[Curve]) -> (f64, f64) {
    let finite = curves
        .iter()
        .flat_map(|c| c.y.iter().copied())
        .filter(|v| v.is_finite());
    let (lo, hi) = match finite.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => (-1.0, 1.0),
        MinMaxResult::OneElement(v) => (v - 1.0, v + 1.0),
        MinMaxResult::MinMax(lo, hi) if lo == hi => (lo - 1.0, hi + 1.0),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_format_by_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.svg")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("a.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("a")), ImageFormat::Png);
    }

    #[test]
    fn test_non_finite_samples_split_the_line() {
        let curve = Curve::new(
            "1/x",
            array![-2.0, -1.0, 0.0, 1.0, 2.0, 3.0],
            array![-0.5, -1.0, f64::INFINITY, 1.0, f64::NAN, 1.0 / 3.0],
        );
        let parts = segments(&curve);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], vec![(-2.0, -0.5), (-1.0, -1.0)]);
        assert_eq!(parts[1], vec![(1.0, 1.0)]);
        assert_eq!(parts[2].len(), 1);
    }

    #[test]
    fn test_y_range() {
        let a = Curve::new("a", array![0.0, 1.0], array![0.0, 10.0]);
        let b = Curve::new("b", array![0.0, 1.0], array![f64::NAN, -10.0]);
        let (lo, hi) = y_range(&[a, b]);
        assert_relative_eq!(lo, -11.0);
        assert_relative_eq!(hi, 11.0);

        let flat = Curve::new("5", array![0.0, 1.0], array![5.0, 5.0]);
        let (lo, hi) = y_range(&[flat]);
        assert!(lo < 5.0 && hi > 5.0);
        let (lo, hi) = y_range(&[]);
        assert_relative_eq!(lo, -1.1, epsilon = 1e-12);
        assert_relative_eq!(hi, 1.1, epsilon = 1e-12);
    }
}
