//! The expression-to-plot pipeline.
///______________________________________________________________________________________________________________________________
/// # Domain sampling
/// ```
/// use RustedFuncPlot::plotter::domain::sample;
/// let x = sample(0.0, 1.0, 0.25).unwrap();
/// assert_eq!(x.len(), 4);
/// ```
pub mod domain;
/// evaluation of a normalized expression over the sampled domain
pub mod evaluator;
/// constant expressions are broadcast over the domain variable
pub mod normalizer;
/// the boundary to whatever draws the figure
pub mod render;
///______________________________________________________________________________________________________________________________
/// # Plot session
/// slots -> normalizer -> evaluator -> renderer, with per-line failures collected on the way
/// ```
/// use RustedFuncPlot::entries::Slot;
/// use RustedFuncPlot::entries::SlotId;
/// use RustedFuncPlot::plotter::render::RecordingRenderer;
/// use RustedFuncPlot::plotter::session::PlotSession;
/// let slots = vec![Slot::new(SlotId(1), "x"), Slot::new(SlotId(2), "2*x"), Slot::new(SlotId(3), "")];
/// let mut renderer = RecordingRenderer::new();
/// let report = PlotSession::default().plot(&slots, &mut renderer).unwrap();
/// assert_eq!(report.curves.len(), 2);
/// assert!(report.blank_notice.is_some());
/// ```
pub mod session;

use ndarray::Array1;

/// One evaluated expression, labelled by the text the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl Curve {
    pub fn new(label: impl Into<String>, x: Array1<f64>, y: Array1<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Number of samples that can be drawn.
    pub fn finite_points(&self) -> usize {
        self.y.iter().filter(|v| v.is_finite()).count()
    }

    /// `(min, max)` over the finite samples.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
