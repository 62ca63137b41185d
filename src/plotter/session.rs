//! Orchestration of one plot: slots -> normalizer -> evaluator -> renderer.
use crate::entries::Slot;
use crate::errors::{EvaluationError, PlotError};
use crate::plotter::Curve;
use crate::plotter::domain::DomainSpec;
use crate::plotter::evaluator::{ExpressionEvaluator, NonFinitePolicy};
use crate::plotter::normalizer::ExpressionNormalizer;
use crate::plotter::render::{FigureHandle, FigureOptions, RenderRequest, Renderer};
use crate::symbolic::utils::is_blank;
use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Advisory message for the user; never aborts anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            level: NoticeLevel::Warning,
        }
    }

    pub fn blank_line() -> Self {
        Self::info(
            "Empty line",
            "An empty input line was skipped. Nothing needs to be done.",
        )
    }

    pub fn evaluation_failure(error: &EvaluationError) -> Self {
        Self::warning("Invalid input line", error.to_string())
    }
}

/// Texts of the last plot and the figure currently shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub functions: Vec<String>,
    pub figure: Option<FigureHandle>,
}

#[derive(Debug)]
pub struct PlotReport {
    pub curves: Vec<Curve>,
    pub failures: Vec<EvaluationError>,
    /// at most one per plot, however many lines are blank
    pub blank_notice: Option<Notice>,
    pub figure: FigureHandle,
}

impl PlotReport {
    pub fn labels(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PlotSession {
    domain: DomainSpec,
    normalizer: ExpressionNormalizer,
    evaluator: ExpressionEvaluator,
    options: FigureOptions,
    state: SessionState,
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(
            DomainSpec::default(),
            "x",
            NonFinitePolicy::default(),
            FigureOptions::default(),
        )
    }
}

impl PlotSession {
    pub fn new(
        domain: DomainSpec,
        variable: &str,
        policy: NonFinitePolicy,
        options: FigureOptions,
    ) -> Self {
        Self {
            domain,
            normalizer: ExpressionNormalizer::new(variable),
            evaluator: ExpressionEvaluator::new(variable, policy),
            options,
            state: SessionState::default(),
        }
    }

    pub fn domain(&self) -> &DomainSpec {
        &self.domain
    }

    pub fn options(&self) -> &FigureOptions {
        &self.options
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn functions(&self) -> &[String] {
        &self.state.functions
    }

    pub fn figure(&self) -> Option<FigureHandle> {
        self.state.figure
    }

    /// Drops the figure on screen, if any.
    pub fn dispose_figure(&mut self, renderer: &mut dyn Renderer) {
        if let Some(handle) = self.state.figure.take() {
            debug!("disposing {}", handle);
            renderer.dispose(handle);
        }
    }

    /// Evaluates every non-blank slot and renders the successful ones as one figure.
    /// Failing lines are reported in the result; only an invalid domain or a
    /// renderer failure makes the whole call fail.
    pub fn plot(
        &mut self,
        slots: &[Slot],
        renderer: &mut dyn Renderer,
    ) -> Result<PlotReport, PlotError> {
        let x = self.domain.sample()?;

        self.state.functions.clear();
        let mut blank_notice = None;
        let mut curves = Vec::new();
        let mut failures = Vec::new();

        for (i, slot) in slots.iter().enumerate() {
            self.state.functions.push(slot.raw_text.clone());
            if is_blank(&slot.raw_text) {
                if blank_notice.is_none() {
                    blank_notice = Some(Notice::blank_line());
                }
                continue;
            }
            let normalized = self.normalizer.normalize(&slot.raw_text);
            match self.evaluator.evaluate(&normalized, &x) {
                Ok(y) => curves.push(Curve::new(slot.raw_text.clone(), x.clone(), y)),
                Err(reason) => {
                    let error = EvaluationError {
                        slot: slot.id,
                        line: i + 1,
                        expression: slot.raw_text.clone(),
                        reason,
                    };
                    warn!("{}", error);
                    failures.push(error);
                }
            }
        }

        self.dispose_figure(renderer);
        let request = RenderRequest {
            options: &self.options,
            domain: (self.domain.x_min, self.domain.x_max),
            curves: &curves,
        };
        let figure = renderer.render(&request)?;
        self.state.figure = Some(figure);
        info!(
            "plotted {} curve(s), {} failure(s), {}",
            curves.len(),
            failures.len(),
            figure
        );

        Ok(PlotReport {
            curves,
            failures,
            blank_notice,
            figure,
        })
    }
}
