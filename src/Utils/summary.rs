/*
Pretty printing of plot results: one row per curve and one row per rejected input line.
*/
use crate::errors::EvaluationError;
use crate::plotter::Curve;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, PartialEq, Tabled)]
pub struct CurveSummary {
    #[tabled(rename = "Function")]
    label: String,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "Finite")]
    finite: usize,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

#[derive(Debug, PartialEq, Tabled)]
pub struct FailureSummary {
    #[tabled(rename = "Line")]
    line: usize,
    #[tabled(rename = "Function")]
    expression: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

fn number(v: Option<f64>) -> String {
    v.map_or("-".to_string(), |v| format!("{:.6}", v))
}

pub fn curve_summaries(curves: &[Curve]) -> Vec<CurveSummary> {
    curves
        .iter()
        .map(|c| {
            let range = c.y_range();
            CurveSummary {
                label: c.label.clone(),
                points: c.len(),
                finite: c.finite_points(),
                min: number(range.map(|r| r.0)),
                max: number(range.map(|r| r.1)),
            }
        })
        .collect()
}

pub fn failure_summaries(failures: &[EvaluationError]) -> Vec<FailureSummary> {
    failures
        .iter()
        .map(|f| FailureSummary {
            line: f.line,
            expression: f.expression.clone(),
            reason: f.reason.to_string(),
        })
        .collect()
}

pub fn curves_table(curves: &[Curve]) -> Table {
    let mut table = Table::new(curve_summaries(curves));
    table.with(Style::modern_rounded());
    table
}

pub fn failures_table(failures: &[EvaluationError]) -> Table {
    let mut table = Table::new(failure_summaries(failures));
    table.with(Style::modern_rounded());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::SlotId;
    use crate::errors::EvaluationFailure;
    use ndarray::array;

    #[test]
    fn test_curve_rows() {
        let curve = Curve::new("x^2", array![-1.0, 0.0, 1.0], array![1.0, 0.0, f64::NAN]);
        let rows = curve_summaries(&[curve]);
        assert_eq!(
            rows,
            vec![CurveSummary {
                label: "x^2".to_string(),
                points: 3,
                finite: 2,
                min: "0.000000".to_string(),
                max: "1.000000".to_string(),
            }]
        );
        let text = curves_table(&[]).to_string();
        assert!(text.contains("Function"));
    }

    #[test]
    fn test_failure_rows() {
        let failure = EvaluationError {
            slot: SlotId(4),
            line: 2,
            expression: "z".to_string(),
            reason: EvaluationFailure::UnknownSymbol {
                symbol: "z".to_string(),
            },
        };
        let text = failures_table(&[failure]).to_string();
        assert!(text.contains("unknown symbol `z`"));
        assert!(text.contains("Reason"));
    }
}
