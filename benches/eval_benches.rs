use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use RustedFuncPlot::entries::{Slot, SlotId};
use RustedFuncPlot::plotter::domain::DomainSpec;
use RustedFuncPlot::plotter::evaluator::ExpressionEvaluator;
use RustedFuncPlot::plotter::normalizer::ExpressionNormalizer;
use RustedFuncPlot::plotter::render::RecordingRenderer;
use RustedFuncPlot::plotter::session::PlotSession;

fn bench_parse_and_evaluate(c: &mut Criterion) {
    let x = DomainSpec::default().sample().unwrap();
    let normalized = ExpressionNormalizer::default().normalize("sin(x)^2 + exp(-x^2/10)*cos(3*x)");
    let evaluator = ExpressionEvaluator::default();
    c.bench_function("parse + evaluate, default domain", |b| {
        b.iter(|| evaluator.evaluate(black_box(&normalized), black_box(&x)))
    });
}

fn bench_plot_session(c: &mut Criterion) {
    let slots = vec![
        Slot::new(SlotId(1), "x"),
        Slot::new(SlotId(2), "x^2 - 3*x"),
        Slot::new(SlotId(3), "tanh(x/4)"),
        Slot::new(SlotId(4), ""),
        Slot::new(SlotId(5), "2.5"),
    ];
    let mut session = PlotSession::default();
    let mut renderer = RecordingRenderer::new();
    c.bench_function("plot five lines", |b| {
        b.iter(|| session.plot(black_box(&slots), &mut renderer))
    });
}

criterion_group!(benches, bench_parse_and_evaluate, bench_plot_session);
criterion_main!(benches);
