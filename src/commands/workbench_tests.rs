use crate::commands::confirmation::Prompt;
use crate::commands::router::HotKey;
use crate::commands::workbench::HeadlessWorkbench;
use crate::commands::{CommandArgs, CommandName, CommandOutcome};
use crate::entries::SlotId;
use crate::errors::{EvaluationFailure, PersistenceError, PlotError};
use crate::persistence;
use crate::plotter::session::{Notice, NoticeLevel};
use approx::assert_relative_eq;
use std::path::PathBuf;
use tempfile::tempdir;

fn workbench_with(texts: &[&str]) -> (HeadlessWorkbench, Vec<SlotId>) {
    let mut wb = HeadlessWorkbench::headless();
    let ids = texts.iter().map(|t| wb.add_func(*t)).collect();
    (wb, ids)
}

fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_plot_is_unavailable_until_a_line_exists() {
    let mut wb = HeadlessWorkbench::headless();
    assert!(!wb.is_available(CommandName::Plot));
    assert!(matches!(
        wb.dispatch(CommandName::Plot, CommandArgs::default()).unwrap(),
        CommandOutcome::Unavailable
    ));
    assert!(wb.renderer().figures.is_empty());

    let outcome = wb
        .dispatch(CommandName::AddFunc, CommandArgs::text("x"))
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::Added(_)));
    assert!(wb.is_available(CommandName::Plot));
}

#[test]
fn test_plot_then_unavailable_then_available_after_edit() {
    let (mut wb, ids) = workbench_with(&["x"]);
    assert!(wb.plot().unwrap().is_some());
    assert!(!wb.is_available(CommandName::Plot));
    assert!(wb.plot().unwrap().is_none());
    assert_eq!(wb.renderer().figures.len(), 1);

    wb.edit_slot(ids[0], "x^2").unwrap();
    assert!(wb.is_available(CommandName::Plot));
    let report = wb.plot().unwrap().unwrap();
    assert_eq!(report.labels(), vec!["x^2"]);
}

#[test]
fn test_two_curves_and_exactly_one_blank_notice() {
    let (mut wb, _) = workbench_with(&["x", "2*x", ""]);
    let report = wb.plot().unwrap().unwrap();
    assert_eq!(report.labels(), vec!["x", "2*x"]);
    assert!(report.failures.is_empty());
    assert_eq!(wb.notifier().notices, vec![Notice::blank_line()]);
    assert_eq!(wb.session().functions(), &["x", "2*x", ""]);
}

#[test]
fn test_partial_failure_still_plots() {
    let (mut wb, ids) = workbench_with(&["x", "1/log(x)"]);
    let report = wb.plot().unwrap().unwrap();
    assert_eq!(report.labels(), vec!["x"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].slot, ids[1]);
    assert!(matches!(
        report.failures[0].reason,
        EvaluationFailure::NonFinite { .. }
    ));
    assert_eq!(wb.notifier().count(NoticeLevel::Warning), 1);
    assert_eq!(wb.renderer().last().unwrap().labels, vec!["x"]);
    assert!(!wb.is_available(CommandName::Plot));
}

#[test]
fn test_every_failing_line_is_reported() {
    let (mut wb, _) = workbench_with(&["x +", "y", "foo(x)", "cos(x)"]);
    let report = wb.plot().unwrap().unwrap();
    assert_eq!(report.labels(), vec!["cos(x)"]);
    let lines: Vec<usize> = report.failures.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
    assert!(matches!(
        report.failures[1].reason,
        EvaluationFailure::UnknownSymbol { .. }
    ));
}

#[test]
fn test_constant_line_over_zero() {
    let (mut wb, _) = workbench_with(&["2+3"]);
    let report = wb.plot().unwrap().unwrap();
    let curve = &report.curves[0];
    assert_eq!(curve.len(), 4000);
    let zero = curve.x.iter().position(|&v| v.abs() < 1e-9).unwrap();
    assert_relative_eq!(curve.y[zero], 5.0);
    assert!(curve.y.iter().all(|&v| v == 5.0));
}

#[test]
fn test_declined_delete_leaves_lines_and_availability() {
    let (mut wb, ids) = workbench_with(&["x", "sin(x)"]);
    wb.plot().unwrap();
    let before = wb.registry().slots().to_vec();

    // the scripted gate has no answers, so it cancels
    let outcome = wb
        .dispatch(CommandName::DeleteTheInputLine, CommandArgs::focused(ids[1]))
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::Cancelled));
    assert_eq!(wb.registry().slots(), before.as_slice());
    assert!(!wb.is_available(CommandName::Plot));
    assert_eq!(wb.gate_mut().prompts, vec![Prompt::delete_line()]);
}

#[test]
fn test_confirmed_delete_marks_plot_available() {
    let (mut wb, ids) = workbench_with(&["x", "sin(x)"]);
    wb.plot().unwrap();
    wb.gate_mut().push(true);
    let outcome = wb
        .dispatch(CommandName::DeleteTheInputLine, CommandArgs::focused(ids[0]))
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::Removed(1)));
    assert_eq!(wb.registry().ids(), vec![ids[1]]);
    assert!(wb.is_available(CommandName::Plot));
}

#[test]
fn test_empty_line_is_deleted_without_prompt() {
    let (mut wb, ids) = workbench_with(&["", "x"]);
    let outcome = wb
        .dispatch(CommandName::DeleteTheInputLine, CommandArgs::focused(ids[0]))
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::Removed(1)));
    assert!(wb.gate_mut().prompts.is_empty());
}

#[test]
fn test_commands_without_focus_are_ignored() {
    let (mut wb, _) = workbench_with(&["x"]);
    for name in [CommandName::DeleteTheInputLine, CommandName::ClearFunc] {
        assert!(matches!(
            wb.dispatch(name, CommandArgs::default()).unwrap(),
            CommandOutcome::Ignored
        ));
    }
    assert_eq!(wb.registry().len(), 1);
}

#[test]
fn test_unknown_focus_is_an_error() {
    let (mut wb, _) = workbench_with(&["x"]);
    assert!(matches!(
        wb.dispatch(CommandName::ClearFunc, CommandArgs::focused(SlotId(99))),
        Err(PlotError::Slot(_))
    ));
}

#[test]
fn test_delete_all_on_empty_registry_still_asks() {
    let mut wb = HeadlessWorkbench::headless();
    wb.gate_mut().push(true);
    let outcome = wb
        .dispatch(CommandName::DeleteAllOfTheInputLines, CommandArgs::default())
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::Removed(0)));
    assert!(wb.registry().is_empty());
    assert_eq!(wb.gate_mut().prompts, vec![Prompt::delete_all()]);

    wb.gate_mut().push(true);
    wb.dispatch(CommandName::DeleteAllOfTheInputLines, CommandArgs::default())
        .unwrap();
    assert!(wb.registry().is_empty());
    assert_eq!(wb.gate_mut().prompts.len(), 2);
}

#[test]
fn test_clear_keeps_the_line_and_disposes_the_figure() {
    let (mut wb, ids) = workbench_with(&["x + 1"]);
    let figure = wb.plot().unwrap().unwrap().figure;
    let outcome = wb
        .dispatch_hot_key(HotKey::Ctrl('E'), CommandArgs::focused(ids[0]))
        .unwrap();
    assert!(matches!(outcome, Some(CommandOutcome::Done)));
    assert_eq!(wb.registry().texts(), vec![""]);
    assert_eq!(wb.renderer().disposed, vec![figure]);
    assert!(wb.session().figure().is_none());
    assert!(wb.is_available(CommandName::Plot));
}

#[test]
fn test_hot_keys() {
    let mut wb = HeadlessWorkbench::headless();
    assert_eq!(wb.hot_key(CommandName::AddFunc), Some(HotKey::Ctrl('A')));
    assert_eq!(wb.hot_key(CommandName::DeleteTheInputLine), Some(HotKey::Ctrl('B')));
    assert_eq!(wb.hot_key(CommandName::DeleteAllOfTheInputLines), Some(HotKey::Ctrl('D')));
    assert_eq!(wb.hot_key(CommandName::Plot), Some(HotKey::Return));
    assert!(matches!(
        wb.dispatch_hot_key(HotKey::Ctrl('A'), CommandArgs::text("tg(x)")),
        Ok(Some(CommandOutcome::Added(_)))
    ));
    assert!(matches!(
        wb.dispatch_hot_key(HotKey::Ctrl('Z'), CommandArgs::default()),
        Ok(None)
    ));
    assert!(matches!(
        wb.dispatch_hot_key(HotKey::Return, CommandArgs::default()),
        Ok(Some(CommandOutcome::Plotted(_)))
    ));
}

#[test]
fn test_dispatch_by_name() {
    let mut wb = HeadlessWorkbench::headless();
    assert!(matches!(
        wb.dispatch_str("add_func", CommandArgs::default()),
        Ok(CommandOutcome::Added(_))
    ));
    assert!(matches!(
        wb.dispatch_str("print", CommandArgs::default()),
        Err(PlotError::UnknownCommand(_))
    ));
}

#[test]
fn test_save_writes_texts_of_last_plot() {
    let dir = tempdir().unwrap();
    let (mut wb, ids) = workbench_with(&["x", "", "x"]);
    wb.plot().unwrap();
    // edited after plotting: not part of the saved state
    wb.edit_slot(ids[1], "x^3").unwrap();
    wb.dialog_mut().save = Some(dir.path().join("state"));

    let outcome = wb
        .dispatch(CommandName::SaveAs, CommandArgs::default())
        .unwrap();
    let path = match outcome {
        CommandOutcome::Saved(path) => path,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(path, dir.path().join("state.json"));
    assert_eq!(wb.renderer().live().len(), 1);
    assert_eq!(
        persistence::load_from_path(&path).unwrap(),
        strings(&["x", "", "x"])
    );
}

#[test]
fn test_cancelled_save_is_a_no_op() {
    let (mut wb, _) = workbench_with(&["x"]);
    wb.plot().unwrap();
    assert!(matches!(
        wb.dispatch(CommandName::SaveAs, CommandArgs::default()),
        Ok(CommandOutcome::Cancelled)
    ));
    assert_eq!(wb.renderer().live().len(), 1);
    assert!(wb.renderer().disposed.is_empty());
}

#[test]
fn test_first_line_makes_plot_available() {
    let mut wb = HeadlessWorkbench::headless().with_first_line();
    assert_eq!(wb.registry().texts(), vec![""]);
    assert!(wb.is_available(CommandName::Plot));
    let report = wb.plot().unwrap().unwrap();
    assert!(report.curves.is_empty());
    assert_eq!(report.blank_notice, Some(Notice::blank_line()));
}

#[test]
fn test_upload_replaces_lines_and_plots() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.json");
    persistence::save_to_path(&strings(&["sin(x)", "", "sin(x)"]), &path).unwrap();

    let (mut wb, old) = workbench_with(&["x", "x^2"]);
    wb.dialog_mut().open = Some(path);
    let outcome = wb
        .dispatch(CommandName::UploadASavedFile, CommandArgs::default())
        .unwrap();
    let report = match outcome {
        CommandOutcome::Loaded(report) => report,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(wb.registry().texts(), strings(&["sin(x)", "", "sin(x)"]));
    assert!(wb.registry().ids().iter().all(|id| !old.contains(id)));
    assert_eq!(report.labels(), vec!["sin(x)", "sin(x)"]);
    assert!(report.blank_notice.is_some());
    assert_eq!(wb.session().functions(), &["sin(x)", "", "sin(x)"]);
    assert!(!wb.is_available(CommandName::Plot));
}

#[test]
fn test_malformed_upload_leaves_lines_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"functions": ["x"]}"#).unwrap();

    let (mut wb, ids) = workbench_with(&["x", "cos(x)"]);
    wb.dialog_mut().open = Some(path);
    assert!(matches!(
        wb.dispatch(CommandName::UploadASavedFile, CommandArgs::default()),
        Err(PlotError::Persistence(PersistenceError::Malformed(_)))
    ));
    assert_eq!(wb.registry().ids(), ids);
    assert_eq!(wb.registry().texts(), strings(&["x", "cos(x)"]));
}

#[test]
fn test_cancelled_upload() {
    let (mut wb, ids) = workbench_with(&["x"]);
    wb.dialog_mut().open = None::<PathBuf>;
    assert!(matches!(
        wb.dispatch(CommandName::UploadASavedFile, CommandArgs::default()),
        Ok(CommandOutcome::Cancelled)
    ));
    assert_eq!(wb.registry().ids(), ids);
}
