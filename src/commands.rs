//! The command surface: named commands, the gates and dialogs they need,
//! and the workbench that wires everything together.
use crate::entries::SlotId;
use crate::plotter::session::PlotReport;
use std::path::PathBuf;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// yes/no gate in front of destructive actions
pub mod confirmation;
/// file selection and notices
pub mod dialogs;
/// command registry, hot keys and availability
pub mod router;
/// line-oriented terminal implementations of the seams
pub mod terminal;
///______________________________________________________________________________________________________________________________
/// # Workbench
/// ```
/// use RustedFuncPlot::commands::CommandName;
/// use RustedFuncPlot::commands::workbench::HeadlessWorkbench;
/// let mut wb = HeadlessWorkbench::headless();
/// wb.add_func("x^2");
/// assert!(wb.is_available(CommandName::Plot));
/// let report = wb.plot().unwrap().unwrap();
/// assert_eq!(report.curves.len(), 1);
/// assert!(!wb.is_available(CommandName::Plot));
/// ```
pub mod workbench;
#[cfg(test)]
mod workbench_tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum CommandName {
    #[strum(serialize = "add_func")]
    AddFunc,
    #[strum(serialize = "clear_func")]
    ClearFunc,
    #[strum(serialize = "delete_the_input_line")]
    DeleteTheInputLine,
    #[strum(serialize = "delete_all_of_the_input_lines")]
    DeleteAllOfTheInputLines,
    #[strum(serialize = "plot")]
    Plot,
    #[strum(serialize = "save_as")]
    SaveAs,
    #[strum(serialize = "upload_a_saved_file")]
    UploadASavedFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    pub focused: Option<SlotId>,
    pub text: Option<String>,
}

impl CommandArgs {
    pub fn focused(id: SlotId) -> Self {
        Self {
            focused: Some(id),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            focused: None,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug)]
pub enum CommandOutcome {
    Added(SlotId),
    Removed(usize),
    Done,
    /// nothing to act on, e.g. no focused line
    Ignored,
    Cancelled,
    Unavailable,
    Plotted(PlotReport),
    Saved(PathBuf),
    Loaded(PlotReport),
}
