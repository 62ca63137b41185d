//! Seams for choosing files and showing notices.
use crate::plotter::session::{Notice, NoticeLevel};
use log::{info, warn};
use std::path::PathBuf;

/// File selection; `None` means the user cancelled.
pub trait FileDialog {
    fn save_target(&mut self, default_extension: &str) -> Option<PathBuf>;
    fn open_source(&mut self) -> Option<PathBuf>;
}

/// Preset answers for both dialogs.
#[derive(Debug, Clone, Default)]
pub struct FixedPaths {
    pub save: Option<PathBuf>,
    pub open: Option<PathBuf>,
}

impl FixedPaths {
    pub fn new(save: Option<PathBuf>, open: Option<PathBuf>) -> Self {
        Self { save, open }
    }
}

impl FileDialog for FixedPaths {
    fn save_target(&mut self, _default_extension: &str) -> Option<PathBuf> {
        self.save.clone()
    }

    fn open_source(&mut self) -> Option<PathBuf> {
        self.open.clone()
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Sends notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => info!("{}: {}", notice.title, notice.text),
            NoticeLevel::Warning => warn!("{}: {}", notice.title, notice.text),
        }
    }
}

/// Keeps every notice.
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    pub notices: Vec<Notice>,
}

impl CollectingNotifier {
    pub fn count(&self, level: NoticeLevel) -> usize {
        self.notices.iter().filter(|n| n.level == level).count()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
