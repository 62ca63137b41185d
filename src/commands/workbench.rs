//! The application object: input lines, plot session and command router,
//! talking to the outside world through four seams.
use crate::commands::confirmation::{ConfirmationGate, ScriptedGate};
use crate::commands::dialogs::{CollectingNotifier, FileDialog, FixedPaths, Notifier};
use crate::commands::router::{CommandRouter, HotKey};
use crate::commands::{CommandArgs, CommandName, CommandOutcome};
use crate::entries::{Removal, SlotId, SlotRegistry};
use crate::errors::PlotError;
use crate::persistence;
use crate::plotter::render::{RecordingRenderer, Renderer};
use crate::plotter::session::{Notice, PlotReport, PlotSession};
use log::{debug, info};

pub type HeadlessWorkbench =
    Workbench<RecordingRenderer, ScriptedGate, FixedPaths, CollectingNotifier>;

pub struct Workbench<R, G, D, N> {
    registry: SlotRegistry,
    session: PlotSession,
    router: CommandRouter<Workbench<R, G, D, N>>,
    renderer: R,
    gate: G,
    dialog: D,
    notifier: N,
}

impl HeadlessWorkbench {
    /// Recording renderer, a gate that cancels unless scripted, no files, collected notices.
    pub fn headless() -> Self {
        Workbench::new(
            PlotSession::default(),
            RecordingRenderer::new(),
            ScriptedGate::default(),
            FixedPaths::default(),
            CollectingNotifier::default(),
        )
    }
}

impl<R, G, D, N> Workbench<R, G, D, N>
where
    R: Renderer,
    G: ConfirmationGate,
    D: FileDialog,
    N: Notifier,
{
    pub fn new(session: PlotSession, renderer: R, gate: G, dialog: D, notifier: N) -> Self {
        let mut router = CommandRouter::new();
        router.register(CommandName::AddFunc, Self::add_func_action, Some(HotKey::Ctrl('A')));
        router.register(CommandName::ClearFunc, Self::clear_func_action, Some(HotKey::Ctrl('E')));
        router.register(
            CommandName::DeleteTheInputLine,
            Self::delete_line_action,
            Some(HotKey::Ctrl('B')),
        );
        router.register(
            CommandName::DeleteAllOfTheInputLines,
            Self::delete_all_action,
            Some(HotKey::Ctrl('D')),
        );
        // nothing to plot until a line exists
        router.register_unavailable(CommandName::Plot, Self::plot_action, Some(HotKey::Return));
        router.register(CommandName::SaveAs, Self::save_as_action, None);
        router.register(CommandName::UploadASavedFile, Self::upload_action, None);

        Self {
            registry: SlotRegistry::new(),
            session,
            router,
            renderer,
            gate,
            dialog,
            notifier,
        }
    }

    /// Starts with one empty input line, so plotting is available at once.
    pub fn with_first_line(mut self) -> Self {
        self.add_func("");
        self
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn session(&self) -> &PlotSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn gate_mut(&mut self) -> &mut G {
        &mut self.gate
    }

    pub fn dialog_mut(&mut self) -> &mut D {
        &mut self.dialog
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn is_available(&self, name: CommandName) -> bool {
        self.router.availability(name)
    }

    pub fn hot_key(&self, name: CommandName) -> Option<HotKey> {
        self.router.hot_key(name)
    }

    //______________________________________________________________________________________
    // dispatch

    pub fn dispatch(
        &mut self,
        name: CommandName,
        args: CommandArgs,
    ) -> Result<CommandOutcome, PlotError> {
        let Some(action) = self.router.resolve(name)? else {
            debug!("`{}` is unavailable", name);
            return Ok(CommandOutcome::Unavailable);
        };
        action(self, args)
    }

    pub fn dispatch_str(
        &mut self,
        name: &str,
        args: CommandArgs,
    ) -> Result<CommandOutcome, PlotError> {
        let name = name
            .trim()
            .parse::<CommandName>()
            .map_err(|_| PlotError::UnknownCommand(name.to_string()))?;
        self.dispatch(name, args)
    }

    /// `Ok(None)` when no command is bound to the key.
    pub fn dispatch_hot_key(
        &mut self,
        key: HotKey,
        args: CommandArgs,
    ) -> Result<Option<CommandOutcome>, PlotError> {
        match self.router.by_hot_key(key) {
            Some(name) => self.dispatch(name, args).map(Some),
            None => Ok(None),
        }
    }

    /// Typing into a line: a slot mutation, so plotting becomes possible again.
    pub fn edit_slot(&mut self, id: SlotId, text: impl Into<String>) -> Result<(), PlotError> {
        self.registry.set_text(id, text)?;
        self.router.set_available(CommandName::Plot, true);
        Ok(())
    }

    //______________________________________________________________________________________
    // shortcuts

    /// `add_func` is always available, so this never goes through the router.
    pub fn add_func(&mut self, text: impl Into<String>) -> SlotId {
        self.add_slot(text.into())
    }

    /// `Ok(None)` while plotting is unavailable.
    pub fn plot(&mut self) -> Result<Option<PlotReport>, PlotError> {
        match self.dispatch(CommandName::Plot, CommandArgs::default())? {
            CommandOutcome::Plotted(report) => Ok(Some(report)),
            _ => Ok(None),
        }
    }

    //______________________________________________________________________________________
    // actions

    fn add_func_action(&mut self, args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        Ok(CommandOutcome::Added(self.add_slot(args.text.unwrap_or_default())))
    }

    fn add_slot(&mut self, text: String) -> SlotId {
        self.session.dispose_figure(&mut self.renderer);
        let id = self.registry.add(text);
        self.router.set_available(CommandName::Plot, true);
        id
    }

    fn clear_func_action(&mut self, args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        let Some(id) = args.focused else {
            return Ok(CommandOutcome::Ignored);
        };
        self.session.dispose_figure(&mut self.renderer);
        self.registry.clear_focused_text(id)?;
        self.router.set_available(CommandName::Plot, true);
        Ok(CommandOutcome::Done)
    }

    fn delete_line_action(&mut self, args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        let Some(id) = args.focused else {
            return Ok(CommandOutcome::Ignored);
        };
        self.session.dispose_figure(&mut self.renderer);
        let removal = self.registry.remove_focused(id, &mut self.gate)?;
        Ok(self.after_removal(removal))
    }

    fn delete_all_action(&mut self, _args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        self.session.dispose_figure(&mut self.renderer);
        let removal = self.registry.remove_all(&mut self.gate);
        Ok(self.after_removal(removal))
    }

    fn after_removal(&mut self, removal: Removal) -> CommandOutcome {
        if removal.removed_any() {
            self.router.set_available(CommandName::Plot, true);
        }
        match removal {
            Removal::Removed(n) => CommandOutcome::Removed(n),
            Removal::Cancelled => CommandOutcome::Cancelled,
        }
    }

    fn plot_action(&mut self, _args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        let report = self.plot_now()?;
        Ok(CommandOutcome::Plotted(report))
    }

    fn plot_now(&mut self) -> Result<PlotReport, PlotError> {
        let report = self.session.plot(self.registry.slots(), &mut self.renderer)?;
        if let Some(notice) = &report.blank_notice {
            self.notifier.notify(notice);
        }
        for failure in &report.failures {
            self.notifier.notify(&Notice::evaluation_failure(failure));
        }
        self.router.set_available(CommandName::Plot, false);
        Ok(report)
    }

    /// Leaves the shown figure in place.
    fn save_as_action(&mut self, _args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        match persistence::save(self.session.functions(), &mut self.dialog)? {
            Some(path) => Ok(CommandOutcome::Saved(path)),
            None => Ok(CommandOutcome::Cancelled),
        }
    }

    fn upload_action(&mut self, _args: CommandArgs) -> Result<CommandOutcome, PlotError> {
        self.session.dispose_figure(&mut self.renderer);
        // a bad document leaves the lines untouched
        let Some(functions) = persistence::load(&mut self.dialog)? else {
            return Ok(CommandOutcome::Cancelled);
        };
        let ids = self.registry.replace_with(functions);
        info!("replaced input lines with {} loaded line(s)", ids.len());
        self.router.set_available(CommandName::Plot, true);
        let report = self.plot_now()?;
        Ok(CommandOutcome::Loaded(report))
    }
}
