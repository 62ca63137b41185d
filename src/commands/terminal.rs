//! Line-oriented terminal versions of the gate, the file dialog and the notifier.
use crate::Utils::summary::{curves_table, failures_table};
use crate::commands::confirmation::{ConfirmationGate, Prompt};
use crate::commands::dialogs::{FileDialog, Notifier};
use crate::commands::workbench::Workbench;
use crate::commands::{CommandArgs, CommandName, CommandOutcome};
use crate::errors::PlotError;
use crate::plotter::render::Renderer;
use crate::plotter::session::{Notice, NoticeLevel, PlotReport};
use log::warn;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Source of answer lines; `Ok(None)` at end of input.
pub trait LineInput {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

#[derive(Debug, Default)]
pub struct StdinInput;

impl LineInput for StdinInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl LineInput for VecDeque<String> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

fn ask<I: LineInput>(input: &mut I, question: &str) -> Option<String> {
    print!("{} ", question);
    let _ = io::stdout().flush();
    match input.next_line() {
        Ok(line) => line,
        Err(e) => {
            warn!("could not read answer: {}", e);
            None
        }
    }
}

/// `y`/`yes` confirms; anything else, end of input included, cancels.
#[derive(Debug, Default)]
pub struct TerminalGate<I> {
    input: I,
}

impl<I: LineInput> TerminalGate<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: LineInput> ConfirmationGate for TerminalGate<I> {
    fn request(&mut self, prompt: &Prompt) -> bool {
        println!("{}", prompt.title);
        let answer = ask(&mut self.input, &format!("{} [y/N]", prompt.text));
        answer.is_some_and(|a| matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

/// Asks for a path; an empty answer cancels.
#[derive(Debug, Default)]
pub struct TerminalDialog<I> {
    input: I,
}

impl<I: LineInput> TerminalDialog<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    fn path(&mut self, question: &str) -> Option<PathBuf> {
        ask(&mut self.input, question)
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .map(PathBuf::from)
    }
}

impl<I: LineInput> FileDialog for TerminalDialog<I> {
    fn save_target(&mut self, default_extension: &str) -> Option<PathBuf> {
        self.path(&format!("Save as (*.{}):", default_extension))
    }

    fn open_source(&mut self) -> Option<PathBuf> {
        self.path("Open file:")
    }
}

#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => println!("[{}] {}", notice.title, notice.text),
            NoticeLevel::Warning => eprintln!("[{}] {}", notice.title, notice.text),
        }
    }
}

//______________________________________________________________________________________
// shell

pub const SHELL_HELP: &str = "\
add [text]      append an input line
edit N text     replace the text of line N
clear N         empty line N
del N           delete line N (asks if it holds text)
delall          delete all lines (always asks)
plot            plot all lines
save            save the lines of the last plot
load            load lines from a file and plot them
list            show the lines
help            this text
quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Edit(usize, String),
    Clear(usize),
    Delete(usize),
    DeleteAll,
    Plot,
    Save,
    Load,
    List,
    Help,
    Quit,
}

fn line_number(arg: &str) -> Result<usize, String> {
    arg.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("`{}` is not a line number", arg.trim()))
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        match word {
            "add" => Ok(ShellCommand::Add(rest.to_string())),
            "edit" => {
                let (n, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(ShellCommand::Edit(line_number(n)?, text.trim().to_string()))
            }
            "clear" => Ok(ShellCommand::Clear(line_number(rest)?)),
            "del" => Ok(ShellCommand::Delete(line_number(rest)?)),
            "delall" => Ok(ShellCommand::DeleteAll),
            "plot" => Ok(ShellCommand::Plot),
            "save" => Ok(ShellCommand::Save),
            "load" => Ok(ShellCommand::Load),
            "list" => Ok(ShellCommand::List),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            _ => Err(format!("unknown command `{}`, try `help`", word)),
        }
    }
}

fn print_report(report: &PlotReport) {
    println!("{}", curves_table(&report.curves));
    if !report.failures.is_empty() {
        println!("{}", failures_table(&report.failures));
    }
}

fn describe(outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Added(id) => println!("added line {}", id),
        CommandOutcome::Removed(n) => println!("removed {} line(s)", n),
        CommandOutcome::Done => println!("done"),
        CommandOutcome::Ignored => println!("nothing to do"),
        CommandOutcome::Cancelled => println!("cancelled"),
        CommandOutcome::Unavailable => println!("nothing changed since the last plot"),
        CommandOutcome::Plotted(report) | CommandOutcome::Loaded(report) => print_report(&report),
        CommandOutcome::Saved(path) => println!("saved to {}", path.display()),
    }
}

fn execute<R, G, D, N>(
    wb: &mut Workbench<R, G, D, N>,
    command: ShellCommand,
) -> Result<(), PlotError>
where
    R: Renderer,
    G: ConfirmationGate,
    D: FileDialog,
    N: Notifier,
{
    let focus = |wb: &Workbench<R, G, D, N>, line: usize| wb.registry().at_line(line).map(|s| s.id);
    let outcome = match command {
        ShellCommand::Add(text) => wb.dispatch(CommandName::AddFunc, CommandArgs::text(text))?,
        ShellCommand::Edit(line, text) => match focus(wb, line) {
            Some(id) => {
                wb.edit_slot(id, text)?;
                CommandOutcome::Done
            }
            None => CommandOutcome::Ignored,
        },
        ShellCommand::Clear(line) => {
            let args = CommandArgs { focused: focus(wb, line), text: None };
            wb.dispatch(CommandName::ClearFunc, args)?
        }
        ShellCommand::Delete(line) => {
            let args = CommandArgs { focused: focus(wb, line), text: None };
            wb.dispatch(CommandName::DeleteTheInputLine, args)?
        }
        ShellCommand::DeleteAll => {
            wb.dispatch(CommandName::DeleteAllOfTheInputLines, CommandArgs::default())?
        }
        ShellCommand::Plot => wb.dispatch(CommandName::Plot, CommandArgs::default())?,
        ShellCommand::Save => wb.dispatch(CommandName::SaveAs, CommandArgs::default())?,
        ShellCommand::Load => wb.dispatch(CommandName::UploadASavedFile, CommandArgs::default())?,
        ShellCommand::List => {
            for (i, slot) in wb.registry().slots().iter().enumerate() {
                println!("{:>3}: {}", i + 1, slot.raw_text);
            }
            return Ok(());
        }
        ShellCommand::Help => {
            println!("{}", SHELL_HELP);
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    };
    describe(outcome);
    Ok(())
}

/// Reads commands until `quit` or end of input. Command errors are printed and the loop goes on.
pub fn run_shell<R, G, D, N, I>(wb: &mut Workbench<R, G, D, N>, input: &mut I) -> io::Result<()>
where
    R: Renderer,
    G: ConfirmationGate,
    D: FileDialog,
    N: Notifier,
    I: LineInput,
{
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = input.next_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                if let Err(e) = execute(wb, command) {
                    println!("error: {}", e);
                }
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
