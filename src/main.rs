#![allow(non_snake_case)]
use RustedFuncPlot::Utils::config::PlotterConfig;
use RustedFuncPlot::Utils::logger::{save_curves_to_csv, save_curves_to_file};
use RustedFuncPlot::Utils::logging::init_logger;
use RustedFuncPlot::Utils::plots::PlottersRenderer;
use RustedFuncPlot::Utils::summary::{curves_table, failures_table};
use RustedFuncPlot::commands::confirmation::FixedAnswer;
use RustedFuncPlot::commands::dialogs::{FixedPaths, LogNotifier};
use RustedFuncPlot::commands::terminal::{
    StdinInput, TerminalDialog, TerminalGate, TerminalNotifier, run_shell,
};
use RustedFuncPlot::commands::workbench::Workbench;
use RustedFuncPlot::commands::{CommandArgs, CommandName, CommandOutcome};
use RustedFuncPlot::entries::{Slot, SlotId};
use RustedFuncPlot::plotter::render::RecordingRenderer;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rusted_func_plot", version, about = "Plot functions of one variable")]
struct Cli {
    /// TOML file with domain, figure and log settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot a saved list of functions into an image
    Render {
        document: PathBuf,
        /// .png or .svg
        #[arg(short, long, default_value = "graphs.png")]
        output: PathBuf,
        /// Sampled values: `.csv`, any other extension gives tab separated text
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Evaluate one expression over the domain and print a summary
    Eval { expression: String },
    /// Interactive input lines
    Shell {
        #[arg(short, long, default_value = "graphs.png")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PlotterConfig::load(path)?,
        None => PlotterConfig::default(),
    };
    init_logger(&config.log)?;

    match cli.command {
        Commands::Render {
            document,
            output,
            data,
        } => {
            let mut wb = Workbench::new(
                config.session(),
                PlottersRenderer::new(&output),
                FixedAnswer(false),
                FixedPaths::new(None, Some(document)),
                LogNotifier,
            );
            let outcome = wb.dispatch(CommandName::UploadASavedFile, CommandArgs::default())?;
            if let CommandOutcome::Loaded(report) = outcome {
                println!("{}", curves_table(&report.curves));
                if !report.failures.is_empty() {
                    println!("{}", failures_table(&report.failures));
                }
                if let Some(data) = data {
                    if data.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
                        save_curves_to_csv(&report.curves, &config.variable, &data)?;
                    } else {
                        save_curves_to_file(&report.curves, &config.variable, &data)?;
                    }
                    info!("curves saved to {}", data.display());
                }
            }
        }
        Commands::Eval { expression } => {
            let mut session = config.session();
            let slots = [Slot::new(SlotId(1), expression)];
            let report = session.plot(&slots, &mut RecordingRenderer::new())?;
            println!("{}", curves_table(&report.curves));
            if !report.failures.is_empty() {
                println!("{}", failures_table(&report.failures));
            }
        }
        Commands::Shell { output } => {
            let mut wb = Workbench::new(
                config.session(),
                PlottersRenderer::new(output),
                TerminalGate::new(StdinInput),
                TerminalDialog::new(StdinInput),
                TerminalNotifier,
            )
            .with_first_line();
            run_shell(&mut wb, &mut StdinInput)?;
        }
    }
    Ok(())
}
