//! MIPS32 teaching-subset simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Run:** Load a program image, execute it to completion and write the execution trace.
//! 2. **Disasm:** Print the decoded listing and initial data without executing.
//!
//! Syscall output goes to stdout; diagnostics and statistics go to stderr.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::{Config, TraceFormat};
use mipsim_core::core::StreamConsole;
use mipsim_core::sim::{JsonTrace, NullTrace, TextTrace, TraceSink};
use mipsim_core::{Program, ProgramImage, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS32 teaching-subset simulator",
    long_about = "Decode and execute a program image for a 16-instruction MIPS32 subset.\n\nThe image is a text file: a header line `N M`, then N instruction words and M data words, one hex word per line.\n\nExamples:\n  sim run prog.txt\n  sim run prog.txt --log trace.jsonl --format json --stats\n  sim disasm prog.txt"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program image.
    Run {
        /// Program image to execute.
        image: PathBuf,

        /// Trace output file (default from config, `log.txt`).
        #[arg(long)]
        log: Option<PathBuf>,

        /// Trace format.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fault after this many executed instructions.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Print run statistics to stderr.
        #[arg(long)]
        stats: bool,
    },

    /// Print the decoded listing and data of a program image.
    Disasm {
        /// Program image to list.
        image: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    None,
}

impl From<FormatArg> for TraceFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => TraceFormat::Text,
            FormatArg::Json => TraceFormat::Json,
            FormatArg::None => TraceFormat::None,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            image,
            log,
            format,
            config,
            max_steps,
            stats,
        } => cmd_run(
            &image,
            RunOverrides {
                log,
                format,
                config,
                max_steps,
            },
            stats,
        ),
        Commands::Disasm { image } => cmd_disasm(&image),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    }
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Command-line settings that take precedence over the config file.
struct RunOverrides {
    log: Option<PathBuf>,
    format: Option<FormatArg>,
    config: Option<PathBuf>,
    max_steps: Option<u64>,
}

impl RunOverrides {
    fn resolve(self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Config::load(path)?
            }
            None => Config::default(),
        };
        if let Some(path) = self.log {
            config.trace.path = path;
        }
        if let Some(format) = self.format {
            config.trace.format = format.into();
        }
        if self.max_steps.is_some() {
            config.general.max_steps = self.max_steps;
        }
        Ok(config)
    }
}

/// Loads, decodes and runs a program image.
fn cmd_run(image: &Path, overrides: RunOverrides, show_stats: bool) -> Result<(), SimError> {
    let config = overrides.resolve()?;
    let program = Program::decode(ProgramImage::load(image)?)?;
    info!(image = %image.display(), instructions = program.len(), "loaded");

    let mut trace = open_trace(&config)?;
    let mut console = StreamConsole::stdio(config.console.prompt.clone());
    let mut sim = Simulator::new(program, &config);

    let result = sim.run(&mut console, trace.as_mut());
    if show_stats {
        eprintln!("{}", sim.stats);
    }
    let summary = result?;
    debug!(halt = ?summary.halt, pc = summary.pc, "run complete");
    Ok(())
}

/// Opens the trace sink selected by `config.trace`.
fn open_trace(config: &Config) -> Result<Box<dyn TraceSink>, SimError> {
    let open = || File::create(&config.trace.path).map(BufWriter::new);
    let sink: Box<dyn TraceSink> = match config.trace.format {
        TraceFormat::Text => Box::new(TextTrace::new(open().map_err(SimError::Trace)?)),
        TraceFormat::Json => Box::new(JsonTrace::new(open().map_err(SimError::Trace)?)),
        TraceFormat::None => Box::new(NullTrace),
    };
    Ok(sink)
}

/// Prints the listing and data dump of a program image.
fn cmd_disasm(image: &Path) -> Result<(), SimError> {
    let program = Program::decode(ProgramImage::load(image)?)?;
    let stdout = io::stdout();
    let mut listing = TextTrace::new(stdout.lock());
    listing.loaded(&program)?;
    listing.into_inner().flush()?;
    Ok(())
}
