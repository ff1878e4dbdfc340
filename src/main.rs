//! recent - list recently modified files.
//!
//! Given no arguments, prints the non-dot entries of the current directory
//! modified in the last 24 hours, appending a / to directory names.
//! Given arguments, prints those that are recent; a directory argument is
//! listed as if recent were run inside it.
//!
//! Usage:
//!   recent                   Entries of . changed in the last day
//!   recent -d 2 -H 12 FILE   Window of two and a half days
//!   recent -v                Entries NOT changed in the last day
//!   recent -q DIR            Exit status only

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing::debug;

use recent_scan::{
    MatchConfig, MatchError, Matcher, OutputMode, TimeWindow, WriterSink, format_age,
};

#[derive(Parser)]
#[command(
    name = "recent",
    version,
    about = "List recently modified files",
    long_about = "Lists entries modified within a time window (one day by default).\n\n\
                  Time flags are added together, so `-d 1 -H 12` and `-H 36` are the \
                  same window. The total must stay under 290 years.\n\n\
                  Dot files are skipped when listing a directory unless --dots is given, \
                  but a dot file named as an argument is always considered."
)]
struct Cli {
    /// Files or directories to check (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Minutes (always 60 seconds)
    #[arg(long = "min", visible_alias = "minutes", value_name = "MINUTES", default_value_t = 0)]
    minutes: u64,

    /// Hours (always 60 minutes)
    #[arg(short = 'H', long, default_value_t = 0)]
    hours: u64,

    /// Days (always 24 hours)
    #[arg(short, long, default_value_t = 0)]
    days: u64,

    /// Months (always 30 days)
    #[arg(short, long, default_value_t = 0)]
    months: u64,

    /// Years (always 365 days)
    #[arg(short, long, default_value_t = 0)]
    years: u64,

    /// Invert matches: list entries that were NOT modified recently
    #[arg(short = 'v', long)]
    invert: bool,

    /// Include dot files when listing a directory
    #[arg(short = 'a', long)]
    dots: bool,

    /// Do not print / after directory names
    #[arg(long)]
    no_slash: bool,

    /// Print nothing, exit with 1 if no files are recent
    #[arg(short, long)]
    quiet: bool,

    /// Separate names with NUL instead of newline
    #[arg(short = '0', long)]
    print0: bool,
}

impl Cli {
    fn window(&self) -> TimeWindow {
        TimeWindow::new(self.years, self.months, self.days, self.hours, self.minutes)
    }
}

/// How a run ended, as reported through the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Success,
    /// Quiet mode found nothing recent.
    NoMatch,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::NoMatch => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RECENT_LOG", "warn")).init();

    let cli = Cli::parse();
    let exit = run(&cli, io::stdout().lock(), |err: MatchError| eprintln!("{err}"))?;
    Ok(exit.into())
}

/// Match according to `cli`, writing names to `out` and handing per-entry
/// errors to `report`.
fn run<W, R>(cli: &Cli, out: W, report: R) -> Result<Exit>
where
    W: Write,
    R: FnMut(MatchError),
{
    // Reject bad configurations before touching the filesystem.
    let threshold = cli.window().threshold()?;
    let mode = OutputMode::from_flags(cli.quiet, cli.print0)?;

    let reference_time = SystemTime::now();
    let config = MatchConfig::builder()
        .invert(cli.invert)
        .include_dots(cli.dots)
        .no_slash(cli.no_slash)
        .threshold(threshold)
        .reference_time(reference_time)
        .build()
        .context("Invalid match configuration")?;

    debug!(
        now = %DateTime::<Local>::from(reference_time).format("%Y-%m-%d %H:%M:%S"),
        window = %format_age(threshold),
        ?mode,
        "starting"
    );

    let matcher = Matcher::new(config);
    let mut sink = WriterSink::new(out, mode, report);

    let summary = if cli.paths.is_empty() {
        matcher.scan_directory(Path::new("."), &mut sink)
    } else {
        matcher.match_named(&cli.paths, &mut sink)
    };

    debug!(
        examined = summary.examined,
        hits = summary.hits,
        errors = summary.errors,
        "done"
    );

    let matched = sink.matched();
    sink.finish().context("Failed to write output")?;

    if mode == OutputMode::Quiet && !matched {
        return Ok(Exit::NoMatch);
    }
    Ok(Exit::Success)
}
