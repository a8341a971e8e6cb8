//! Pong Circle entry point
//!
//! Parses the command line, sets up logging, runs one session on the chosen
//! frontend and appends the result row.

use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pong_circle::error::ExportError;
use pong_circle::results::{self, Player};
use pong_circle::settings::Settings;
use pong_circle::sim::GameState;
use pong_circle::ui::{
    FrameClock, Frontend, HeadlessFrontend, RealtimeClock, SteppedClock, TerminalFrontend,
    run_session,
};

#[derive(Parser)]
#[command(name = "pong-circle", about = "Circular arena Pong demo", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Player name (prompted if absent)
    #[arg(long)]
    name: Option<String>,

    /// Player age (prompted if absent)
    #[arg(long)]
    age: Option<String>,

    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Results CSV (overrides the settings file)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Seed for the launch heading
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a terminal UI, steered by the autopilot
    #[arg(long)]
    headless: bool,

    /// Frame limit for headless runs
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Let the autopilot steer in the terminal UI
    #[arg(long)]
    autopilot: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one session (default)
    Play,
    /// Print the rows recorded in the results file
    History,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = matches!(cli.command, None | Some(Command::Play)) && !cli.headless;
    init_logging(cli.log_file.as_deref(), tui)?;

    let mut settings = Settings::load_or_default(cli.config.as_deref())
        .context("failed to load settings")?;
    if let Some(output) = &cli.output {
        settings.results_path = output.clone();
    }

    match cli.command {
        Some(Command::History) => cmd_history(&settings.results_path),
        None | Some(Command::Play) => cmd_play(&cli, &settings),
    }
}

/// env_logger to stderr or a file; silent by default under the terminal UI
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default_filter = if tui && log_file.is_none() { "off" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn cmd_play(cli: &Cli, settings: &Settings) -> Result<()> {
    let player = resolve_player(cli.name.clone(), cli.age.clone())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    let frame = settings.frame_duration();

    let (state, finished_at) = if cli.headless {
        let mut clock = SteppedClock::new(Instant::now(), frame);
        let mut frontend = HeadlessFrontend::new(cli.frames);
        play(settings, seed, &mut frontend, &mut clock)?
    } else {
        let mut clock = RealtimeClock::new(frame);
        let title = format!(" Pong Circle: {} ", player.name);
        let mut frontend =
            TerminalFrontend::new(title, cli.autopilot).context("failed to start terminal UI")?;
        // The frontend restores the terminal when it drops at the end of this block
        play(settings, seed, &mut frontend, &mut clock)?
    };

    let path = &settings.results_path;
    let record = state
        .finalize_and_export(&player, path, finished_at)
        .with_context(|| format!("failed to export results to {}", path.display()))?;

    println!(
        "Hits: {}  Fastest Speed: {:.2}  Time: {}s  (saved to {})",
        record.hits,
        record.fastest_speed,
        record.elapsed_seconds,
        path.display()
    );
    Ok(())
}

/// Run one session and return the final state with its end time
fn play<F, C>(
    settings: &Settings,
    seed: u64,
    frontend: &mut F,
    clock: &mut C,
) -> Result<(GameState, Instant)>
where
    F: Frontend,
    C: FrameClock,
{
    let state = GameState::new(settings, seed, clock.now());
    let state = run_session(state, frontend, clock).context("session aborted")?;
    Ok((state, clock.now()))
}

fn cmd_history(path: &Path) -> Result<()> {
    let records = match results::load_records(path) {
        Ok(records) => records,
        Err(ExportError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            println!("No results recorded yet in {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to read results"),
    };

    println!("{:<6} {:<20} {:>6} {:>8} {:>8}", "AGE", "NAME", "HITS", "FASTEST", "TIME");
    for r in &records {
        println!(
            "{:<6} {:<20} {:>6} {:>8.2} {:>7}s",
            r.age, r.name, r.hits, r.fastest_speed, r.elapsed_seconds
        );
    }
    println!("{} session(s)", records.len());
    Ok(())
}

/// Use the flags if given, otherwise ask on stdin
fn resolve_player(name: Option<String>, age: Option<String>) -> Result<Player> {
    let name = match name {
        Some(name) => name,
        None => prompt("Enter Player Name: ")?,
    };
    let age = match age {
        Some(age) => age,
        None => prompt("Enter Player Age: ")?,
    };
    Ok(Player::new(name, age))
}

fn prompt(label: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
