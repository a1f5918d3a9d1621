use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use asciiquarium::config::{Config, Style};
use asciiquarium::display::TerminalDisplay;
use asciiquarium::scene::Scene;
use asciiquarium::spawn;

/// An aquarium animation for the terminal.
#[derive(Parser, Debug)]
#[command(name = "asciiquarium", version, about)]
struct Args {
    /// Only use the classic fish and monster art
    #[arg(short, long)]
    classic: bool,

    /// Target frames per second (1-120)
    #[arg(long, default_value_t = 20)]
    fps: u32,

    /// Seed the scene RNG for a reproducible tank
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> Config {
        let style = if self.classic {
            Style::Classic
        } else {
            Style::Modern
        };
        let config = Config::default().with_style(style).with_fps(self.fps);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the animation, so logging is off unless it is
/// sent to a file or explicitly requested through `RUST_LOG`.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };
    builder.init();
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Action {
    Quit,
    TogglePause,
    Restart,
    Resize(u16, u16),
}

fn action_for(event: Event) -> Option<Action> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Action::TogglePause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            _ => None,
        },
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Blocking event reads on a dedicated thread, forwarded over a channel so
/// the frame loop never waits on input.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(err) => {
                log::warn!("input thread stopped: {}", err);
                break;
            }
        }
    });
    rx
}

// ── Frame loop ────────────────────────────────────────────────────────────────

fn run(
    display: &mut TerminalDisplay,
    scene: &mut Scene,
    rx: &mpsc::Receiver<Event>,
    frame_interval: Duration,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        loop {
            let event = match rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            };
            match action_for(event) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::TogglePause) => scene.toggle_pause(),
                Some(Action::Restart) => {
                    log::info!("restarting");
                    scene.reset();
                    spawn::populate(scene);
                    display.invalidate();
                }
                Some(Action::Resize(width, height)) => {
                    scene.resize(width, height);
                    spawn::populate(scene);
                    display.invalidate();
                }
                None => {}
            }
        }

        let redraw = !scene.is_paused() || scene.needs_redraw();
        let frame = scene.tick();
        if redraw {
            display.draw(frame).context("failed to draw frame")?;
        }

        // Late frames are not made up.
        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;
    let config = args.config();

    let (width, height) = terminal::size().context("cannot query terminal size")?;
    let mut scene = Scene::new(width, height, &config);
    spawn::populate(&mut scene);

    let mut display = TerminalDisplay::stdout();
    display.enter().context("cannot set up terminal")?;
    let rx = spawn_input_thread();

    let result = run(&mut display, &mut scene, &rx, config.frame_interval());

    // Always restore the terminal
    let restored = display.exit().context("cannot restore terminal");
    result.and(restored)
}
