mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use red_lost::clock::FrameClock;
use red_lost::config::GameConfig;
use red_lost::engine::{Engine, GameStatus, InputEvent};
use red_lost::surface::{AudioCues, Cue, Host, Shell};

use display::TerminalSurface;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

#[derive(Parser, Debug)]
#[command(name = "red_lost", about = "Help Red dodge the wolves")]
struct Args {
    /// JSON file overriding any of the default game constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for enemy lanes and speeds; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the title screen and play the dodge-only variant.
    #[arg(long)]
    classic: bool,
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// The terminal has one sound: the bell. Collisions and the final howl ring
/// it; everything else is only logged.
#[derive(Default)]
struct TerminalAudio {
    bell: bool,
}

impl TerminalAudio {
    fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }
}

impl AudioCues for TerminalAudio {
    fn play(&mut self, cue: Cue) {
        log::debug!("audio cue {:?}", cue);
        match cue {
            Cue::Growl | Cue::Howl => self.bell = true,
            Cue::Music | Cue::Shoot | Cue::BowCaught => {}
        }
    }

    fn stop(&mut self, cue: Cue) {
        log::debug!("audio cue {:?} stopped", cue);
    }
}

#[derive(Default)]
struct SessionShell {
    final_score: Option<u64>,
}

impl Shell for SessionShell {
    fn on_game_over(&mut self, score: u64) {
        self.final_score = Some(score);
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Command {
    Game(InputEvent),
    Restart,
    Quit,
}

/// Keys that mean nothing to the game map to `None` and are ignored.
fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Game(InputEvent::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Game(InputEvent::MoveRight))
        }
        KeyCode::Char(' ') => Some(Command::Game(InputEvent::Fire)),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => None,
    }
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start { bow_enabled: bool },
    Quit,
}

fn show_title<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "RED IS LOST";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Red))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(16), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("The wolves are coming. Choose your path:"))?;

    let options: &[(&str, &str, Color, &str)] = &[
        ("1", "Classic", Color::Green, "dodge the wolves for as long as you can"),
        ("2", "Hunter ", Color::Yellow, "catch the falling bow, then SPACE to shoot"),
    ];
    for (i, (key, label, color, desc)) in options.iter().enumerate() {
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(16), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<8}", label)))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(" {}", desc)))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(16), cy + 3))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    out.queue(style::ResetColor)?;
    out.flush()?;

    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, .. })) => match code {
                KeyCode::Char('1') => return Ok(MenuResult::Start { bow_enabled: false }),
                KeyCode::Char('2') => return Ok(MenuResult::Start { bow_enabled: true }),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum SessionEnd {
    GameOver(u64),
    Quit,
}

/// Returns `true` → quit program,  `false` → back to the title screen.
///
/// Plays sessions back to back: after each game over the overlay waits for
/// R (fresh session from the same config) or Q.
fn game_loop<W: Write>(
    out: &mut W,
    engine: &mut Engine,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    loop {
        let score = match play_session(out, engine, rng, rx)? {
            SessionEnd::Quit => return Ok(true),
            SessionEnd::GameOver(score) => score,
        };

        let (width, height) = terminal::size()?;
        display::draw_game_over(out, width, height, score)?;

        loop {
            match rx.recv() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                })) if kind != KeyEventKind::Release => match command_for(code, modifiers) {
                    Some(Command::Restart) => break,
                    Some(Command::Quit) => return Ok(false),
                    _ => {}
                },
                Ok(_) => {}
                Err(_) => return Ok(true),
            }
        }
        engine.restart(rng);
    }
}

/// One session, from the music cue to game over.
///
/// Each frame drains pending key events, ticks the engine once with the
/// wall time since the previous tick, then sleeps out the rest of the frame.
/// The next tick is only scheduled while the engine says it is running.
fn play_session<W: Write>(
    out: &mut W,
    engine: &mut Engine,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<SessionEnd> {
    let mut audio = TerminalAudio::default();
    let mut shell = SessionShell::default();
    let mut clock = FrameClock::new(engine.config().max_frame_ms);

    engine.start(&mut audio);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            match command_for(code, modifiers) {
                Some(Command::Quit) => return Ok(SessionEnd::Quit),
                Some(Command::Game(input)) => engine.handle_input(input, &mut audio),
                Some(Command::Restart) | None => {}
            }
        }

        let (width, height) = terminal::size()?;
        let mut surface = TerminalSurface::new(out, width, height, engine.config());
        let outcome = {
            let mut host = Host::new(&mut surface, &mut audio, &mut shell);
            engine.tick(clock.elapsed_ms(), rng, &mut host)?
        };
        surface.present()?;

        if audio.take_bell() {
            out.write_all(b"\x07")?;
            out.flush()?;
        }

        if !outcome.keep_running() {
            debug_assert_eq!(engine.status(), GameStatus::GameOver);
            let score = shell.final_score.unwrap_or_else(|| engine.score());
            return Ok(SessionEnd::GameOver(score));
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    config.validate().context("invalid game configuration")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, args.classic, &mut rng);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("game aborted: {:#}", err);
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    skip_title: bool,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    let mut first = true;
    loop {
        let bow_enabled = if skip_title && first {
            false
        } else {
            match show_title(out, rx)? {
                MenuResult::Quit => break,
                MenuResult::Start { bow_enabled } => bow_enabled,
            }
        };
        first = false;

        let session_config = GameConfig {
            bow_enabled,
            ..config.clone()
        };
        let mut engine = Engine::new(session_config, rng)?;
        if game_loop(out, &mut engine, rng, rx)? {
            break;
        }
    }
    Ok(())
}
