use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::Parser;
use snake_tty::config::{theme_by_name, GridSize, DEFAULT_GRID_SIDE, THEMES};
use snake_tty::game::{GameEvent, GameState, GameStatus};
use snake_tty::input::{poll_input, GameInput};
use snake_tty::renderer;
use snake_tty::score::{load_high_score, save_high_score};
use snake_tty::terminal_runtime::{install_panic_hook, TerminalSession};
use snake_tty::ui::hud::HudInfo;

/// How long one input poll blocks before the loop re-checks the tick timer.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid Snake for the terminal")]
struct Cli {
    /// Side length of the square playing field, in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIDE, value_parser = clap::value_parser!(u16).range(4..=128))]
    size: u16,

    /// Seed for deterministic food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting tick interval in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Disable the terminal bell on eat and game over.
    #[arg(long)]
    quiet: bool,

    /// Color theme to start with (classic, ocean, neon).
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if theme_by_name(&cli.theme).is_none() {
        eprintln!("Unknown theme '{}'; falling back to classic.", cli.theme);
    }

    // Read the score file before entering raw mode so a corrupt file can be
    // reported on a usable terminal.
    let high_score = match load_high_score() {
        Ok(score) => score,
        Err(error) => {
            eprintln!("Warning: could not read high score file: {error}");
            0
        }
    };

    install_panic_hook();
    run(&cli, high_score)
}

fn run(cli: &Cli, mut high_score: u32) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;

    let bounds = GridSize::square(cli.size);
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    };
    if let Some(interval_ms) = cli.interval_ms {
        state.set_base_tick_interval_ms(interval_ms);
    }

    let mut theme_idx = THEMES
        .iter()
        .position(|theme| theme.name.eq_ignore_ascii_case(&cli.theme))
        .unwrap_or(0);

    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &state,
                &HudInfo {
                    high_score,
                    theme: &THEMES[theme_idx],
                },
            );
        })?;

        if let Some(game_input) = poll_input(INPUT_POLL_TIMEOUT)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Restart => state.reset(),
                GameInput::Pause => state.toggle_pause(),
                GameInput::CycleTheme => theme_idx = (theme_idx + 1) % THEMES.len(),
                GameInput::Direction(direction) => state.set_direction(direction),
            }
        }

        // The driver owns the timer: it stops scheduling steps once the game
        // terminates, and re-reads the interval every pass so the speed ramp
        // takes effect from the very next tick.
        if state.status == GameStatus::Running && last_tick.elapsed() >= state.tick_interval() {
            let events = state.step();
            last_tick = Instant::now();
            handle_events(&events, &mut high_score, &state, cli.quiet);
        }
    }

    Ok(())
}

fn handle_events(events: &[GameEvent], high_score: &mut u32, state: &GameState, quiet: bool) {
    for event in events {
        match event {
            GameEvent::Ate => {
                if !quiet {
                    ring_bell();
                }
            }
            GameEvent::GameOver => {
                if !quiet {
                    ring_bell();
                }
                if state.score > *high_score {
                    *high_score = state.score;
                    if let Err(error) = save_high_score(*high_score) {
                        eprintln!("Failed to save high score: {error}");
                    }
                }
            }
        }
    }
}

/// Sounds the terminal bell. Playback failure is irrelevant to the game, so
/// errors are swallowed here at the collaborator boundary.
fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
