mod ui;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use shadow_legends::core::constants::MAX_DELTA_SECONDS;
use shadow_legends::core::logging;
use shadow_legends::exploration::Direction;
use shadow_legends::{GameConfig, GameFlow, Input, Session};
use std::collections::HashMap;
use std::io;
use std::time::{Duration, Instant};

/// Without key-release reporting, a direction counts as held until the
/// terminal's key repeat goes quiet for this long.
const KEY_HOLD_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, PartialEq)]
enum Command {
    Play(GameConfig),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = GameConfig::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                config.seed = Some(seed);
            }
            "--enemies" => {
                let value = iter.next().ok_or("--enemies needs a value")?;
                config.enemy_count = value
                    .parse()
                    .map_err(|_| format!("invalid enemy count: {}", value))?;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(Command::Play(config))
}

fn print_help() {
    println!("Shadow Legends - Terminal RPG\n");
    println!("Usage: shadow-legends [options]\n");
    println!("Options:");
    println!("  --seed <n>     Fixed random seed");
    println!("  --enemies <n>  Number of enemies in the world");
    println!("  --version      Show version information");
    println!("  --help         Show this help message\n");
    println!("Set {}=<file> to write a log file.", logging::LOG_ENV_VAR);
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("shadow-legends {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'shadow-legends --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init_from_env()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?config.seed, enemies = config.enemy_count, "starting");
    let mut session = Session::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, &mut rng, release_events);

    // Restore terminal even when the loop failed
    if release_events {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "session ended with error");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
    rng: &mut StdRng,
    release_events: bool,
) -> io::Result<()> {
    let tick_interval = Duration::from_millis(session.config.tick_interval_ms);
    let mut last_tick = Instant::now();
    let mut held: HashMap<Direction, Instant> = HashMap::new();

    while session.is_running() {
        terminal.draw(|frame| ui::draw_ui(frame, session))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if is_interrupt(&key_event) {
                    break;
                }
                if let Some(input) = decode_key(&key_event, session.flow()) {
                    match input {
                        Input::Press(direction) => {
                            held.insert(direction, Instant::now());
                        }
                        Input::Release(direction) => {
                            held.remove(&direction);
                        }
                        _ => {}
                    }
                    session.handle_input(input, rng).map_err(io::Error::other)?;
                }
            }
        }

        if !release_events {
            let stale: Vec<Direction> = held
                .iter()
                .filter(|(_, pressed)| pressed.elapsed() >= KEY_HOLD_TIMEOUT)
                .map(|(direction, _)| *direction)
                .collect();
            for direction in stale {
                held.remove(&direction);
                session
                    .handle_input(Input::Release(direction), rng)
                    .map_err(io::Error::other)?;
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_interval {
            let delta_time = elapsed.as_secs_f64().min(MAX_DELTA_SECONDS);
            session.update(delta_time, rng).map_err(io::Error::other)?;
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Maps a terminal key to a semantic input for the current screen.
fn decode_key(key_event: &KeyEvent, flow: GameFlow) -> Option<Input> {
    if let Some(direction) = direction_for(key_event.code) {
        return match key_event.kind {
            KeyEventKind::Release => Some(Input::Release(direction)),
            _ => Some(Input::Press(direction)),
        };
    }
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match key_event.code {
        KeyCode::Enter => Some(Input::Confirm),
        KeyCode::Esc => Some(Input::Cancel),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Tab if flow == GameFlow::CharacterCreation => Some(Input::Press(Direction::Down)),
        KeyCode::Char(c) => match flow {
            GameFlow::CharacterCreation => Some(Input::Char(c)),
            GameFlow::Exploring | GameFlow::Inventory if c.eq_ignore_ascii_case(&'i') => {
                Some(Input::OpenInventory)
            }
            GameFlow::Combat | GameFlow::MainMenu | GameFlow::Paused => c
                .to_digit(10)
                .filter(|d| *d >= 1)
                .map(|d| Input::Select(d as usize - 1)),
            _ => None,
        },
        _ => None,
    }
}
