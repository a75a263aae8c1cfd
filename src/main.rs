use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::mpsc::{channel, Sender};
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use plum_chess_board::config::SessionConfig;
use plum_chess_board::game_state::chess_rules::{DEFAULT_CLOCK_SECONDS, STARTING_POSITION_FEN};
use plum_chess_board::game_state::game_state::GameSession;
use plum_chess_board::terminal::terminal_top::{forward_input_lines, TerminalState};
use plum_chess_board::utils::render_game_state::render_game_state;

/// Two-player chess board with move validation and per-player clocks.
#[derive(Debug, Parser)]
#[command(name = "plum_chess_board", version)]
struct Cli {
    /// Seconds on each player's clock.
    #[arg(
        long,
        default_value_t = DEFAULT_CLOCK_SECONDS,
        value_parser = clap::value_parser!(i64).range(0..=MAX_CLOCK_SECONDS)
    )]
    time: i64,

    /// Starting position as FEN (placement and optional side to move).
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Do not run the per-second clock ticker.
    #[arg(long)]
    no_clock: bool,
}

/// One week; larger allowances are rejected on the command line.
const MAX_CLOCK_SECONDS: i64 = 7 * 24 * 60 * 60;

enum Event {
    Tick,
    Line(String),
    InputClosed,
    InputFailed(io::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = SessionConfig {
        initial_clock_seconds: cli.time,
        starting_fen: cli.fen,
    };
    let session = match GameSession::from_config(&config) {
        Ok(session) => session,
        Err(err) => {
            error!("cannot start session: {err}");
            eprintln!("cannot start session: {err}");
            return ExitCode::from(2);
        }
    };

    info!(
        "session started, {} s per side, {} to move",
        config.initial_clock_seconds,
        session.current_player().name()
    );

    let (event_tx, event_rx) = channel::<Event>();
    if !cli.no_clock {
        spawn_ticker(event_tx.clone());
    }
    spawn_stdin_reader(event_tx);

    let mut stdout = io::stdout();
    if let Err(err) = writeln!(stdout, "{}", render_game_state(&session, &[]))
        .and_then(|()| stdout.flush())
    {
        return write_failure(err);
    }

    let mut terminal = TerminalState::new(session);

    // Single consumer: ticks and input lines are applied one at a time.
    for event in event_rx {
        match event {
            Event::Tick => terminal.handle_tick(),
            Event::Line(line) => match terminal.handle_command(&line, &mut stdout) {
                Ok(true) => break,
                Ok(false) => {
                    if let Err(err) = stdout.flush() {
                        return write_failure(err);
                    }
                }
                Err(err) => return write_failure(err),
            },
            Event::InputClosed => break,
            Event::InputFailed(err) => {
                error!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn write_failure(err: io::Error) -> ExitCode {
    error!("failed to write output: {err}");
    ExitCode::FAILURE
}

fn spawn_ticker(event_tx: Sender<Event>) {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if event_tx.send(Event::Tick).is_err() {
            break;
        }
    });
}

fn spawn_stdin_reader(event_tx: Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        let result = forward_input_lines(stdin.lock(), |line| {
            event_tx.send(Event::Line(line)).is_ok()
        });
        let last = match result {
            Ok(()) => Event::InputClosed,
            Err(err) => Event::InputFailed(err),
        };
        let _ = event_tx.send(last);
    });
}
