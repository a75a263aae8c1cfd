//! Terminal front-end and command loop.
//!
//! Stands in for the browser board: each input line is one user interaction,
//! handled to completion against the owned `GameSession` before the next one.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::{ClickOutcome, GameSession};
use crate::terminal::commands::{parse_command, Command};
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_generator::generate_fen;
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
commands:
  <square>          click a square (select a piece, then click its target)
  <from> <to>       move directly, e.g. `e2 e4` or `e2e4`
  moves <square>    list legal targets of a piece
  board | clock | fen | help | quit";

pub struct TerminalState {
    session: GameSession,
}

impl TerminalState {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        if line.trim().is_empty() {
            return Ok(false);
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                debug!("bad input: {err}");
                writeln!(out, "{err}")?;
                return Ok(false);
            }
        };

        match command {
            Command::Click(square) => match self.session.click(square) {
                ClickOutcome::Selected { highlights, .. } => {
                    writeln!(out, "{}", render_game_state(&self.session, &highlights))?;
                }
                ClickOutcome::Moved { .. } => {
                    writeln!(out, "{}", render_game_state(&self.session, &[]))?;
                }
                ClickOutcome::Rejected { start, end } => {
                    writeln!(
                        out,
                        "illegal move {}{}; selection cleared",
                        square_to_algebraic(start),
                        square_to_algebraic(end)
                    )?;
                }
                ClickOutcome::Ignored => {
                    writeln!(
                        out,
                        "no {} piece on {}",
                        self.session.current_player().name(),
                        square_to_algebraic(square)
                    )?;
                }
            },
            Command::Move(start, end) => {
                if self.session.try_move(start, end) {
                    writeln!(out, "{}", render_game_state(&self.session, &[]))?;
                } else {
                    writeln!(
                        out,
                        "illegal move {}{}",
                        square_to_algebraic(start),
                        square_to_algebraic(end)
                    )?;
                }
            }
            Command::Moves(square) => {
                let targets: Vec<String> = self
                    .session
                    .legal_destinations(square)
                    .into_iter()
                    .map(square_to_algebraic)
                    .collect();
                writeln!(out, "{}: {}", square_to_algebraic(square), targets.join(" "))?;
            }
            Command::Board => {
                writeln!(out, "{}", render_game_state(&self.session, &[]))?;
            }
            Command::Clock => {
                let clock = self.session.clock();
                writeln!(
                    out,
                    "white {}  black {}",
                    clock.display(Color::Light),
                    clock.display(Color::Dark)
                )?;
            }
            Command::Fen => {
                writeln!(
                    out,
                    "{}",
                    generate_fen(self.session.board(), self.session.current_player())
                )?;
            }
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Quit => {
                info!("session ended by user");
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// One second of wall time has passed.
    pub fn handle_tick(&mut self) {
        self.session.tick_clock();
    }
}

/// Read `reader` line by line and hand each line to `forward` until it
/// returns `false` or input ends. Lines that are not valid UTF-8 are logged
/// and skipped; other read errors are returned.
pub fn forward_input_lines(
    mut reader: impl BufRead,
    mut forward: impl FnMut(String) -> bool,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        match String::from_utf8(buf.clone()) {
            Ok(line) => {
                let line = line.trim_end_matches(|c| c == '\n' || c == '\r').to_owned();
                if !forward(line) {
                    return Ok(());
                }
            }
            Err(err) => warn!("skipping input line that is not valid UTF-8: {err}"),
        }
    }
}
