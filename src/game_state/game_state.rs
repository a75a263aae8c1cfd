//! Explicitly owned game session.
//!
//! `GameSession` bundles the board, the side to move, the clocks and the
//! pending selection. It is the only mutator of that state; every operation
//! runs to completion before the next input is handled.

use chrono::TimeDelta;
use log::debug;

use crate::chess_errors::ChessResult;
use crate::config::SessionConfig;
use crate::game_state::chess_clock::ChessClock;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_valid_move;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::move_generation::legal_move_shared::is_piece_of_player;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_parser::parse_fen;

/// Result of clicking a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was selected.
    Selected {
        square: Square,
        highlights: Vec<Square>,
    },
    /// The pending selection moved to the clicked square.
    Moved { start: Square, end: Square },
    /// The pending selection could not move there; selection is cleared.
    Rejected { start: Square, end: Square },
    /// Nothing selected and the square holds no piece of the side to move.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Color,
    clock: ChessClock,
    selected: Option<Square>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameSession {
    /// Standard starting position, light to move, default clocks.
    pub fn new_game() -> Self {
        Self::from_position(Board::initial_position(), Color::Light, ChessClock::default())
    }

    pub fn from_config(config: &SessionConfig) -> ChessResult<Self> {
        let (board, current_player) = parse_fen(&config.starting_fen)?;
        let mut clock = ChessClock::from_seconds(config.initial_clock_seconds);
        clock.switch_to(current_player);
        Ok(Self::from_position(board, current_player, clock))
    }

    pub fn from_position(board: Board, current_player: Color, clock: ChessClock) -> Self {
        Self {
            board,
            current_player,
            clock,
            selected: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn clock(&self) -> &ChessClock {
        &self.clock
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn is_valid_move(&self, start: Square, end: Square) -> bool {
        is_valid_move(&self.board, self.current_player, start, end)
    }

    pub fn legal_destinations(&self, start: Square) -> Vec<Square> {
        legal_destinations(&self.board, self.current_player, start)
    }

    /// Apply `start -> end` if legal, then hand the turn and the clock to the
    /// other side. An illegal move changes nothing but the selection.
    pub fn try_move(&mut self, start: Square, end: Square) -> bool {
        self.selected = None;

        if !self.is_valid_move(start, end) {
            debug!(
                "{} rejected {}{}",
                self.current_player.name(),
                square_to_algebraic(start),
                square_to_algebraic(end)
            );
            return false;
        }

        apply_move(&mut self.board, start, end);
        debug!(
            "{} played {}{}",
            self.current_player.name(),
            square_to_algebraic(start),
            square_to_algebraic(end)
        );
        self.switch_player();
        true
    }

    /// Square-click handling: a click with a pending selection is a move
    /// attempt, otherwise it may select a piece of the side to move.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if let Some(start) = self.selected {
            return if self.try_move(start, square) {
                ClickOutcome::Moved { start, end: square }
            } else {
                ClickOutcome::Rejected { start, end: square }
            };
        }

        if !is_piece_of_player(self.board.get(square), self.current_player) {
            return ClickOutcome::Ignored;
        }

        let highlights = self.legal_destinations(square);
        debug!(
            "{} selected {} ({} targets)",
            self.current_player.name(),
            square_to_algebraic(square),
            highlights.len()
        );
        self.selected = Some(square);
        ClickOutcome::Selected { square, highlights }
    }

    /// One second elapses for the side to move.
    pub fn tick_clock(&mut self) -> Option<(Color, TimeDelta)> {
        self.clock.tick()
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
        self.clock.switch_to(self.current_player);
    }
}
