//! The game's state machine.
//!
//! [`GameController`] owns the board and the session. The session is a sum
//! type, so the status message is derived from the phase instead of being
//! stored next to it: an active game can only ever announce whose turn it
//! is, and a finished game always carries its outcome.

use super::player::{Player, Seat};
use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{BOARD_SIZE, Board, Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Session state
// ─────────────────────────────────────────────────────────────

/// What an in-progress game currently announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnNotice {
    /// Freshly initialized; nothing announced yet.
    Opening,
    /// The player to move has been announced.
    NextTurn,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The marker completed a line.
    Winner(Marker),
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Marker> {
        match self {
            Outcome::Winner(marker) => Some(*marker),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// The game session, one variant per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Session {
    /// No game has been started yet.
    #[default]
    Uninitialized,
    /// Moves are accepted; `to_move` plays next.
    InProgress {
        /// Players in seat order.
        players: [Player; 2],
        /// Whose move is next.
        to_move: Seat,
        /// What the game currently announces.
        notice: TurnNotice,
    },
    /// A win or draw was reached; moves are ignored.
    Finished {
        /// Players in seat order.
        players: [Player; 2],
        /// The player who made the final move.
        to_move: Seat,
        /// How the game ended.
        outcome: Outcome,
    },
}

/// The status text category of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Announcement {
    /// Nothing to announce (not started, or just started).
    Silent,
    /// The named marker moves next.
    NextTurn(Marker),
    /// The named marker won.
    Winner(Marker),
    /// The game ended in a draw.
    Draw,
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Announcement::Silent => Ok(()),
            Announcement::NextTurn(marker) => write!(f, "{marker}'s turn."),
            Announcement::Winner(marker) => write!(f, "Player {marker} wins!"),
            Announcement::Draw => write!(f, "Draw!"),
        }
    }
}

/// An accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Where the marker went.
    pub position: Position,
    /// The marker placed.
    pub marker: Marker,
}

/// Why a move changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// No game is running (never started, or already finished).
    #[display("no game in progress")]
    NotActive,
    /// The index is not on the board.
    #[display("index {_0} is off the board")]
    OutOfRange(usize),
    /// The cell already holds a marker.
    #[display("{_0} is already taken")]
    Occupied(Position),
}

/// What a call to [`GameController::play_round`] did.
///
/// Purely informational; an ignored move has already been discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// The marker was placed and the turn passed to `next`.
    Continued {
        /// The marker to move next.
        next: Marker,
    },
    /// The marker was placed and completed a line.
    Won(Marker),
    /// The marker was placed and filled the board.
    Drawn,
}

impl RoundOutcome {
    /// Returns true if the move was placed on the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, RoundOutcome::Ignored(_))
    }
}

// ─────────────────────────────────────────────────────────────
//  Controller
// ─────────────────────────────────────────────────────────────

/// Orchestrates turn order, win/draw detection and the status message.
///
/// One long-lived instance per hosting process; [`GameController::init`]
/// restarts it any number of times.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    board: Board,
    session: Session,
    history: Vec<Placement>,
}

impl GameController {
    /// Creates a controller with an empty board and no game started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game, replacing any previous session.
    ///
    /// Players `x` then `o`, `x` to move, board cleared, message empty.
    #[instrument(skip(self))]
    pub fn init(&mut self) {
        self.board.reset();
        self.history.clear();
        self.session = Session::InProgress {
            players: Player::pair(),
            to_move: Seat::First,
            notice: TurnNotice::Opening,
        };
        info!("New game started");
    }

    /// Plays the current player's marker at `index` (0-8).
    ///
    /// Ignored without any state change when no game is active, when the
    /// index is off the board or when the cell is occupied. Otherwise the
    /// marker is placed, then a win is checked before a draw; only when
    /// neither applies does the turn pass to the other player.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        let Session::InProgress {
            players, to_move, ..
        } = self.session
        else {
            debug!("Move ignored: no game in progress");
            return RoundOutcome::Ignored(Rejection::NotActive);
        };

        let Some(position) = Position::from_index(index) else {
            debug!("Move ignored: index off the board");
            return RoundOutcome::Ignored(Rejection::OutOfRange(index));
        };

        let marker = players[to_move.index()].marker();
        if !self.board.place(index, marker) {
            debug!(%position, "Move ignored: cell occupied");
            return RoundOutcome::Ignored(Rejection::Occupied(position));
        }
        self.history.push(Placement { position, marker });

        let outcome = if let Some(winner) = check_winner(&self.board) {
            info!(%winner, "Game won");
            self.session = Session::Finished {
                players,
                to_move,
                outcome: Outcome::Winner(winner),
            };
            RoundOutcome::Won(winner)
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.session = Session::Finished {
                players,
                to_move,
                outcome: Outcome::Draw,
            };
            RoundOutcome::Drawn
        } else {
            let next_seat = to_move.other();
            let next = players[next_seat.index()].marker();
            debug!(%marker, %next, %position, "Move accepted");
            self.session = Session::InProgress {
                players,
                to_move: next_seat,
                notice: TurnNotice::NextTurn,
            };
            RoundOutcome::Continued { next }
        };

        #[cfg(debug_assertions)]
        self.debug_check_invariants();

        outcome
    }

    /// Returns true while the game accepts moves.
    pub fn active(&self) -> bool {
        matches!(self.session, Session::InProgress { .. })
    }

    /// Returns the player whose turn it is, or who made the final move of a
    /// finished game. `None` before the first [`init`](Self::init).
    pub fn current_player(&self) -> Option<Player> {
        match self.session {
            Session::Uninitialized => None,
            Session::InProgress {
                players, to_move, ..
            }
            | Session::Finished {
                players, to_move, ..
            } => Some(players[to_move.index()]),
        }
    }

    /// Returns the status category for the current session.
    pub fn announcement(&self) -> Announcement {
        match self.session {
            Session::Uninitialized
            | Session::InProgress {
                notice: TurnNotice::Opening,
                ..
            } => Announcement::Silent,
            Session::InProgress {
                players,
                to_move,
                notice: TurnNotice::NextTurn,
            } => Announcement::NextTurn(players[to_move.index()].marker()),
            Session::Finished {
                outcome: Outcome::Winner(marker),
                ..
            } => Announcement::Winner(marker),
            Session::Finished {
                outcome: Outcome::Draw,
                ..
            } => Announcement::Draw,
        }
    }

    /// Returns the human-readable status message.
    ///
    /// Empty until the first accepted move of a game.
    pub fn result_message(&self) -> String {
        self.announcement().to_string()
    }

    /// Returns the outcome once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.session {
            Session::Finished { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Returns the session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the board's cells.
    pub fn snapshot(&self) -> [Cell; BOARD_SIZE] {
        self.board.snapshot()
    }

    /// Returns the accepted placements of the current game, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            panic!("Game invariants violated: {violations:?}");
        }
    }
}
