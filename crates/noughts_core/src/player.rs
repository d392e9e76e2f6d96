//! Players and seating order.

use super::types::Marker;
use serde::{Deserialize, Serialize};

/// A participant, identified by its marker. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    marker: Marker,
}

impl Player {
    /// Creates a player that plays `marker`.
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }

    /// Returns the player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The fixed seating for a new game: `x` first, `o` second.
    pub fn pair() -> [Player; 2] {
        [Player::new(Marker::X), Player::new(Marker::O)]
    }
}

/// Which of the two players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Seat {
    /// The player constructed first; opens every game.
    #[default]
    First,
    /// The player constructed second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into the player pair (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}
