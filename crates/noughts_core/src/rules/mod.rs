//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. The controller decides when to apply them.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
