//! Terminal fallback: pass for the day.

use crate::game::{Action, Board, Forest, Game};

/// Always applicable; guarantees the chain produces an action.
pub fn wait(_board: &Board, _game: &Game, _trees: &mut Forest) -> Option<Action> {
    Some(Action::Wait)
}
