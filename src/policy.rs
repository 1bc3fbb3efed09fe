//! The action-selection policy: a fixed-priority chain of strategies.
//!
//! Four strategies run in order — Complete, Grow, Seed, Wait — and the first
//! one that produces an action wins. The ordering encodes the priority:
//! harvesting mature trees beats growth, growth beats expansion, expansion
//! beats passing.
//!
//! Each strategy is a pure function over the board, the snapshot, and a
//! working copy of the tree collection. A strategy that fires records its
//! consequence in the working copy (a felled harvest, a bumped size, a
//! planted seed) so a later strategy in the same turn would see it; the copy
//! dies with the turn and the next snapshot starts clean.

mod complete;
mod grow;
mod seed;
mod wait;

pub use complete::try_complete;
pub use grow::try_grow;
pub use seed::try_seed;
pub use wait::wait;

use crate::game::{Action, Board, Forest, Game};

/// A single strategy: inspect the turn, optionally claim it with an action.
pub type Strategy = fn(&Board, &Game, &mut Forest) -> Option<Action>;

/// The priority chain, highest priority first.
const CHAIN: [Strategy; 4] = [try_complete, try_grow, try_seed, wait];

/// Decide the action for one turn.
///
/// Total over every snapshot: the terminal Wait strategy never declines, so
/// exactly one action always comes back. Invoked once per turn; no strategy
/// is retried.
#[must_use]
pub fn decide(board: &Board, game: &Game) -> Action {
    let mut working = game.trees.clone();
    CHAIN
        .iter()
        .find_map(|strategy| strategy(board, game, &mut working))
        .unwrap_or(Action::Wait)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tree;

    #[test]
    fn test_empty_turn_waits() {
        let board = Board::hexagonal(3).unwrap();
        let game = Game::default();
        assert_eq!(decide(&board, &game), Action::Wait);
    }

    #[test]
    fn test_chain_prefers_complete_over_grow() {
        let board = Board::hexagonal(3).unwrap();
        // Low nutrients arm the harvest rule; the size-1 tree would be an
        // affordable grow otherwise.
        let game = Game {
            day: 3,
            nutrients: 5,
            my_sun: 10,
            trees: Forest::new(vec![
                Tree::new(0, 3, true, false),
                Tree::new(1, 1, true, false),
            ]),
            ..Game::default()
        };
        assert_eq!(decide(&board, &game), Action::Complete { cell: 0 });
    }

    #[test]
    fn test_chain_falls_through_to_grow() {
        let board = Board::hexagonal(3).unwrap();
        let game = Game {
            day: 3,
            nutrients: 20,
            my_sun: 10,
            trees: Forest::new(vec![
                Tree::new(0, 3, true, false),
                Tree::new(1, 1, true, false),
            ]),
            ..Game::default()
        };
        // Complete declines (no timing condition holds), so the size-1 tree
        // grows.
        assert_eq!(decide(&board, &game), Action::Grow { cell: 1 });
    }

    #[test]
    fn test_decision_is_deterministic() {
        let board = Board::hexagonal(3).unwrap();
        let game = Game {
            day: 12,
            nutrients: 14,
            my_sun: 9,
            trees: Forest::new(vec![
                Tree::new(0, 2, true, false),
                Tree::new(9, 1, true, false),
                Tree::new(22, 3, false, false),
            ]),
            ..Game::default()
        };
        assert_eq!(decide(&board, &game), decide(&board, &game));
    }
}
