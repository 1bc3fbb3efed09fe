//! Sun-point prices for the three spending actions.
//!
//! Growth and seeding get more expensive the more trees we already hold at
//! the destination size class; completion is a flat price. All of these are
//! total functions over any snapshot.

use crate::game::tree::{Forest, Tree};

/// Flat price of completing a mature tree.
pub const COMPLETE_COST: u32 = 4;

/// Price of growing `tree` one size class.
///
/// Base price 1/3/7 for the 0→1, 1→2 and 2→3 transitions, plus one sun per
/// own tree already at the destination size. A mature tree cannot grow; its
/// price is 0.
#[must_use]
pub fn grow_cost(trees: &Forest, tree: Tree) -> u32 {
    match tree.size {
        0 => 1 + trees.count_mine(1),
        1 => 3 + trees.count_mine(2),
        2 => 7 + trees.count_mine(3),
        _ => 0,
    }
}

/// Price of planting a new seed: one sun per own seed already on the board.
#[must_use]
pub fn seed_cost(trees: &Forest) -> u32 {
    trees.count_mine(0)
}
