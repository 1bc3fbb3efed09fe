#![no_main]

use arbitrary::Arbitrary;
use canopy::game::{Board, Forest, Game, Tree, check_invariants};
use canopy::policy::decide;
use libfuzzer_sys::fuzz_target;

/// Structured input for decision fuzzing.
#[derive(Arbitrary, Debug)]
struct TurnInput {
    /// Day of the turn (wrapped into 0..=23).
    day: u8,
    /// Nutrient pool.
    nutrients: u16,
    /// Own sun points.
    my_sun: u16,
    /// Opponent sun points.
    opp_sun: u16,
    /// Raw trees: (cell, size, mine, dormant), wrapped onto the board.
    trees: Vec<(u8, u8, bool, bool)>,
}

fuzz_target!(|input: TurnInput| {
    let Some(board) = Board::hexagonal(3) else {
        return;
    };

    // Keep at most one tree per cell so the snapshot is valid.
    let mut seen = [false; 37];
    let mut trees = Vec::new();
    for &(cell, size, mine, dormant) in input.trees.iter().take(37) {
        let cell = cell % 37;
        if !seen[usize::from(cell)] {
            seen[usize::from(cell)] = true;
            trees.push(Tree::new(cell, size % 4, mine, dormant));
        }
    }

    let game = Game {
        day: input.day % 24,
        nutrients: u32::from(input.nutrients),
        my_sun: u32::from(input.my_sun),
        opp_sun: u32::from(input.opp_sun),
        trees: Forest::new(trees),
        ..Game::default()
    };
    assert!(check_invariants(&board, &game).is_empty());

    // Deciding must never panic, and must be deterministic.
    let first = decide(&board, &game);
    let second = decide(&board, &game);
    assert_eq!(first, second, "decision must be deterministic");
});
