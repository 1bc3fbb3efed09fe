//! Growth rule: advance the most mature affordable tree.

use crate::game::{Action, Board, CellId, Forest, Game, MAX_SIZE, grow_cost};

/// One growable tree with its price, ready for ranking.
struct Candidate {
    cell: CellId,
    size: u8,
    cost: u32,
    richness: u8,
}

/// Grow the preferred affordable tree, if any.
///
/// Candidates are our awake trees below size 3 whose growth price fits the
/// sun budget, ranked by size descending, then price ascending, then cell
/// richness descending, then snapshot order. The chosen tree's size is
/// bumped in the working copy; nothing is planted or felled.
pub fn try_grow(board: &Board, game: &Game, trees: &mut Forest) -> Option<Action> {
    let forest: &Forest = trees;
    let mut candidates: Vec<Candidate> = forest
        .mine()
        .filter(|t| !t.dormant && t.size < MAX_SIZE)
        .map(|t| Candidate {
            cell: t.cell,
            size: t.size,
            cost: grow_cost(forest, *t),
            richness: board.richness(t.cell),
        })
        .filter(|c| c.cost <= game.my_sun)
        .collect();

    candidates.sort_by(|a, b| {
        b.size
            .cmp(&a.size)
            .then(a.cost.cmp(&b.cost))
            .then(b.richness.cmp(&a.richness))
    });

    let cell = candidates.first()?.cell;
    trees.grow(cell);
    Some(Action::Grow { cell })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Tree;

    fn board() -> Board {
        Board::hexagonal(3).unwrap()
    }

    fn game_with(my_sun: u32, trees: Vec<Tree>) -> Game {
        Game {
            my_sun,
            trees: Forest::new(trees),
            ..Game::default()
        }
    }

    #[test]
    fn test_declines_with_nothing_affordable() {
        // A lone size-2 tree costs 7 to grow.
        let game = game_with(6, vec![Tree::new(0, 2, true, false)]);
        let mut working = game.trees.clone();
        assert_eq!(try_grow(&board(), &game, &mut working), None);
    }

    #[test]
    fn test_prefers_larger_size_when_affordable() {
        // Size 2 on a poor cell (cost 7) vs size 1 on the center (cost 3).
        let game = game_with(
            10,
            vec![Tree::new(0, 1, true, false), Tree::new(20, 2, true, false)],
        );
        let mut working = game.trees.clone();
        let action = try_grow(&board(), &game, &mut working);
        assert_eq!(action, Some(Action::Grow { cell: 20 }));
        assert_eq!(working.tree_at(20).unwrap().size, 3);
    }

    #[test]
    fn test_falls_back_to_smaller_when_short_on_sun() {
        let game = game_with(
            4,
            vec![Tree::new(0, 1, true, false), Tree::new(20, 2, true, false)],
        );
        let mut working = game.trees.clone();
        assert_eq!(try_grow(&board(), &game, &mut working), Some(Action::Grow { cell: 0 }));
    }

    #[test]
    fn test_equal_size_and_cost_prefers_richer_cell() {
        // Both size 1, both cost 3: the center tree outranks the outer one.
        let game = game_with(
            10,
            vec![Tree::new(20, 1, true, false), Tree::new(0, 1, true, false)],
        );
        let mut working = game.trees.clone();
        assert_eq!(try_grow(&board(), &game, &mut working), Some(Action::Grow { cell: 0 }));
    }

    #[test]
    fn test_equal_everything_takes_snapshot_order() {
        let game = game_with(
            10,
            vec![Tree::new(9, 1, true, false), Tree::new(7, 1, true, false)],
        );
        let mut working = game.trees.clone();
        assert_eq!(try_grow(&board(), &game, &mut working), Some(Action::Grow { cell: 9 }));
    }

    #[test]
    fn test_skips_dormant_and_mature_trees() {
        let game = game_with(
            20,
            vec![Tree::new(0, 2, true, true), Tree::new(1, 3, true, false)],
        );
        let mut working = game.trees.clone();
        assert_eq!(try_grow(&board(), &game, &mut working), None);
    }

    #[test]
    fn test_congestion_prices_use_current_forest() {
        // Two size-2 trees already held make the 1→2 step cost 3 + 2 = 5.
        let game = game_with(
            4,
            vec![
                Tree::new(0, 1, true, false),
                Tree::new(7, 2, true, true),
                Tree::new(8, 2, true, true),
            ],
        );
        let mut working = game.trees.clone();
        assert_eq!(try_grow(&board(), &game, &mut working), None);
    }
}
