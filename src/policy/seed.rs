//! Expansion rule: throw a seed onto the best distant cell.

use crate::game::{Action, Board, CellId, Forest, Game, Tree, seed_cost};

/// Plant a seed on the optimal cell, if one exists and we hold no seed yet.
///
/// Fires only when the seed price fits the sun budget and we have no
/// un-grown seed on the board. The planted seed joins the working copy,
/// dormant, so nothing later in the turn re-targets its cell.
pub fn try_seed(board: &Board, game: &Game, trees: &mut Forest) -> Option<Action> {
    let (source, target) = optimal_cell(board, trees)?;
    if seed_cost(trees) <= game.my_sun && trees.count_mine(0) == 0 {
        trees.plant(Tree::new(target, 0, true, true));
        return Some(Action::Seed { source, target });
    }
    None
}

/// Pick the (source tree, landing cell) pair for a seed throw.
///
/// Every awake own tree of size > 0 contributes the cells within a radius
/// equal to its size (duplicates and back-edges included). Candidates are
/// ordered by landing-cell richness descending then index ascending, pruned
/// to usable unoccupied cells, and the first whose neighborhood holds none
/// of our trees wins. A landing cell next to an own tree competes with it
/// for nutrients, so near-only options are rejected outright rather than
/// used as a fallback.
fn optimal_cell(board: &Board, trees: &Forest) -> Option<(CellId, CellId)> {
    let mut candidates: Vec<(CellId, CellId)> = Vec::new();
    for tree in trees.mine().filter(|t| !t.dormant && t.size > 0) {
        let source = tree.cell;
        let ring1: Vec<CellId> = board.neighbors(source).collect();
        candidates.extend(ring1.iter().map(|&c| (source, c)));
        if tree.size > 1 {
            for &mid in &ring1 {
                let ring2: Vec<CellId> = board.neighbors(mid).collect();
                candidates.extend(ring2.iter().map(|&c| (source, c)));
                if tree.size > 2 {
                    for &outer in &ring2 {
                        candidates.extend(board.neighbors(outer).map(|c| (source, c)));
                    }
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        board
            .richness(b.1)
            .cmp(&board.richness(a.1))
            .then(a.1.cmp(&b.1))
    });
    candidates.retain(|&(_, target)| board.richness(target) > 0 && !trees.is_occupied(target));

    candidates
        .into_iter()
        .find(|&(_, target)| !board.neighbors(target).any(|n| trees.mine_at(n)))
}
