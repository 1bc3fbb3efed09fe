//! Harvest rule: cash in a mature tree when the timing is right.

use crate::game::{Action, Board, COMPLETE_COST, FINAL_DAY, Forest, Game, MAX_SIZE};

/// Day after which holding the size-3 majority justifies harvesting early.
const CONTEST_DAY: u8 = 10;

/// Nutrient level under which waiting only cheapens the harvest.
const LOW_NUTRIENTS: u32 = 12;

/// Complete the best mature tree if an end-game condition holds.
///
/// Fires when the flat harvest price fits the sun budget, an own non-dormant
/// size-3 tree exists, and at least one of:
/// - past day 10 with more size-3 trees than the opponent,
/// - the remaining days are barely enough to complete every mature tree
///   (day ≥ 23 − own size-3 count),
/// - the nutrient pool has dropped below 12.
///
/// The size-3 counts include dormant trees; only the harvest target itself
/// must be awake. Among eligible targets the one on the richest cell wins,
/// first in snapshot order on ties. The felled tree leaves the working copy.
pub fn try_complete(board: &Board, game: &Game, trees: &mut Forest) -> Option<Action> {
    let mine_mature = trees.mine().filter(|t| t.size == MAX_SIZE).count() as i64;
    let theirs_mature = trees.theirs().filter(|t| t.size == MAX_SIZE).count() as i64;

    let majority = game.day > CONTEST_DAY && mine_mature > theirs_mature;
    let end_game = i64::from(game.day) >= i64::from(FINAL_DAY) - mine_mature;
    let low_nutrients = game.nutrients < LOW_NUTRIENTS;
    if !(majority || end_game || low_nutrients) || game.my_sun < COMPLETE_COST {
        return None;
    }

    let mut target: Option<(u8, u8)> = None;
    for tree in trees.mine().filter(|t| !t.dormant && t.size == MAX_SIZE) {
        let richness = board.richness(tree.cell);
        if target.is_none_or(|(_, best)| richness > best) {
            target = Some((tree.cell, richness));
        }
    }
    let (cell, _) = target?;

    trees.fell(cell);
    Some(Action::Complete { cell })
}
