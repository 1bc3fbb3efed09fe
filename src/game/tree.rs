//! Trees and the per-turn tree collection.

use crate::game::board::CellId;

/// Largest size class; a tree this size can only be completed.
pub const MAX_SIZE: u8 = 3;

/// A single tree on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    /// Cell the tree stands on.
    pub cell: CellId,
    /// Size class: 0 = seed, up to [`MAX_SIZE`] = mature.
    pub size: u8,
    /// Whether the tree belongs to us.
    pub mine: bool,
    /// Whether the tree has already acted and sleeps for the rest of the day.
    pub dormant: bool,
}

impl Tree {
    /// Create a new tree.
    #[must_use]
    pub const fn new(cell: CellId, size: u8, mine: bool, dormant: bool) -> Self {
        Self {
            cell,
            size,
            mine,
            dormant,
        }
    }
}

/// The live tree collection for one turn.
///
/// Rebuilt from the snapshot every turn, never patched across turns.
/// Strategies receive a working copy and may plant or fell trees
/// mid-decision so a later strategy in the same turn sees the consequence;
/// the copy is discarded with the turn.
///
/// The own/opponent views are computed on demand so they can never go stale
/// after a mid-turn mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    /// Trees in snapshot order.
    trees: Vec<Tree>,
}

impl Forest {
    /// Create a forest from trees in snapshot order.
    #[must_use]
    pub fn new(trees: Vec<Tree>) -> Self {
        Self { trees }
    }

    /// Number of trees on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Check whether the board holds no trees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Iterate over all trees in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tree> {
        self.trees.iter()
    }

    /// Our trees, in snapshot order.
    pub fn mine(&self) -> impl Iterator<Item = &Tree> + '_ {
        self.trees.iter().filter(|t| t.mine)
    }

    /// The opponent's trees, in snapshot order.
    pub fn theirs(&self) -> impl Iterator<Item = &Tree> + '_ {
        self.trees.iter().filter(|t| !t.mine)
    }

    /// Count our trees of the given size class.
    #[must_use]
    pub fn count_mine(&self, size: u8) -> u32 {
        self.mine().filter(|t| t.size == size).count() as u32
    }

    /// Check whether any tree, ours or the opponent's, stands on the cell.
    #[must_use]
    pub fn is_occupied(&self, cell: CellId) -> bool {
        self.trees.iter().any(|t| t.cell == cell)
    }

    /// Check whether one of our trees stands on the cell.
    #[must_use]
    pub fn mine_at(&self, cell: CellId) -> bool {
        self.mine().any(|t| t.cell == cell)
    }

    /// Get the tree standing on the cell, if any.
    #[must_use]
    pub fn tree_at(&self, cell: CellId) -> Option<&Tree> {
        self.trees.iter().find(|t| t.cell == cell)
    }

    /// Add a tree. Mid-turn this is the seed strategy recording its throw.
    pub fn plant(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    /// Remove the tree on the cell, returning it. Mid-turn this is the
    /// complete strategy consuming its harvest.
    pub fn fell(&mut self, cell: CellId) -> Option<Tree> {
        let at = self.trees.iter().position(|t| t.cell == cell)?;
        Some(self.trees.remove(at))
    }

    /// Bump the size of the tree on the cell by one class.
    ///
    /// Returns `false` if the cell is empty or the tree is already mature.
    pub fn grow(&mut self, cell: CellId) -> bool {
        match self.trees.iter_mut().find(|t| t.cell == cell) {
            Some(tree) if tree.size < MAX_SIZE => {
                tree.size += 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        Forest::new(vec![
            Tree::new(0, 3, true, false),
            Tree::new(1, 0, true, true),
            Tree::new(2, 1, false, false),
            Tree::new(5, 1, true, false),
        ])
    }

    #[test]
    fn test_views_filter_by_owner() {
        let forest = sample();
        assert_eq!(forest.mine().count(), 3);
        assert_eq!(forest.theirs().count(), 1);
        assert_eq!(forest.count_mine(1), 1);
        assert_eq!(forest.count_mine(0), 1);
        assert_eq!(forest.count_mine(2), 0);
    }

    #[test]
    fn test_occupancy() {
        let forest = sample();
        assert!(forest.is_occupied(2));
        assert!(!forest.mine_at(2));
        assert!(forest.mine_at(5));
        assert!(!forest.is_occupied(4));
    }

    #[test]
    fn test_plant_is_visible_to_views() {
        let mut forest = sample();
        forest.plant(Tree::new(9, 0, true, true));
        assert_eq!(forest.count_mine(0), 2);
        assert!(forest.is_occupied(9));
    }

    #[test]
    fn test_fell_removes_exactly_one() {
        let mut forest = sample();
        let felled = forest.fell(0).unwrap();
        assert_eq!(felled.size, 3);
        assert!(!forest.is_occupied(0));
        assert_eq!(forest.len(), 3);
        assert!(forest.fell(0).is_none());
    }

    #[test]
    fn test_grow_caps_at_mature() {
        let mut forest = sample();
        assert!(forest.grow(5));
        assert_eq!(forest.tree_at(5).unwrap().size, 2);
        assert!(!forest.grow(0), "mature tree must not grow");
        assert!(!forest.grow(30), "empty cell must not grow");
    }
}
