//! Domain model for the forest game.
//!
//! Everything the policy chain reads lives here:
//! - Board topology (37 hex cells, richness tiers, neighbor links)
//! - Per-turn snapshot (day, nutrients, sun, score, trees, legal actions)
//! - Sun-point cost model for grow/seed/complete
//! - Action type with the judge's wire encoding

mod action;
mod board;
mod costs;
mod invariants;
mod state;
mod tree;

pub use action::Action;
pub use board::{Board, Cell, CellId, DIRECTIONS};
pub use costs::{COMPLETE_COST, grow_cost, seed_cost};
pub use invariants::{InvariantViolation, MAX_RICHNESS, check_invariants};
pub use state::{FINAL_DAY, Game};
pub use tree::{Forest, MAX_SIZE, Tree};
