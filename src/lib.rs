// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Canopy: a deterministic rule-chain bot for a hex-grid forest game.
//!
//! Each turn the judge sends the full observable state — 37 hex cells,
//! every tree on the board, both players' sun and score, and the legal
//! actions — and the bot answers with exactly one action. The only
//! interesting part is the action-selection policy: a fixed-priority chain
//! that weighs harvesting, growing and seeding with a sun-point cost model.
//! There is no search, no learning, no persistence, and no concurrency.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       CLI / protocol adapter        │
//! ├─────────────────────────────────────┤
//! │           Policy chain              │
//! │   Complete → Grow → Seed → Wait     │
//! ├─────────────────────────────────────┤
//! │   Board · Snapshot · Cost model     │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod policy;
pub mod protocol;

pub use error::ProtocolError;

// Re-export key types at crate root for convenience
pub use game::{Action, Board, Cell, CellId, Forest, Game, Tree};
pub use policy::decide;
