//! Report formatting for the replay command.

use canopy::{Action, Game};
use serde::Serialize;

/// One decided turn, ready for text or JSON output.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TurnReport {
    /// Day the turn was played on.
    pub(crate) day: u8,
    /// Nutrient pool at decision time.
    pub(crate) nutrients: u32,
    /// Own sun balance at decision time.
    pub(crate) sun: u32,
    /// Trees on the board.
    pub(crate) trees: usize,
    /// The decided action in wire form.
    pub(crate) action: String,
}

impl TurnReport {
    /// Capture a snapshot and its decision.
    pub(crate) fn new(game: &Game, action: Action) -> Self {
        Self {
            day: game.day,
            nutrients: game.nutrients,
            sun: game.my_sun,
            trees: game.trees.len(),
            action: action.to_string(),
        }
    }
}

/// Render reports as text, one turn per line.
pub(crate) fn format_text(reports: &[TurnReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "day {:>2}  sun {:>3}  nutrients {:>2}  trees {:>2}  -> {}\n",
            report.day, report.sun, report.nutrients, report.trees, report.action
        ));
    }
    out
}
