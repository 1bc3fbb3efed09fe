#![no_main]

use canopy::policy::decide;
use canopy::protocol::{read_board, read_turn};
use libfuzzer_sys::fuzz_target;

// The parser must never panic on arbitrary bytes, and every snapshot it
// accepts must be decidable.
fuzz_target!(|data: &[u8]| {
    let mut input = data;

    let Ok(board) = read_board(&mut input) else {
        return;
    };

    while let Ok(Some(game)) = read_turn(&mut input) {
        let action = decide(&board, &game);
        let _ = action.to_string();
    }
});
