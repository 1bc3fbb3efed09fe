//! Play command implementation: the live judge loop over stdin/stdout.

use super::CliError;
use canopy::policy::decide;
use canopy::protocol::{read_board, read_turn, write_action};
use std::io;

/// Execute the play command.
///
/// Reads the startup topology once, then answers every turn block with one
/// action line until the judge hangs up.
///
/// # Errors
///
/// Returns an error if the protocol stream is malformed or I/O fails.
pub(crate) fn execute() -> Result<(), CliError> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let board = read_board(&mut input)?;
    while let Some(game) = read_turn(&mut input)? {
        let action = decide(&board, &game);
        write_action(&mut output, action)?;
    }

    Ok(())
}
