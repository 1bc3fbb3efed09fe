//! Replay command implementation: re-run a captured judge transcript.

use super::output::{TurnReport, format_text};
use super::{CliError, OutputFormat};
use canopy::policy::decide;
use canopy::protocol::{read_board, read_turn};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Execute the replay command.
///
/// The transcript is the judge's side of a game verbatim: the startup block
/// followed by every turn block. Each turn is decided exactly as it would be
/// live and reported.
///
/// # Errors
///
/// Returns an error if the transcript cannot be opened or parsed.
pub(crate) fn execute(transcript: PathBuf, format: OutputFormat) -> Result<(), CliError> {
    let file = File::open(&transcript)
        .map_err(|e| CliError::new(format!("Failed to open {}: {e}", transcript.display())))?;
    let mut input = BufReader::new(file);

    let board = read_board(&mut input)?;
    let mut reports = Vec::new();
    while let Some(game) = read_turn(&mut input)? {
        let action = decide(&board, &game);
        reports.push(TurnReport::new(&game, action));
    }

    match format {
        OutputFormat::Text => print!("{}", format_text(&reports)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
