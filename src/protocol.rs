//! Wire protocol adapter: the judge's line format in, one action line out.
//!
//! Startup block: cell count, then one line per cell
//! `index richness n0 n1 n2 n3 n4 n5` with −1 marking an absent neighbor.
//!
//! Turn block: day; nutrients; `sun score`; `oppSun oppScore oppWaiting`;
//! tree count and one line per tree `cell size isMine isDormant`; legal
//! action count and one action per line.
//!
//! No decision logic lives here.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::ProtocolError;
use crate::game::{Action, Board, Cell, CellId, DIRECTIONS, Forest, Game, Tree};

/// Read the startup topology block and build the board.
///
/// # Errors
///
/// Fails on I/O errors, truncated input, counts or indices that do not fit
/// the board, or non-numeric fields.
pub fn read_board<R: BufRead>(input: &mut R) -> Result<Board, ProtocolError> {
    let count: usize = read_value(input, "cell count")?;
    if count > usize::from(CellId::MAX) + 1 {
        return Err(ProtocolError::Malformed {
            expected: "cell count",
            line: count.to_string(),
        });
    }

    let mut cells = vec![Cell::default(); count];
    for _ in 0..count {
        let line = require_line(input)?;
        let fields: Vec<i64> = parse_fields(&line, "cell")?;
        if fields.len() != 2 + DIRECTIONS {
            return Err(malformed("cell", &line));
        }

        let index = usize::try_from(fields[0])
            .ok()
            .filter(|&i| i < count)
            .ok_or_else(|| malformed("cell index", &line))?;
        let richness = u8::try_from(fields[1]).map_err(|_| malformed("cell richness", &line))?;

        let mut neighbors = [None; DIRECTIONS];
        for (slot, &raw) in neighbors.iter_mut().zip(&fields[2..]) {
            *slot = if raw < 0 {
                None
            } else {
                Some(CellId::try_from(raw).map_err(|_| malformed("cell neighbor", &line))?)
            };
        }

        cells[index] = Cell { richness, neighbors };
    }

    Ok(Board::new(cells))
}

/// Read one turn block into a fresh snapshot.
///
/// Returns `Ok(None)` on a clean end of input before the block starts — the
/// judge has hung up and the game is over.
///
/// # Errors
///
/// Fails on I/O errors, input ending mid-block, or non-numeric fields.
pub fn read_turn<R: BufRead>(input: &mut R) -> Result<Option<Game>, ProtocolError> {
    let Some(day_line) = read_line(input)? else {
        return Ok(None);
    };
    let day: u8 = parse_first(&day_line, "day")?;
    let nutrients: u32 = read_value(input, "nutrients")?;

    let my_line = require_line(input)?;
    let my_fields: Vec<u32> = parse_fields(&my_line, "own sun and score")?;
    let [my_sun, my_score] = my_fields[..] else {
        return Err(malformed("own sun and score", &my_line));
    };

    let opp_line = require_line(input)?;
    let opp_fields: Vec<u32> = parse_fields(&opp_line, "opponent sun, score, waiting")?;
    let [opp_sun, opp_score, opp_waiting] = opp_fields[..] else {
        return Err(malformed("opponent sun, score, waiting", &opp_line));
    };

    let tree_count: usize = read_value(input, "tree count")?;
    let mut trees = Vec::new();
    for _ in 0..tree_count {
        let line = require_line(input)?;
        let fields: Vec<u32> = parse_fields(&line, "tree")?;
        let [cell, size, mine, dormant] = fields[..] else {
            return Err(malformed("tree", &line));
        };
        let cell = CellId::try_from(cell).map_err(|_| malformed("tree cell", &line))?;
        let size = u8::try_from(size).map_err(|_| malformed("tree size", &line))?;
        trees.push(Tree::new(cell, size, mine != 0, dormant != 0));
    }

    let action_count: usize = read_value(input, "action count")?;
    let mut legal_actions = Vec::new();
    for _ in 0..action_count {
        let line = require_line(input)?;
        legal_actions.push(line.parse()?);
    }

    Ok(Some(Game {
        day,
        nutrients,
        my_sun,
        my_score,
        opp_sun,
        opp_score,
        opp_waiting: opp_waiting != 0,
        trees: Forest::new(trees),
        legal_actions,
    }))
}

/// Write the chosen action as one wire line and flush it to the judge.
///
/// # Errors
///
/// Fails if the underlying writer does.
pub fn write_action<W: Write>(output: &mut W, action: Action) -> std::io::Result<()> {
    writeln!(output, "{action}")?;
    output.flush()
}

/// Read one trimmed line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ProtocolError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read one trimmed line; end of input is a protocol error here.
fn require_line<R: BufRead>(input: &mut R) -> Result<String, ProtocolError> {
    read_line(input)?.ok_or(ProtocolError::UnexpectedEof)
}

/// Parse every whitespace-separated field of a line.
fn parse_fields<T: FromStr>(line: &str, expected: &'static str) -> Result<Vec<T>, ProtocolError> {
    line.split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|_| malformed(expected, line))
}

/// Parse the first field of a line.
fn parse_first<T: FromStr>(line: &str, expected: &'static str) -> Result<T, ProtocolError> {
    line.split_whitespace()
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| malformed(expected, line))
}

/// Read one line holding a single value.
fn read_value<R: BufRead, T: FromStr>(
    input: &mut R,
    expected: &'static str,
) -> Result<T, ProtocolError> {
    let line = require_line(input)?;
    parse_first(&line, expected)
}

fn malformed(expected: &'static str, line: &str) -> ProtocolError {
    ProtocolError::Malformed {
        expected,
        line: line.to_string(),
    }
}
