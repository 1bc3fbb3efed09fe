//! Player actions and their wire encoding.

use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;
use crate::game::board::CellId;

/// One action, chosen per turn or offered by the judge in the legal list.
///
/// `Display` and `FromStr` implement the judge's wire forms: `WAIT`,
/// `SEED <source> <target>`, `GROW <cell>`, `COMPLETE <cell>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Pass for the remainder of the day.
    Wait,
    /// Throw a seed from the tree on `source` onto `target`.
    Seed {
        /// Cell of the throwing tree.
        source: CellId,
        /// Empty cell the seed lands on.
        target: CellId,
    },
    /// Grow the tree on the cell one size class.
    Grow {
        /// Cell of the growing tree.
        cell: CellId,
    },
    /// Harvest the mature tree on the cell for points.
    Complete {
        /// Cell of the harvested tree.
        cell: CellId,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Seed { source, target } => write!(f, "SEED {source} {target}"),
            Action::Grow { cell } => write!(f, "GROW {cell}"),
            Action::Complete { cell } => write!(f, "COMPLETE {cell}"),
        }
    }
}

impl FromStr for Action {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match parts.next() {
            Some("WAIT") => Ok(Action::Wait),
            Some("SEED") => Ok(Action::Seed {
                source: cell_field(parts.next(), s)?,
                target: cell_field(parts.next(), s)?,
            }),
            Some("GROW") => Ok(Action::Grow {
                cell: cell_field(parts.next(), s)?,
            }),
            Some("COMPLETE") => Ok(Action::Complete {
                cell: cell_field(parts.next(), s)?,
            }),
            _ => Err(ProtocolError::BadAction(s.to_string())),
        }
    }
}

fn cell_field(field: Option<&str>, line: &str) -> Result<CellId, ProtocolError> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| ProtocolError::BadAction(line.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_forms() {
        assert_eq!(Action::Wait.to_string(), "WAIT");
        assert_eq!(Action::Seed { source: 7, target: 2 }.to_string(), "SEED 7 2");
        assert_eq!(Action::Grow { cell: 30 }.to_string(), "GROW 30");
        assert_eq!(Action::Complete { cell: 0 }.to_string(), "COMPLETE 0");
    }

    #[test]
    fn test_parse_round_trip() {
        for action in [
            Action::Wait,
            Action::Seed { source: 0, target: 36 },
            Action::Grow { cell: 12 },
            Action::Complete { cell: 5 },
        ] {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Action>().is_err());
        assert!("SLEEP".parse::<Action>().is_err());
        assert!("SEED 7".parse::<Action>().is_err());
        assert!("GROW x".parse::<Action>().is_err());
        assert!("COMPLETE".parse::<Action>().is_err());
    }
}
