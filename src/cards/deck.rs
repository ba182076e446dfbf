//! Deck files.
//!
//! A deck file is a sequence of card blocks. Each block is a header line
//! `NAME COST VALUE` followed by five rows of the influence grid:
//!
//! ```text
//! Security 1 2
//! XXXXX
//! XXIXX
//! XICIX
//! XXIXX
//! XXXXX
//! ```
//!
//! Grids are written from the first side's point of view. Loading a deck for
//! `Side::Blue` mirrors every grid once, here, so the board never reflects
//! anything at runtime. At most [`MAX_COPIES`] cards of the same name are
//! kept; later copies are dropped.

use std::path::Path;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use super::definition::{Card, CardRef};
use super::influence::{InfluenceGrid, GRID_SIZE};
use crate::core::{BoardError, Side};

/// Maximum copies of one card name in a deck.
pub const MAX_COPIES: usize = 2;

/// Error produced while reading a deck.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("deck line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("deck line {line}: {source}")]
    Card {
        line: usize,
        #[source]
        source: BoardError,
    },
}

impl From<DeckError> for BoardError {
    fn from(err: DeckError) -> Self {
        BoardError::invalid_argument(err.to_string())
    }
}

/// Parse deck text into cards owned by `side`.
pub fn parse_deck(text: &str, side: Side) -> Result<Vec<CardRef>, DeckError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut deck = Vec::new();
    let mut copies: FxHashMap<String, usize> = FxHashMap::default();

    while let Some((line, header)) = lines.next() {
        let (name, cost, value) = parse_header(line, header)?;

        let mut rows = Vec::with_capacity(GRID_SIZE);
        for _ in 0..GRID_SIZE {
            let (_, row) = lines.next().ok_or_else(|| DeckError::Parse {
                line,
                reason: format!("card {name} ends before its influence grid is complete"),
            })?;
            rows.push(row);
        }

        let mut grid = InfluenceGrid::parse_rows(&rows)
            .map_err(|source| DeckError::Card { line, source })?;
        if side == Side::Blue {
            grid = grid.mirrored();
        }
        let card = Card::new(name, cost, value, side, grid)
            .map_err(|source| DeckError::Card { line, source })?;

        let count = copies.entry(card.name().to_string()).or_insert(0);
        if *count >= MAX_COPIES {
            debug!(card = card.name(), line, "skipping extra copy");
            continue;
        }
        *count += 1;
        deck.push(card.into_ref());
    }

    debug!(%side, cards = deck.len(), "parsed deck");
    Ok(deck)
}

fn parse_header(line: usize, header: &str) -> Result<(String, u8, u32), DeckError> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    let [name, cost, value] = parts.as_slice() else {
        return Err(DeckError::Parse {
            line,
            reason: format!("expected `NAME COST VALUE`, got {header:?}"),
        });
    };
    let cost = cost.parse::<u8>().map_err(|e| DeckError::Parse {
        line,
        reason: format!("bad cost {cost:?}: {e}"),
    })?;
    let value = value.parse::<u32>().map_err(|e| DeckError::Parse {
        line,
        reason: format!("bad value {value:?}: {e}"),
    })?;
    Ok((name.to_string(), cost, value))
}

/// Read and parse a deck file.
pub fn load_deck(path: impl AsRef<Path>, side: Side) -> Result<Vec<CardRef>, DeckError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_deck(&text, side)
}

/// Both decks of a game.
#[derive(Clone, Debug, Default)]
pub struct DeckPair {
    pub red: Vec<CardRef>,
    pub blue: Vec<CardRef>,
}

impl DeckPair {
    /// Load the red deck from `red_path` and the blue deck from `blue_path`.
    /// The same file may be used for both.
    pub fn load(red_path: impl AsRef<Path>, blue_path: impl AsRef<Path>) -> Result<Self, DeckError> {
        Ok(Self {
            red: load_deck(red_path, Side::Red)?,
            blue: load_deck(blue_path, Side::Blue)?,
        })
    }

    /// Parse both decks from the same text.
    pub fn from_text(text: &str) -> Result<Self, DeckError> {
        Ok(Self {
            red: parse_deck(text, Side::Red)?,
            blue: parse_deck(text, Side::Blue)?,
        })
    }
}
