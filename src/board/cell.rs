//! Board cells.
//!
//! A cell is in exactly one of three states. The enum makes a card cell with
//! pawns, or an owned empty cell, unrepresentable.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRef, MAX_COST};
use crate::core::{BoardError, BoardResult, Side};

/// Most pawns a cell can hold.
pub const MAX_PAWNS: u8 = MAX_COST;

/// One slot of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// `count` pawns in `[1, 3]` owned by a player.
    Pawns { count: u8, owner: Side },
    /// A placed card. Permanent for the rest of the game.
    Card(CardRef),
}

impl Cell {
    /// A pawn cell. `count == 0` gives `Empty`.
    pub fn pawns(count: u8, owner: Side) -> BoardResult<Self> {
        if count > MAX_PAWNS {
            return Err(BoardError::invalid_argument(format!(
                "pawn count must be between 0 and {MAX_PAWNS}, got {count}"
            )));
        }
        if count == 0 {
            return Ok(Cell::Empty);
        }
        if !owner.is_player() {
            return Err(BoardError::invalid_argument("pawns must belong to a player"));
        }
        Ok(Cell::Pawns { count, owner })
    }

    #[must_use]
    pub fn with_card(card: CardRef) -> Self {
        Cell::Card(card)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn has_card(&self) -> bool {
        matches!(self, Cell::Card(_))
    }

    /// Pawns on the cell; always 0 for empty and card cells.
    #[must_use]
    pub fn pawn_count(&self) -> u8 {
        match self {
            Cell::Pawns { count, .. } => *count,
            Cell::Empty | Cell::Card(_) => 0,
        }
    }

    /// Pawn owner, card owner, or `Side::None` for an empty cell.
    #[must_use]
    pub fn owner(&self) -> Side {
        match self {
            Cell::Empty => Side::None,
            Cell::Pawns { owner, .. } => *owner,
            Cell::Card(card) => card.owner(),
        }
    }

    /// The placed card.
    pub fn card(&self) -> BoardResult<&CardRef> {
        match self {
            Cell::Card(card) => Ok(card),
            _ => Err(BoardError::invalid_argument("cell holds no card")),
        }
    }

    /// Card value, 0 without a card.
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Cell::Card(card) => card.value(),
            _ => 0,
        }
    }

    /// Add `n` pawns owned by `card`'s side.
    ///
    /// Fails on a card cell or when the cell is already full. Callers clamp
    /// `n` so the result stays within [`MAX_PAWNS`].
    pub fn add_pawn(&mut self, card: &Card, n: u8) -> BoardResult<()> {
        let current = match self {
            Cell::Card(_) => {
                return Err(BoardError::invalid_argument("cannot add pawns to a card cell"));
            }
            Cell::Pawns { count, .. } if *count >= MAX_PAWNS => {
                return Err(BoardError::invalid_argument("cell already holds the maximum pawns"));
            }
            Cell::Pawns { count, .. } => *count,
            Cell::Empty => 0,
        };
        let total = current.saturating_add(n);
        if total > MAX_PAWNS {
            return Err(BoardError::invalid_argument(format!(
                "adding {n} pawns would exceed {MAX_PAWNS}"
            )));
        }
        *self = Cell::pawns(total, card.owner())?;
        Ok(())
    }

    /// Flip pawn ownership. No effect on empty or card cells.
    pub fn change_ownership(&mut self) {
        if let Cell::Pawns { owner, .. } = self {
            *owner = owner.opponent();
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "_"),
            Cell::Pawns { count, .. } => write!(f, "{count}"),
            Cell::Card(card) => write!(f, "{}", card.owner().letter()),
        }
    }
}
