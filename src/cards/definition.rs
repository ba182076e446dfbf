//! Card definitions - immutable card data.
//!
//! A `Card` is fixed at construction: name, placement cost, score value,
//! owning side and influence pattern. Cards are shared between decks,
//! hands and cells as `CardRef` (`Arc<Card>`).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::influence::InfluenceGrid;
use crate::core::{BoardError, BoardResult, Side};

/// Lowest legal placement cost.
pub const MIN_COST: u8 = 1;
/// Highest legal placement cost (also the pawn cap of a cell).
pub const MAX_COST: u8 = 3;

/// Shared handle to a card.
pub type CardRef = Arc<Card>;

/// Static card definition.
///
/// Two cards are equal iff every field is equal.
///
/// ## Example
///
/// ```
/// use queens_board::cards::{Card, InfluenceGrid};
/// use queens_board::core::Side;
///
/// let guard = Card::new("Guard", 1, 2, Side::Red, InfluenceGrid::center_only()).unwrap();
/// assert_eq!(guard.cost(), 1);
/// assert_eq!(guard.value(), 2);
///
/// assert!(Card::new("Giant", 4, 9, Side::Red, InfluenceGrid::center_only()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,
    cost: u8,
    value: u32,
    owner: Side,
    influence: InfluenceGrid,
}

impl Card {
    /// Create a card, rejecting costs outside `[1, 3]` and unowned cards.
    pub fn new(
        name: impl Into<String>,
        cost: u8,
        value: u32,
        owner: Side,
        influence: InfluenceGrid,
    ) -> BoardResult<Self> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(BoardError::invalid_argument(format!(
                "card cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
            )));
        }
        if !owner.is_player() {
            return Err(BoardError::invalid_argument("card must belong to a player"));
        }
        Ok(Self {
            name: name.into(),
            cost,
            value,
            owner,
            influence,
        })
    }

    /// The same card as seen by the other side: owner swapped and grid
    /// mirrored.
    #[must_use]
    pub fn for_opponent(&self) -> Self {
        Self {
            name: self.name.clone(),
            cost: self.cost,
            value: self.value,
            owner: self.owner.opponent(),
            influence: self.influence.mirrored(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pawns required on the target cell.
    #[must_use]
    pub fn cost(&self) -> u8 {
        self.cost
    }

    /// Points this card adds to its row.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub fn owner(&self) -> Side {
        self.owner
    }

    #[must_use]
    pub fn influence(&self) -> &InfluenceGrid {
        &self.influence
    }

    /// Wrap in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> CardRef {
        Arc::new(self)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {}, value {}, {})", self.name, self.cost, self.value, self.owner)
    }
}
