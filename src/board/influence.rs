//! Influence propagation.
//!
//! When a card lands on `(row, col)`, each influenced offset of its grid is
//! projected onto the board. For every in-bounds target:
//!
//! | Target              | Effect                                  |
//! |---------------------|-----------------------------------------|
//! | card                | none                                    |
//! | empty               | one pawn owned by the placer            |
//! | placer's pawns      | one more pawn, capped at [`MAX_PAWNS`]  |
//! | opponent's pawns    | ownership flips, count unchanged        |
//!
//! Distinct offsets always hit distinct cells, so the pass is
//! order-independent.

use tracing::trace;

use super::cell::{Cell, MAX_PAWNS};
use super::grid::Grid;
use crate::cards::Card;

/// Apply `card`'s influence from `(row, col)`. Returns how many cells
/// changed.
pub fn apply_influence(grid: &mut Grid, card: &Card, row: usize, col: usize) -> usize {
    let side = card.owner();
    let mut changed = 0;

    for (dr, dc) in card.influence().offsets() {
        let Some((r, c)) = grid.offset(row, col, dr, dc) else {
            continue;
        };
        let Some(target) = grid.get_mut(r, c) else {
            continue;
        };

        let applied = match *target {
            Cell::Card(_) => false,
            Cell::Empty => target.add_pawn(card, 1).is_ok(),
            Cell::Pawns { count, owner } if owner == side => {
                let add = (MAX_PAWNS - count).min(1);
                add > 0 && target.add_pawn(card, add).is_ok()
            }
            Cell::Pawns { .. } => {
                target.change_ownership();
                true
            }
        };
        if !applied {
            continue;
        }

        trace!(row = r, col = c, cell = %target, "influenced");
        changed += 1;
    }

    changed
}
