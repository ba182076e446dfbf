//! Read-only legality probe for card placement.
//!
//! Checks run in a fixed order and the first failure is reported:
//!
//! 1. The game is in progress (`InvalidState`)
//! 2. `(row, col)` is on the board (`InvalidArgument`)
//! 3. `card_index` is within the mover's hand (`InvalidArgument`)
//! 4. The cell holds no card (`InvalidState`)
//! 5. The cell has at least `cost` pawns (`InvalidState`)
//! 6. The cell is not empty (`InvalidState`)
//! 7. The pawns belong to the mover (`InvalidState`)

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{BoardError, BoardResult};

/// A card placement: which card of the mover's hand goes where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub card_index: usize,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    #[must_use]
    pub const fn new(card_index: usize, row: usize, col: usize) -> Self {
        Self { card_index, row, col }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {} at ({}, {})", self.card_index, self.row, self.col)
    }
}

/// Validate a placement for the side to move without mutating the board.
pub fn check_placement(board: &Board, card_index: usize, row: usize, col: usize) -> BoardResult<()> {
    board.ensure_in_progress()?;

    let cell = board.cell(row, col)?;

    let side = board.turn();
    let hand = board.current_hand();
    let card = hand.get(card_index).ok_or_else(|| {
        BoardError::invalid_argument(format!(
            "card index {card_index} is outside {side}'s hand of {}",
            hand.len()
        ))
    })?;

    if cell.has_card() {
        return Err(BoardError::invalid_state(format!(
            "({row}, {col}) already holds a card"
        )));
    }
    if cell.pawn_count() < card.cost() {
        return Err(BoardError::invalid_state(format!(
            "{} costs {} but ({row}, {col}) has {} pawns",
            card.name(),
            card.cost(),
            cell.pawn_count()
        )));
    }
    if cell.is_empty() {
        return Err(BoardError::invalid_state(format!("({row}, {col}) is empty")));
    }
    if cell.owner() != side {
        return Err(BoardError::invalid_state(format!(
            "pawns at ({row}, {col}) belong to {}, not {side}",
            cell.owner()
        )));
    }
    Ok(())
}

/// True if [`check_placement`] would accept the move.
#[must_use]
pub fn is_legal(board: &Board, placement: Placement) -> bool {
    check_placement(board, placement.card_index, placement.row, placement.col).is_ok()
}

/// Every legal placement for the side to move.
///
/// Ordered row-major over cells, and by hand index within a cell. Empty when
/// the game is not in progress.
#[must_use]
pub fn legal_placements(board: &Board) -> Vec<Placement> {
    if board.ensure_in_progress().is_err() {
        return Vec::new();
    }
    let side = board.turn();
    let hand = board.current_hand();

    let mut moves = Vec::new();
    for ((row, col), cell) in board.grid().iter() {
        if cell.has_card() || cell.owner() != side {
            continue;
        }
        for (card_index, card) in hand.iter().enumerate() {
            if cell.pawn_count() >= card.cost() {
                moves.push(Placement::new(card_index, row, col));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardRef, InfluenceGrid};
    use crate::core::{BoardConfig, Side};

    fn deck(side: Side, cost: u8) -> Vec<CardRef> {
        (0..15)
            .map(|_| {
                Card::new("Mason", cost, 1, side, InfluenceGrid::center_only())
                    .unwrap()
                    .into_ref()
            })
            .collect()
    }

    fn started() -> Board {
        let mut board = Board::new(BoardConfig::new(3, 5)).unwrap();
        board.start_game(deck(Side::Red, 1), deck(Side::Blue, 1)).unwrap();
        board
    }

    #[test]
    fn test_not_started_first() {
        let board = Board::new(BoardConfig::new(3, 5)).unwrap();
        // Out-of-bounds too, but the phase check wins.
        let err = check_placement(&board, 99, 99, 99).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_bounds_before_hand_index() {
        let board = started();
        assert!(check_placement(&board, 99, 3, 0).unwrap_err().is_invalid_argument());
        assert!(check_placement(&board, 5, 0, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_empty_cell_rejected() {
        let board = started();
        assert!(check_placement(&board, 0, 0, 2).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_wrong_owner_rejected() {
        let board = started();
        assert!(check_placement(&board, 0, 0, 4).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_cost_too_high() {
        let mut board = Board::new(BoardConfig::new(3, 5)).unwrap();
        board.start_game(deck(Side::Red, 2), deck(Side::Blue, 1)).unwrap();
        assert!(check_placement(&board, 0, 0, 0).unwrap_err().is_invalid_state());
        assert!(legal_placements(&board).is_empty());
    }

    #[test]
    fn test_legal_placements_on_fresh_board() {
        let board = started();
        let moves = legal_placements(&board);
        // Three border cells, five cards each.
        assert_eq!(moves.len(), 15);
        assert_eq!(moves[0], Placement::new(0, 0, 0));
        assert_eq!(moves[5], Placement::new(0, 1, 0));
        assert!(moves.iter().all(|&m| is_legal(&board, m)));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = started();
        board.place_card(0, 0, 0).unwrap();
        board.pass().unwrap();
        assert!(check_placement(&board, 0, 0, 0).unwrap_err().is_invalid_state());
    }
}
