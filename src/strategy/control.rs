use super::Strategy;
use crate::board::Board;
use crate::rules::{legal_placements, Placement};

/// Play the placement that leaves the mover owning the most cells.
///
/// Each legal move is tried on a clone of the board. Ties go to the
/// lowest row, then column, then hand index.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlBoard;

impl ControlBoard {
    fn owned_after(board: &Board, placement: Placement) -> Option<usize> {
        let side = board.turn();
        let mut trial = board.clone();
        trial
            .place_card(placement.card_index, placement.row, placement.col)
            .ok()?;
        Some(trial.owned_cells(side))
    }
}

impl Strategy for ControlBoard {
    fn choose(&self, board: &Board) -> Option<Placement> {
        let mut best: Option<(usize, Placement)> = None;
        for placement in legal_placements(board) {
            let Some(owned) = Self::owned_after(board, placement) else {
                continue;
            };
            if best.map_or(true, |(top, _)| owned > top) {
                best = Some((owned, placement));
            }
        }
        best.map(|(_, placement)| placement)
    }

    fn name(&self) -> &'static str {
        "control-board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cards::{Card, InfluenceGrid};
    use crate::core::{BoardConfig, Side};
    use crate::strategy::test_support::uniform_deck;

    #[test]
    fn test_prefers_wider_influence() {
        let mut board = Board::new(BoardConfig::new(3, 5).with_hand_size(2)).unwrap();
        let mut red = uniform_deck(Side::Red, 1, 1, &[]);
        red[1] = Card::new(
            "Spreader",
            1,
            1,
            Side::Red,
            InfluenceGrid::from_offsets(&[(0, 1), (1, 1), (-1, 1)]).unwrap(),
        )
        .unwrap()
        .into_ref();
        board.start_game(red, uniform_deck(Side::Blue, 1, 1, &[])).unwrap();

        // From row 1 the spreader reaches three new cells; from rows 0 or 2
        // only two.
        assert_eq!(ControlBoard.choose(&board), Some(Placement::new(1, 1, 0)));
    }

    #[test]
    fn test_ties_resolve_to_first() {
        let board = crate::strategy::test_support::started(&[]);
        assert_eq!(ControlBoard.choose(&board), Some(Placement::new(0, 0, 0)));
    }

    #[test]
    fn test_does_not_mutate_board() {
        let board = crate::strategy::test_support::started(&[(0, 1)]);
        let before = board.clone();
        let _ = ControlBoard.choose(&board);
        assert_eq!(board, before);
    }
}
