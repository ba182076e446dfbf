use super::Strategy;
use crate::board::Board;
use crate::rules::{legal_placements, Placement};

/// Play the first legal placement: top row first, left to right, and the
/// earliest card in hand that fits.
#[derive(Clone, Copy, Debug, Default)]
pub struct FillFirst;

impl Strategy for FillFirst {
    fn choose(&self, board: &Board) -> Option<Placement> {
        legal_placements(board).into_iter().next()
    }

    fn name(&self) -> &'static str {
        "fill-first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::started;

    #[test]
    fn test_picks_top_left() {
        let board = started(&[]);
        assert_eq!(FillFirst.choose(&board), Some(Placement::new(0, 0, 0)));
    }

    #[test]
    fn test_skips_filled_cells() {
        let mut board = started(&[]);
        board.place_card(0, 0, 0).unwrap();
        board.pass().unwrap();
        assert_eq!(FillFirst.choose(&board), Some(Placement::new(0, 1, 0)));
    }

    #[test]
    fn test_passes_when_nothing_fits() {
        let mut board = started(&[]);
        for row in 0..3 {
            board.place_card(0, row, 0).unwrap();
            board.pass().unwrap();
        }
        assert_eq!(FillFirst.choose(&board), None);
    }
}
