use super::Strategy;
use crate::board::Board;
use crate::rules::{legal_placements, Placement};

/// Catch up in the first row the mover is not winning.
///
/// Rows are visited top-down. A row qualifies when the mover's sum is at
/// most the opponent's; the first legal placement in that row whose card
/// lifts the mover to at least the opponent's sum is played.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxRowScore;

impl Strategy for MaxRowScore {
    fn choose(&self, board: &Board) -> Option<Placement> {
        let side = board.turn();
        let hand = board.current_hand();
        let moves = legal_placements(board);

        for row in 0..board.rows() {
            let own = board.side_row_sum(row, side);
            let other = board.side_row_sum(row, side.opponent());
            if own > other {
                continue;
            }
            let found = moves
                .iter()
                .filter(|m| m.row == row)
                .find(|m| own + u64::from(hand[m.card_index].value()) >= other);
            if let Some(&placement) = found {
                return Some(placement);
            }
        }
        None
    }

    fn name(&self) -> &'static str {
        "max-row-score"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cards::{Card, InfluenceGrid};
    use crate::core::{BoardConfig, Side};
    use crate::strategy::test_support::{started, uniform_deck};

    #[test]
    fn test_first_row_when_all_tied() {
        let board = started(&[]);
        assert_eq!(MaxRowScore.choose(&board), Some(Placement::new(0, 0, 0)));
    }

    #[test]
    fn test_skips_rows_already_won() {
        let mut board = started(&[]);
        board.place_card(0, 0, 0).unwrap();
        board.pass().unwrap();
        // Row 0 is won by Red, row 1 is tied.
        assert_eq!(MaxRowScore.choose(&board), Some(Placement::new(0, 1, 0)));
    }

    #[test]
    fn test_needs_enough_value_to_catch_up() {
        let mut board = Board::new(BoardConfig::new(1, 3).with_hand_size(1)).unwrap();
        let mut red = uniform_deck(Side::Red, 1, 1, &[]);
        red[0] = Card::new("Minnow", 1, 1, Side::Red, InfluenceGrid::center_only())
            .unwrap()
            .into_ref();
        let blue = uniform_deck(Side::Blue, 1, 5, &[]);
        board.start_game(red, blue).unwrap();

        board.pass().unwrap();
        board.place_card(0, 0, 2).unwrap();

        // Red is behind 1 vs 5 and only holds a value-1 card.
        assert_eq!(MaxRowScore.choose(&board), None);
    }

    #[test]
    fn test_catch_up_with_max_values() {
        let mut board = Board::new(BoardConfig::new(2, 5).with_hand_size(1)).unwrap();
        board
            .start_game(
                uniform_deck(Side::Red, 1, u32::MAX, &[(0, 1)]),
                uniform_deck(Side::Blue, 1, u32::MAX, &[(0, 1)]),
            )
            .unwrap();

        board.place_card(0, 0, 0).unwrap();
        board.place_card(0, 0, 4).unwrap();
        board.pass().unwrap();
        board.place_card(0, 0, 3).unwrap();

        // Red holds one maximal card in row 0 against Blue's two.
        assert_eq!(MaxRowScore.choose(&board), Some(Placement::new(0, 0, 1)));
    }
}
