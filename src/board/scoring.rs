//! Row and total scoring.
//!
//! Each row is won by the side whose placed cards sum to more in that row,
//! and the winner takes its whole sum. A tied row scores nothing. Pawns
//! never score.
//!
//! Card values are `u32`; sums are `u64` so a row of maximal cards cannot
//! overflow.

use super::state::Board;
use crate::core::{BoardError, BoardResult, Side};

impl Board {
    /// Sum of card values `side` has placed in `row`, with no bounds check.
    pub(crate) fn side_row_sum(&self, row: usize, side: Side) -> u64 {
        self.grid()
            .row(row)
            .filter(|cell| cell.has_card() && cell.owner() == side)
            .map(|cell| u64::from(cell.value()))
            .sum()
    }

    fn check_row(&self, row: usize) -> BoardResult<()> {
        if row >= self.rows() {
            return Err(BoardError::invalid_argument(format!(
                "row {row} is not on the board ({} rows)",
                self.rows()
            )));
        }
        Ok(())
    }

    /// Sum of the card values `side` has placed in `row`.
    ///
    /// `Side::None` always sums to 0.
    pub fn side_row_score(&self, row: usize, side: Side) -> BoardResult<u64> {
        self.check_row(row)?;
        Ok(self.side_row_sum(row, side))
    }

    /// Side holding the strictly larger sum in `row`, or `Side::None` on a tie.
    pub fn row_winner(&self, row: usize) -> BoardResult<Side> {
        self.check_row(row)?;
        let red = self.side_row_sum(row, Side::Red);
        let blue = self.side_row_sum(row, Side::Blue);
        Ok(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Side::Red,
            std::cmp::Ordering::Less => Side::Blue,
            std::cmp::Ordering::Equal => Side::None,
        })
    }

    /// Points `row` awards to its winner: the larger sum, or 0 on a tie.
    pub fn row_score(&self, row: usize) -> BoardResult<u64> {
        self.check_row(row)?;
        let red = self.side_row_sum(row, Side::Red);
        let blue = self.side_row_sum(row, Side::Blue);
        Ok(if red == blue { 0 } else { red.max(blue) })
    }

    /// Total of the rows `side` wins.
    #[must_use]
    pub fn score(&self, side: Side) -> u64 {
        if !side.is_player() {
            return 0;
        }
        (0..self.rows())
            .filter_map(|row| {
                let own = self.side_row_sum(row, side);
                let other = self.side_row_sum(row, side.opponent());
                (own > other).then_some(own)
            })
            .sum()
    }

    /// Side with the strictly higher total, or `Side::None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Side {
        let red = self.score(Side::Red);
        let blue = self.score(Side::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Side::Red,
            std::cmp::Ordering::Less => Side::Blue,
            std::cmp::Ordering::Equal => Side::None,
        }
    }
}
