//! Move-choosing strategies for computer players.
//!
//! Strategies only read the board. They see the same state a human sees
//! and submit their choice through the same `place_card` / `pass` entry
//! points, via [`play_turn`].
//!
//! ## Provided Strategies
//!
//! - [`FillFirst`]: first legal placement, scanning row-major
//! - [`MaxRowScore`]: catch up in the first row the mover is not winning
//! - [`ControlBoard`]: maximise cells owned after the move
//! - [`Composite`]: try several strategies in order

mod composite;
mod control;
mod fill_first;
mod max_row;

pub use composite::Composite;
pub use control::ControlBoard;
pub use fill_first::FillFirst;
pub use max_row::MaxRowScore;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{BoardEvent, BoardResult};
use crate::rules::Placement;

/// A complete decision for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place(Placement),
    Pass,
}

impl Move {
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    /// Submit this move to `board`.
    pub fn apply(self, board: &mut Board) -> BoardResult<Vec<BoardEvent>> {
        match self {
            Move::Place(p) => board.place_card(p.card_index, p.row, p.col),
            Move::Pass => board.pass(),
        }
    }
}

impl From<Option<Placement>> for Move {
    fn from(placement: Option<Placement>) -> Self {
        placement.map_or(Move::Pass, Move::Place)
    }
}

/// Chooses a placement for the side to move.
pub trait Strategy: Send + Sync {
    /// Pick a legal placement, or `None` to pass.
    fn choose(&self, board: &Board) -> Option<Placement>;

    /// Pick a full move.
    fn choose_move(&self, board: &Board) -> Move {
        self.choose(board).into()
    }

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn choose(&self, board: &Board) -> Option<Placement> {
        (**self).choose(board)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Let `strategy` take the mover's turn on `board`.
pub fn play_turn<S: Strategy + ?Sized>(
    board: &mut Board,
    strategy: &S,
) -> BoardResult<Vec<BoardEvent>> {
    let side = board.turn();
    let mv = strategy.choose_move(board);
    debug!(%side, strategy = strategy.name(), ?mv, "strategy chose move");
    mv.apply(board)
}
