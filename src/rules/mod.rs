//! Placement rules.
//!
//! `check_placement` is the single source of truth for whether a move is
//! legal. `Board::place_card` runs it before mutating anything, and
//! strategies call it (or `legal_placements`) to probe moves without
//! touching the board.

pub mod legality;

pub use legality::{check_placement, is_legal, legal_placements, Placement};
