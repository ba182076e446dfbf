//! The board: cells, grid storage, influence and scoring.
//!
//! ## Key Types
//!
//! - `Cell`: Empty, pawns, or a placed card
//! - `Grid`: Row-major cell storage with O(1) clone
//! - `Board`: The game aggregate (grid, hands, decks, turn, phase)
//! - `GamePhase`: `NotStarted`, `InProgress`, `Over`

pub mod cell;
pub mod grid;
pub mod influence;
pub mod scoring;
pub mod state;

pub use cell::{Cell, MAX_PAWNS};
pub use grid::Grid;
pub use influence::apply_influence;
pub use state::{Board, GamePhase};
