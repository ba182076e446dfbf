//! # queens-board
//!
//! Rules engine for a two-player card-and-pawn influence board game.
//!
//! Players alternately place cards from their hand onto cells where they
//! hold enough pawns. Each placed card projects a 5x5 influence pattern
//! that adds or captures pawns around it. When both players pass back to
//! back (or the board fills up), every row is awarded to the side whose
//! cards there are worth more.
//!
//! ## Design Principles
//!
//! 1. **Illegal States Unrepresentable**: A cell is an enum of empty, pawns,
//!    or card. A card cell cannot carry pawns, and a board's grid is
//!    read-only outside the engine, so every cell on a board got there
//!    through a validated mutator.
//!
//! 2. **Validate Then Mutate**: Every mutator runs the read-only legality
//!    probe first. A rejected move leaves the board untouched.
//!
//! 3. **Events, Not Listeners**: Mutators return the events they caused.
//!    The board never holds references to observers.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) board cloning via `im-rs`, so
//!   strategies can simulate a move on a copy.
//!
//! - **Shared Cards**: Cards are immutable and shared as `Arc<Card>` between
//!   decks, hands and cells.
//!
//! ## Modules
//!
//! - `core`: Sides, errors, configuration, events, RNG
//! - `cards`: Card definitions, influence grids, deck files
//! - `board`: Cells, grid, influence propagation, scoring, the `Board`
//! - `rules`: Placement legality probe and legal move enumeration
//! - `strategy`: Computer players built on the read-only board API

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardError, BoardResult,
    BoardEvent, ObserverId, Observers,
    GameRng,
    Side, SideMap,
};

pub use crate::cards::{
    Card, CardRef, DeckError, DeckPair,
    Influence, InfluenceGrid,
    load_deck, parse_deck,
};

pub use crate::board::{Board, Cell, GamePhase, Grid, MAX_PAWNS};

pub use crate::rules::{check_placement, is_legal, legal_placements, Placement};

pub use crate::strategy::{
    play_turn, Composite, ControlBoard, FillFirst, MaxRowScore, Move, Strategy,
};
