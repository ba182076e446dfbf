//! Core engine types: sides, errors, configuration, events, RNG.
//!
//! These are the building blocks shared by the card, board and strategy
//! modules.

pub mod config;
pub mod error;
pub mod event;
pub mod rng;
pub mod side;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use event::{BoardEvent, ObserverId, Observers};
pub use rng::GameRng;
pub use side::{Side, SideMap};
