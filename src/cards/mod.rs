//! Card system: definitions, influence patterns and deck loading.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card data (name, cost, value, owner, influence)
//! - `CardRef`: Shared handle (`Arc<Card>`) used by decks, hands and cells
//! - `InfluenceGrid`: 5x5 pattern of cells a card affects when placed
//! - `DeckPair`: Both players' decks, typically loaded from deck files

pub mod deck;
pub mod definition;
pub mod influence;

pub use deck::{load_deck, parse_deck, DeckError, DeckPair, MAX_COPIES};
pub use definition::{Card, CardRef, MAX_COST, MIN_COST};
pub use influence::{Influence, InfluenceGrid, Offsets, GRID_HALF, GRID_SIZE};
