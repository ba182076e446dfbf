//! Player sides and per-side data storage.
//!
//! ## Side
//!
//! The two competing players, `Red` (moves first) and `Blue`, plus `None`
//! for unowned cells. `None` is never a valid turn.
//!
//! ## SideMap
//!
//! Two-slot storage indexed by `Side`, used for hands, decks and pass flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Owner of a cell, card or turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First player, seeded in column 0.
    Red,
    /// Second player, seeded in the last column.
    Blue,
    /// No owner.
    #[default]
    None,
}

impl Side {
    /// Both player sides in turn order.
    pub const PLAYERS: [Side; 2] = [Side::Red, Side::Blue];

    /// The other player. `None` stays `None`.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
            Side::None => Side::None,
        }
    }

    /// True for `Red` and `Blue`.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Side::None)
    }

    /// Single-letter tag used in textual dumps.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Red => 'R',
            Side::Blue => 'B',
            Side::None => '_',
        }
    }

    const fn slot(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
            Side::None => panic!("Side::None has no per-side slot"),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
            Side::None => write!(f, "None"),
        }
    }
}

/// Per-side data with O(1) access.
///
/// ## Example
///
/// ```
/// use queens_board::core::{Side, SideMap};
///
/// let mut passed: SideMap<bool> = SideMap::with_value(false);
/// passed[Side::Blue] = true;
///
/// assert!(!passed[Side::Red]);
/// assert!(passed[Side::Blue]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Red), factory(Side::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    ///
    /// Panics on `Side::None`.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.slot()]
    }

    /// Get a mutable reference to a side's data.
    ///
    /// Panics on `Side::None`.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.slot()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::PLAYERS.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::PLAYERS.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Blue);
        assert_eq!(Side::Blue.opponent(), Side::Red);
        assert_eq!(Side::None.opponent(), Side::None);
    }

    #[test]
    fn test_is_player() {
        assert!(Side::Red.is_player());
        assert!(Side::Blue.is_player());
        assert!(!Side::None.is_player());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Red), "Red");
        assert_eq!(Side::Blue.letter(), 'B');
    }

    #[test]
    fn test_side_map_index() {
        let mut map: SideMap<i32> = SideMap::new(|s| if s == Side::Red { 1 } else { 2 });
        assert_eq!(map[Side::Red], 1);
        assert_eq!(map[Side::Blue], 2);

        map[Side::Red] += 10;
        assert_eq!(map[Side::Red], 11);
    }

    #[test]
    fn test_side_map_iter_order() {
        let map = SideMap::with_value(0u8);
        let sides: Vec<_> = map.iter().map(|(s, _)| s).collect();
        assert_eq!(sides, vec![Side::Red, Side::Blue]);
    }

    #[test]
    #[should_panic(expected = "Side::None has no per-side slot")]
    fn test_side_map_none_panics() {
        let map: SideMap<u8> = SideMap::with_default();
        let _ = map[Side::None];
    }
}
