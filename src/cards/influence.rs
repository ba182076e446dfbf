//! Influence patterns.
//!
//! Every card carries a 5x5 grid centred on the card's own cell. Cells
//! marked `Influenced` are the relative positions the card projects onto
//! when placed. The middle cell is always `Center` and is never a target.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardError, BoardResult};

/// Side length of an influence grid.
pub const GRID_SIZE: usize = 5;

/// Offset of the centre cell from the grid origin.
pub const GRID_HALF: usize = GRID_SIZE / 2;

/// One symbol of an influence grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Influence {
    /// No effect (`X`).
    #[default]
    None,
    /// Projects influence onto the matching board cell (`I`).
    Influenced,
    /// The card itself (`C`).
    Center,
}

impl Influence {
    /// Parse a deck-file character.
    pub fn from_char(c: char) -> BoardResult<Self> {
        match c {
            'X' | 'x' => Ok(Influence::None),
            'I' | 'i' => Ok(Influence::Influenced),
            'C' | 'c' => Ok(Influence::Center),
            other => Err(BoardError::invalid_argument(format!(
                "unknown influence symbol {other:?}"
            ))),
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Influence::None => 'X',
            Influence::Influenced => 'I',
            Influence::Center => 'C',
        }
    }
}

/// Relative `(row, col)` offsets of influenced cells.
pub type Offsets = SmallVec<[(i32, i32); GRID_SIZE * GRID_SIZE]>;

/// A validated 5x5 influence pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfluenceGrid {
    cells: [[Influence; GRID_SIZE]; GRID_SIZE],
}

impl InfluenceGrid {
    /// Build a grid, requiring exactly one `Center` in the middle.
    pub fn new(cells: [[Influence; GRID_SIZE]; GRID_SIZE]) -> BoardResult<Self> {
        for (i, row) in cells.iter().enumerate() {
            for (j, &symbol) in row.iter().enumerate() {
                let is_middle = i == GRID_HALF && j == GRID_HALF;
                if is_middle && symbol != Influence::Center {
                    return Err(BoardError::invalid_argument(
                        "influence grid centre must be C",
                    ));
                }
                if !is_middle && symbol == Influence::Center {
                    return Err(BoardError::invalid_argument(format!(
                        "stray centre symbol at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(Self { cells })
    }

    /// A grid that influences nothing.
    #[must_use]
    pub fn center_only() -> Self {
        let mut cells = [[Influence::None; GRID_SIZE]; GRID_SIZE];
        cells[GRID_HALF][GRID_HALF] = Influence::Center;
        Self { cells }
    }

    /// Build a grid from offsets relative to the centre.
    ///
    /// ```
    /// use queens_board::cards::InfluenceGrid;
    ///
    /// let grid = InfluenceGrid::from_offsets(&[(0, 1), (1, 0)]).unwrap();
    /// assert_eq!(grid.offsets().len(), 2);
    /// ```
    pub fn from_offsets(offsets: &[(i32, i32)]) -> BoardResult<Self> {
        let mut cells = Self::center_only().cells;
        let half = GRID_HALF as i32;
        for &(dr, dc) in offsets {
            if dr.abs() > half || dc.abs() > half || (dr, dc) == (0, 0) {
                return Err(BoardError::invalid_argument(format!(
                    "offset ({dr}, {dc}) is outside the influence grid"
                )));
            }
            cells[(dr + half) as usize][(dc + half) as usize] = Influence::Influenced;
        }
        Ok(Self { cells })
    }

    /// Parse five lines of five `X`/`I`/`C` characters.
    pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> BoardResult<Self> {
        if rows.len() != GRID_SIZE {
            return Err(BoardError::invalid_argument(format!(
                "influence grid needs {GRID_SIZE} rows, got {}",
                rows.len()
            )));
        }
        let mut cells = [[Influence::None; GRID_SIZE]; GRID_SIZE];
        for (i, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.as_ref().trim().chars().collect();
            if symbols.len() != GRID_SIZE {
                return Err(BoardError::invalid_argument(format!(
                    "influence row {i} needs {GRID_SIZE} symbols, got {}",
                    symbols.len()
                )));
            }
            for (j, c) in symbols.into_iter().enumerate() {
                cells[i][j] = Influence::from_char(c)?;
            }
        }
        Self::new(cells)
    }

    /// Symbol at grid position `(i, j)`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Influence {
        self.cells[i][j]
    }

    /// Horizontal reflection, used for the second side's copy of a card.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut cells = self.cells;
        for row in &mut cells {
            row.reverse();
        }
        Self { cells }
    }

    /// Offsets of every influenced cell, row-major.
    #[must_use]
    pub fn offsets(&self) -> Offsets {
        let half = GRID_HALF as i32;
        let mut out = Offsets::new();
        for (i, row) in self.cells.iter().enumerate() {
            for (j, &symbol) in row.iter().enumerate() {
                if symbol == Influence::Influenced {
                    out.push((i as i32 - half, j as i32 - half));
                }
            }
        }
        out
    }
}

impl Default for InfluenceGrid {
    fn default() -> Self {
        Self::center_only()
    }
}

impl std::fmt::Display for InfluenceGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_only_has_no_offsets() {
        assert!(InfluenceGrid::center_only().offsets().is_empty());
    }

    #[test]
    fn test_parse_rows() {
        let grid = InfluenceGrid::parse_rows(&["XXXXX", "XXIXX", "XICIX", "XXIXX", "XXXXX"]).unwrap();
        let offsets = grid.offsets();
        assert_eq!(offsets.as_slice(), &[(-1, 0), (0, -1), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_parse_rejects_missing_center() {
        let err = InfluenceGrid::parse_rows(&["XXXXX", "XXXXX", "XXIXX", "XXXXX", "XXXXX"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        let err = InfluenceGrid::parse_rows(&["XXXXX", "XXXXX", "XXCXZ", "XXXXX", "XXXXX"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let err = InfluenceGrid::parse_rows(&["XXXX", "XXXXX", "XXCXX", "XXXXX", "XXXXX"]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_mirrored() {
        let grid = InfluenceGrid::from_offsets(&[(-2, 2), (0, 1)]).unwrap();
        let mirrored = grid.mirrored();
        assert_eq!(mirrored.offsets().as_slice(), &[(-2, -2), (0, -1)]);
        assert_eq!(mirrored.mirrored(), grid);
    }

    #[test]
    fn test_from_offsets_rejects_center_and_far() {
        assert!(InfluenceGrid::from_offsets(&[(0, 0)]).is_err());
        assert!(InfluenceGrid::from_offsets(&[(3, 0)]).is_err());
    }

    #[test]
    fn test_display() {
        let grid = InfluenceGrid::from_offsets(&[(0, 1)]).unwrap();
        assert_eq!(grid.to_string(), "XXXXX\nXXXXX\nXXCIX\nXXXXX\nXXXXX");
    }
}
