//! The board aggregate: grid, hands, decks, turn and phase.
//!
//! ## Lifecycle
//!
//! ```text
//! NotStarted --start_game--> InProgress --double pass / board full--> Over
//! ```
//!
//! `Board::new` seeds the border columns with pawns but is otherwise inert.
//! `start_game` deals both hands and hands the move to `Side::Red`. Each
//! successful `place_card` or `pass` hands the move to the other side.
//! `Over` is absorbing.
//!
//! Every mutator validates against read-only state before touching
//! anything, so a failed call leaves the board exactly as it was.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::cell::Cell;
use super::grid::Grid;
use super::influence::apply_influence;
use crate::cards::CardRef;
use crate::core::{BoardConfig, BoardError, BoardEvent, BoardResult, GameRng, Side, SideMap};
use crate::rules::check_placement;

/// Coarse game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    Over,
}

/// Complete game state.
///
/// Cloning is cheap: grid and decks are persistent vectors and hands hold
/// at most `hand_size` shared cards, so strategies can try a move on a copy.
///
/// ## Example
///
/// ```
/// use queens_board::board::Board;
/// use queens_board::cards::{Card, InfluenceGrid};
/// use queens_board::core::{BoardConfig, Side};
///
/// let deck = |side| {
///     (0..15)
///         .map(|_| Card::new("Guard", 1, 2, side, InfluenceGrid::center_only()).unwrap().into_ref())
///         .collect::<Vec<_>>()
/// };
///
/// let mut board = Board::new(BoardConfig::new(3, 5)).unwrap();
/// board.start_game(deck(Side::Red), deck(Side::Blue)).unwrap();
///
/// board.place_card(0, 0, 0).unwrap();
/// assert_eq!(board.score(Side::Red), 2);
/// assert_eq!(board.turn(), Side::Blue);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    hands: SideMap<Vec<CardRef>>,
    decks: SideMap<Vector<CardRef>>,
    turn: Side,
    phase: GamePhase,
    /// Whether each side's most recent action was a pass.
    passed: SideMap<bool>,
}

impl Board {
    /// Build an unstarted board with seeded border columns.
    pub fn new(config: BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        let grid = Grid::seeded(config.rows, config.columns);
        Ok(Self {
            config,
            grid,
            hands: SideMap::with_default(),
            decks: SideMap::with_default(),
            turn: Side::Red,
            phase: GamePhase::NotStarted,
            passed: SideMap::with_value(false),
        })
    }

    // === Lifecycle ===

    /// Deal hands from the front of each deck and begin play.
    ///
    /// Each deck must hold at least one card per board cell and at least a
    /// full hand, and every card must belong to the deck's side.
    pub fn start_game(
        &mut self,
        red_deck: Vec<CardRef>,
        blue_deck: Vec<CardRef>,
    ) -> BoardResult<Vec<BoardEvent>> {
        if self.phase != GamePhase::NotStarted {
            return Err(BoardError::invalid_state("game already started"));
        }

        let required = self.config.cell_count().max(self.config.hand_size);
        for (side, deck) in [(Side::Red, &red_deck), (Side::Blue, &blue_deck)] {
            if deck.len() < required {
                return Err(BoardError::invalid_argument(format!(
                    "{side} deck has {} cards, needs at least {required}",
                    deck.len()
                )));
            }
            if let Some(card) = deck.iter().find(|c| c.owner() != side) {
                return Err(BoardError::invalid_argument(format!(
                    "{side} deck contains {} owned by {}",
                    card.name(),
                    card.owner()
                )));
            }
        }

        let mut decks = SideMap::new(|_| Vec::new());
        decks[Side::Red] = red_deck;
        decks[Side::Blue] = blue_deck;

        if let Some(seed) = self.config.shuffle_seed {
            let mut rng = GameRng::new(seed);
            for (_, deck) in decks.iter_mut() {
                rng.fork().shuffle(deck);
            }
        }

        for side in Side::PLAYERS {
            let mut deck: Vector<CardRef> = std::mem::take(&mut decks[side]).into_iter().collect();
            self.hands[side] = deck.slice(..self.config.hand_size).into_iter().collect();
            self.decks[side] = deck;
        }

        self.turn = Side::Red;
        self.phase = GamePhase::InProgress;
        self.passed = SideMap::with_value(false);

        info!(
            rows = self.config.rows,
            columns = self.config.columns,
            hand_size = self.config.hand_size,
            "game started"
        );
        Ok(vec![BoardEvent::Started { first: self.turn }])
    }

    /// Place card `card_index` of the mover's hand on `(row, col)`.
    ///
    /// See [`check_placement`] for the legality rules. On success the card
    /// projects its influence, the mover draws if the hand is short and the
    /// deck is not empty, and the turn passes.
    pub fn place_card(
        &mut self,
        card_index: usize,
        row: usize,
        col: usize,
    ) -> BoardResult<Vec<BoardEvent>> {
        check_placement(self, card_index, row, col)?;

        let side = self.turn;
        let card = self.hands[side].remove(card_index);
        self.grid.set(row, col, Cell::with_card(card.clone()));
        let influenced = apply_influence(&mut self.grid, &card, row, col);
        let drew = self.draw(side);

        self.passed[side] = false;
        self.turn = side.opponent();

        debug!(%side, card = card.name(), row, col, influenced, drew, "card placed");
        let mut events = vec![BoardEvent::CardPlaced {
            side,
            card,
            row,
            col,
            influenced,
            drew,
        }];
        if self.grid.empty_count() == 0 {
            events.push(self.finish("board full"));
        }
        Ok(events)
    }

    /// Pass the turn. Two passes in a row end the game.
    pub fn pass(&mut self) -> BoardResult<Vec<BoardEvent>> {
        self.ensure_in_progress()?;

        let side = self.turn;
        self.passed[side] = true;
        self.turn = side.opponent();
        debug!(%side, "passed");

        let mut events = vec![BoardEvent::Passed { side }];
        if self.passed[side.opponent()] {
            events.push(self.finish("both sides passed"));
        }
        Ok(events)
    }

    fn draw(&mut self, side: Side) -> bool {
        if self.hands[side].len() >= self.config.hand_size {
            return false;
        }
        match self.decks[side].pop_front() {
            Some(card) => {
                self.hands[side].push(card);
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, reason: &str) -> BoardEvent {
        self.phase = GamePhase::Over;
        let red_score = self.score(Side::Red);
        let blue_score = self.score(Side::Blue);
        let winner = self.winner();
        info!(%winner, red_score, blue_score, reason, "game over");
        BoardEvent::GameOver {
            winner,
            red_score,
            blue_score,
        }
    }

    pub(crate) fn ensure_in_progress(&self) -> BoardResult<()> {
        match self.phase {
            GamePhase::InProgress => Ok(()),
            GamePhase::NotStarted => Err(BoardError::invalid_state("game has not started")),
            GamePhase::Over => Err(BoardError::invalid_state("game is over")),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        self.grid.in_bounds(row, col)
    }

    pub fn cell(&self, row: usize, col: usize) -> BoardResult<&Cell> {
        self.grid.get(row, col).ok_or_else(|| {
            BoardError::invalid_argument(format!("({row}, {col}) is not on the board"))
        })
    }

    /// The card at `(row, col)`, if one has been placed there.
    pub fn card_at(&self, row: usize, col: usize) -> BoardResult<Option<&CardRef>> {
        Ok(match self.cell(row, col)? {
            Cell::Card(card) => Some(card),
            _ => None,
        })
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != GamePhase::NotStarted
    }

    /// True before the game starts and once it has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase != GamePhase::InProgress || self.grid.empty_count() == 0
    }

    /// Whether `side`'s most recent action was a pass.
    #[must_use]
    pub fn has_passed(&self, side: Side) -> bool {
        side.is_player() && self.passed[side]
    }

    /// Cards in `side`'s hand. Empty for `Side::None`.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardRef] {
        if side.is_player() {
            &self.hands[side]
        } else {
            &[]
        }
    }

    /// Cards in the mover's hand.
    #[must_use]
    pub fn current_hand(&self) -> &[CardRef] {
        self.hand(self.turn)
    }

    /// Cards left to draw for `side`.
    #[must_use]
    pub fn deck_size(&self, side: Side) -> usize {
        if side.is_player() {
            self.decks[side].len()
        } else {
            0
        }
    }

    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.grid.empty_count()
    }

    /// Cells currently owned by `side`, pawns and cards alike.
    #[must_use]
    pub fn owned_cells(&self, side: Side) -> usize {
        self.grid.owned_count(side)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            let red = self.side_row_sum(row, Side::Red);
            let blue = self.side_row_sum(row, Side::Blue);
            write!(f, "{red} ")?;
            for cell in self.grid.row(row) {
                write!(f, "{cell}")?;
            }
            writeln!(f, " {blue}")?;
        }
        Ok(())
    }
}
