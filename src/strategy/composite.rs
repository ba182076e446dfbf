use super::Strategy;
use crate::board::Board;
use crate::rules::Placement;

/// Ask each strategy in turn; the first one that finds a placement wins.
#[derive(Default)]
pub struct Composite {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Composite {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fallback strategy.
    #[must_use]
    pub fn then(mut self, strategy: impl Strategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Strategy for Composite {
    fn choose(&self, board: &Board) -> Option<Placement> {
        self.strategies.iter().find_map(|s| s.choose(board))
    }

    fn name(&self) -> &'static str {
        "composite"
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("Composite").field("strategies", &names).finish()
    }
}
