//! Move tables: every push a color could attempt, with its verdict.

use serde::{Deserialize, Serialize};

use super::game::GameSession;
use crate::core::{Color, Direction, Marble, Position};
use crate::rules::{IllegalMove, Move};

/// A candidate move and whether the rules currently allow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCheck {
    pub mv: Move,
    pub verdict: Result<(), IllegalMove>,
}

impl MoveCheck {
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.verdict.is_ok()
    }
}

impl GameSession {
    /// Check all four directions for every marble of `color`, row-major.
    ///
    /// Uses the same checks as [`try_move`](GameSession::try_move), so turn
    /// order and game-over state are reflected in the verdicts.
    #[must_use]
    pub fn move_table(&self, color: Color) -> Vec<MoveCheck> {
        let engine = self.engine();
        let state = self.rule_state();
        let own = Marble::from(color);

        Position::all()
            .filter(|&pos| self.board().get(pos) == own)
            .flat_map(|pos| Direction::ALL.into_iter().map(move |direction| Move { pos, direction }))
            .map(|mv| MoveCheck {
                mv,
                verdict: engine.plan(&state, color, mv).map(|_| ()),
            })
            .collect()
    }

    /// Moves `color` could legally make right now.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.move_table(color)
            .into_iter()
            .filter(MoveCheck::is_legal)
            .map(|check| check.mv)
            .collect()
    }

    #[must_use]
    pub fn count_legal_moves(&self, color: Color) -> usize {
        self.move_table(color).iter().filter(|check| check.is_legal()).count()
    }
}
