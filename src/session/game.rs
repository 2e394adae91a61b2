//! The Kuba game session.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    Board, Color, ColorMap, ConfigError, Direction, GameRng, MarbleCounts, PlayerRecord, PlayerSpec,
    Position, SessionConfig,
};
use crate::hash::{BoardHash, HashTable};
use crate::rules::{apply, IllegalMove, Move, MoveEngine, MoveError, PlannedMove, RuleState};

/// Red marbles a player must capture to win.
pub const CAPTURE_TARGET: u32 = 7;

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Number of marbles shifted, including the pushed one.
    pub pushed: usize,
    /// Red marbles this move pushed off the board.
    pub captured: u32,
    /// Opponent marbles this move pushed off the board.
    pub ejected: u32,
    /// Player to move next.
    pub next: Color,
    /// Set if this move won the game.
    pub winner: Option<Color>,
}

/// One game of Kuba between two registered players.
///
/// Owns the board and the hash keys for its whole lifetime. Every move is
/// validated against the current state before anything is written, so a
/// rejected move leaves the session exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    table: HashTable,

    players: ColorMap<PlayerRecord>,
    /// Colors in registration order.
    order: [Color; 2],

    current_hash: BoardHash,
    previous_hash: BoardHash,

    /// `None` until the first move is made.
    to_move: Option<Color>,
    parity: usize,
    /// Starts at 1, incremented by every committed move.
    turns: u32,

    /// Marble counts as of the last committed move.
    counts: MarbleCounts,
    winner: Option<Color>,
}

impl GameSession {
    /// Start a game in the standard position, drawing hash keys from `rng`.
    pub fn new(
        first: impl Into<PlayerSpec>,
        second: impl Into<PlayerSpec>,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let config = SessionConfig::default()
            .with_seed(rng.seed())
            .with_players(first, second);
        Self::from_position(&config, Board::initial(), rng)
    }

    /// Start a game with keys drawn from a generator seeded with `seed`.
    pub fn with_seed(
        first: impl Into<PlayerSpec>,
        second: impl Into<PlayerSpec>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        SessionConfig::default()
            .with_seed(seed)
            .with_players(first, second)
            .build()
    }

    /// Start a game from a full configuration.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let mut rng = GameRng::new(config.seed).for_context("zobrist");
        Self::from_position(config, Board::initial(), &mut rng)
    }

    pub(crate) fn from_position(
        config: &SessionConfig,
        board: Board,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let [first, second] = &config.players;
        let players = ColorMap::new(|color| {
            let spec = if first.color == color { first } else { second };
            PlayerRecord::new(spec.name.clone(), color)
        });

        let table = HashTable::build(rng);
        let hash = table.hash_board(&board);
        let counts = board.counts();

        Ok(Self {
            board,
            table,
            players,
            order: [first.color, second.color],
            current_hash: hash,
            previous_hash: hash,
            to_move: None,
            parity: 0,
            turns: 1,
            counts,
            winner: None,
        })
    }

    // === Queries ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Name of the player to move, `None` before the first move.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.to_move.map(|color| self.players[color].name.as_str())
    }

    /// Color of the player to move, `None` before the first move.
    #[must_use]
    pub fn to_move(&self) -> Option<Color> {
        self.to_move
    }

    /// Name of the winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|color| self.players[color].name.as_str())
    }

    #[must_use]
    pub fn winner_color(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Marbles of each kind currently on the board.
    #[must_use]
    pub fn marble_counts(&self) -> MarbleCounts {
        self.board.counts()
    }

    /// Red marbles captured by the named player.
    #[must_use]
    pub fn captured(&self, name: &str) -> Option<u32> {
        self.player_color(name).map(|color| self.players[color].captured)
    }

    /// Color the named player was registered with.
    #[must_use]
    pub fn player_color(&self, name: &str) -> Option<Color> {
        self.players
            .iter()
            .find(|(_, record)| record.name == name)
            .map(|(color, _)| color)
    }

    /// Player records in registration order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.order.iter().map(|&color| &self.players[color])
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &PlayerRecord {
        &self.players[color]
    }

    /// Turn counter: 1 before the first move, +1 per committed move.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turns
    }

    /// Incrementally maintained board hash.
    #[must_use]
    pub fn current_hash(&self) -> BoardHash {
        self.current_hash
    }

    /// Hash of the position before the most recent move.
    #[must_use]
    pub fn previous_hash(&self) -> BoardHash {
        self.previous_hash
    }

    /// Board hash recomputed from scratch.
    #[must_use]
    pub fn board_hash(&self) -> BoardHash {
        self.table.hash_board(&self.board)
    }

    pub(crate) fn rule_state(&self) -> RuleState {
        RuleState {
            winner: self.winner,
            to_move: self.to_move,
            current_hash: self.current_hash,
            previous_hash: self.previous_hash,
        }
    }

    pub(crate) fn engine(&self) -> MoveEngine<'_> {
        MoveEngine::new(&self.board, &self.table)
    }

    // === Moves ===

    /// Push the marble at `pos` toward `direction` on behalf of `name`.
    ///
    /// Returns `false`, changing nothing, if the move is illegal or the name
    /// is not registered.
    pub fn make_move(&mut self, name: &str, pos: impl Into<Position>, direction: Direction) -> bool {
        self.try_move(name, pos, direction).is_ok()
    }

    /// Like [`make_move`](Self::make_move) with the direction in `L`/`R`/`F`/`B`
    /// notation. Unrecognized symbols are rejected.
    pub fn make_move_symbol(&mut self, name: &str, pos: impl Into<Position>, direction: char) -> bool {
        match Direction::from_symbol(direction) {
            Some(direction) => self.make_move(name, pos, direction),
            None => {
                trace!("rejected move by {name}: bad direction symbol {direction:?}");
                false
            }
        }
    }

    /// Push the marble at `pos` toward `direction` on behalf of `name`,
    /// reporting why the move was refused.
    pub fn try_move(
        &mut self,
        name: &str,
        pos: impl Into<Position>,
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        let mover = self
            .player_color(name)
            .ok_or_else(|| MoveError::UnknownPlayer(name.to_string()))?;
        let mv = Move::new(pos, direction);

        let planned = self.engine().plan(&self.rule_state(), mover, mv).map_err(|reason| {
            trace!("rejected move by {name} at {} toward {}: {reason}", mv.pos, mv.direction);
            reason
        })?;

        Ok(self.commit(mover, planned))
    }

    /// Validate a move for `color` without playing it.
    pub fn check_move(&self, color: Color, mv: Move) -> Result<(), IllegalMove> {
        self.engine().plan(&self.rule_state(), color, mv).map(|_| ())
    }

    fn commit(&mut self, mover: Color, planned: PlannedMove) -> MoveOutcome {
        apply(&mut self.board, &planned.series, planned.mv.direction);

        self.previous_hash = self.current_hash;
        self.current_hash = planned.new_hash;
        debug_assert_eq!(self.current_hash, self.board_hash());

        self.turns += 1;
        let next = self.next_player(mover);
        self.to_move = Some(next);

        let counts = self.board.counts();
        let captured = self.counts.red.saturating_sub(counts.red);
        let ejected = self.counts.of(mover.opponent()).saturating_sub(counts.of(mover.opponent()));
        self.players[mover].captured += captured;
        self.counts = counts;

        // Any exhausted kind ends the game, not only the opponent's color.
        if counts.any_exhausted() || self.players[mover].captured >= CAPTURE_TARGET {
            self.winner = Some(mover);
        }

        debug!(
            "turn {}: {} pushed {} marble(s) from {} toward {}, captured {}",
            self.turns - 1,
            self.players[mover].name,
            planned.series.len(),
            planned.mv.pos,
            planned.mv.direction,
            captured,
        );
        if let Some(winner) = self.winner {
            debug!("{} wins with {} captures", self.players[winner].name, self.players[winner].captured);
        }

        MoveOutcome {
            pushed: planned.series.len(),
            captured,
            ejected,
            next,
            winner: self.winner,
        }
    }

    /// The player to move after `mover`.
    ///
    /// The first move fixes the parity from the mover's registration slot;
    /// afterwards this alternates strictly.
    fn next_player(&mut self, mover: Color) -> Color {
        if self.to_move.is_none() {
            self.parity = if mover == self.order[0] { 1 } else { 0 };
        }
        self.order[(self.turns as usize + self.parity) % 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Marble;

    fn session() -> GameSession {
        GameSession::with_seed(("alice", Color::White), ("bob", Color::Black), 42).unwrap()
    }

    fn session_on(board: Board) -> GameSession {
        let config = SessionConfig::default().with_players(("alice", Color::White), ("bob", Color::Black));
        GameSession::from_position(&config, board, &mut GameRng::new(5)).unwrap()
    }

    #[test]
    fn test_new_session() {
        let game = session();

        assert_eq!(game.current_turn(), None);
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.marble_counts(), MarbleCounts { white: 8, black: 8, red: 13 });
        assert_eq!(game.captured("alice"), Some(0));
        assert_eq!(game.captured("carol"), None);
        assert_eq!(game.current_hash(), game.previous_hash());
        assert_eq!(game.current_hash(), game.board_hash());
    }

    #[test]
    fn test_explicit_rng_gives_exact_keys() {
        let game = GameSession::new(("a", Color::White), ("b", Color::Black), &mut GameRng::new(8)).unwrap();
        let expected = HashTable::build(&mut GameRng::new(8)).hash_board(&Board::initial());
        assert_eq!(game.current_hash(), expected);
    }

    #[test]
    fn test_invalid_registration() {
        let err = GameSession::with_seed(("a", Color::Black), ("b", Color::Black), 1).unwrap_err();
        assert_eq!(err, ConfigError::DuplicateColor(Color::Black));
    }

    #[test]
    fn test_first_move_wrong_piece() {
        // Black owns (0, 5); (0, 0) is white.
        let mut game = session();
        let before = game.clone();

        let err = game.try_move("bob", (0, 0), Direction::Right).unwrap_err();
        assert_eq!(err, MoveError::Illegal(IllegalMove::WrongPiece));
        assert_eq!(game, before);
    }

    #[test]
    fn test_first_move_succeeds() {
        let mut game = session();

        assert!(game.make_move("alice", (0, 0), Direction::Right));
        assert_eq!(game.current_turn(), Some("bob"));
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.board().get(Position::new(0, 0)), Marble::Empty);
        assert_eq!(game.board().get(Position::new(0, 2)), Marble::White);
        assert_eq!(game.current_hash(), game.board_hash());
    }

    #[test]
    fn test_second_registered_player_may_move_first() {
        let mut game = session();

        assert!(game.make_move("bob", (0, 6), Direction::Left));
        assert_eq!(game.current_turn(), Some("alice"));

        assert!(!game.make_move("bob", (6, 0), Direction::Right));
        assert!(game.make_move("alice", (6, 6), Direction::Left));
        assert_eq!(game.current_turn(), Some("bob"));
        assert!(game.make_move("bob", (6, 0), Direction::Right));
        assert_eq!(game.current_turn(), Some("alice"));
        assert_eq!(game.turn_number(), 4);
    }

    #[test]
    fn test_wrong_turn() {
        let mut game = session();
        assert!(game.make_move("alice", (0, 0), Direction::Right));

        let before = game.clone();
        assert_eq!(
            game.try_move("alice", (6, 6), Direction::Left).unwrap_err(),
            MoveError::Illegal(IllegalMove::WrongTurn)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_unknown_player() {
        let mut game = session();
        let before = game.clone();

        assert_eq!(
            game.try_move("mallory", (0, 0), Direction::Right).unwrap_err(),
            MoveError::UnknownPlayer("mallory".to_string())
        );
        assert!(!game.make_move("mallory", (0, 0), Direction::Right));
        assert_eq!(game, before);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let mut game = session();
        let before = game.clone();

        assert!(!game.make_move("alice", (9, -4), Direction::Left));
        assert!(!game.make_move_symbol("alice", (0, 0), 'Q'));
        assert_eq!(game, before);

        assert!(game.make_move_symbol("alice", (0, 0), 'r'));
    }

    #[test]
    fn test_undo_rejected() {
        let mut board = Board::empty();
        board.set(Position::new(3, 1), Marble::White);
        board.set(Position::new(3, 2), Marble::Black);
        board.set(Position::new(0, 6), Marble::Black);
        board.set(Position::new(6, 6), Marble::Red);
        let mut game = session_on(board);
        let start_hash = game.current_hash();

        assert!(game.make_move("alice", (3, 1), Direction::Right));
        assert_eq!(game.board().get(Position::new(3, 3)), Marble::Black);

        // Pushing back left would restore the starting position.
        assert_eq!(
            game.try_move("bob", (3, 3), Direction::Left).unwrap_err(),
            MoveError::Illegal(IllegalMove::RepeatedPosition)
        );
        assert_eq!(game.previous_hash(), start_hash);
        assert!(game.make_move("bob", (0, 6), Direction::Left));
    }

    #[test]
    fn test_capture_credit() {
        let mut board = Board::empty();
        board.set(Position::new(2, 4), Marble::White);
        board.set(Position::new(2, 5), Marble::Red);
        board.set(Position::new(2, 6), Marble::Red);
        board.set(Position::new(4, 4), Marble::Red);
        board.set(Position::new(6, 0), Marble::Black);
        let mut game = session_on(board);

        let outcome = game.try_move("alice", (2, 4), Direction::Right).unwrap();
        assert_eq!(outcome.captured, 1);
        assert_eq!(outcome.pushed, 3);
        assert_eq!(outcome.winner, None);
        assert_eq!(game.captured("alice"), Some(1));
        assert_eq!(game.captured("bob"), Some(0));
        assert_eq!(game.marble_counts().red, 2);
    }

    #[test]
    fn test_win_by_exhausting_opponent() {
        let mut board = Board::empty();
        board.set(Position::new(1, 5), Marble::White);
        board.set(Position::new(1, 6), Marble::Black);
        board.set(Position::new(3, 3), Marble::Red);
        let mut game = session_on(board);

        let outcome = game.try_move("alice", (1, 5), Direction::Right).unwrap();
        assert_eq!(outcome.ejected, 1);
        assert_eq!(outcome.winner, Some(Color::White));
        assert_eq!(game.winner(), Some("alice"));

        let before = game.clone();
        for name in ["alice", "bob"] {
            for row in -1..8 {
                for col in -1..8 {
                    for dir in Direction::ALL {
                        assert_eq!(
                            game.try_move(name, (row, col), dir).unwrap_err(),
                            MoveError::Illegal(IllegalMove::GameOver)
                        );
                    }
                }
            }
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_when_reds_run_out() {
        let mut board = Board::empty();
        board.set(Position::new(0, 0), Marble::Black);
        board.set(Position::new(5, 0), Marble::White);
        board.set(Position::new(6, 0), Marble::Red);
        let mut game = session_on(board);

        assert!(game.make_move("alice", (5, 0), Direction::Backward));
        assert_eq!(game.marble_counts().red, 0);
        assert_eq!(game.winner(), Some("alice"));
    }

    #[test]
    fn test_win_by_capture_target() {
        let mut board = Board::empty();
        board.set(Position::new(3, 5), Marble::Black);
        board.set(Position::new(3, 6), Marble::Red);
        board.set(Position::new(1, 1), Marble::Red);
        board.set(Position::new(5, 5), Marble::White);
        let mut game = session_on(board);
        game.players[Color::Black].captured = CAPTURE_TARGET - 1;

        assert!(game.make_move("bob", (3, 5), Direction::Right));
        assert_eq!(game.captured("bob"), Some(CAPTURE_TARGET));
        assert_eq!(game.winner(), Some("bob"));
    }

    #[test]
    fn test_check_move_does_not_mutate() {
        let game = session();
        let before = game.clone();

        assert_eq!(game.check_move(Color::White, Move::new((0, 0), Direction::Right)), Ok(()));
        assert_eq!(
            game.check_move(Color::White, Move::new((0, 1), Direction::Right)),
            Err(IllegalMove::InvalidDirection)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_players_in_registration_order() {
        let game = GameSession::with_seed(("zed", Color::Black), ("amy", Color::White), 3).unwrap();
        let names: Vec<_> = game.players().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
        assert_eq!(game.player_color("amy"), Some(Color::White));
    }
}
