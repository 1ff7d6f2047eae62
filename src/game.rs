use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 3;
/// Largest accepted board.
pub const MAX_BOARD_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell known to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move request as typed by a player. Nothing is known about it yet,
/// so coordinates may be negative or past the edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: i64,
    pub col: i64,
}

impl Move {
    pub fn new(row: i64, col: i64) -> Self {
        Move { row, col }
    }

    /// The board cell this move targets, if it lies inside an `size`×`size` board.
    pub fn to_position(&self, size: usize) -> Option<Position> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < size && col < size).then(|| Position::new(row, col))
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Move::new(pos.row as i64, pos.col as i64)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 3, got {0}")]
    BoardTooSmall(usize),
    #[error("Board size must be at most 32, got {0}")]
    BoardTooLarge(usize),
    #[error("Move {mv} is outside the {size}x{size} board")]
    OutOfBounds { mv: Move, size: usize },
    #[error("Cell {0} is already taken")]
    Occupied(Position),
    #[error("Game already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Drawn,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major, `None` for an empty cell
    cells: Vec<Option<Mark>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::BoardTooSmall(size));
        }
        if size > MAX_BOARD_SIZE {
            return Err(GameError::BoardTooLarge(size));
        }
        Ok(Board {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.row * self.size + pos.col]
    }

    fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row * self.size + pos.col] = Some(mark);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| Position::new(row, col)))
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    /// Whether `mark` fills a whole line running through `pos`.
    pub fn completes_line(&self, pos: Position, mark: Mark) -> bool {
        let n = self.size;
        let filled = |row: usize, col: usize| self.get(Position::new(row, col)) == Some(mark);

        (0..n).all(|col| filled(pos.row, col))
            || (0..n).all(|row| filled(row, pos.col))
            || (pos.row == pos.col && (0..n).all(|i| filled(i, i)))
            || (pos.row + pos.col == n - 1 && (0..n).all(|i| filled(i, n - 1 - i)))
    }

    /// Text grid with `_` for empty cells.
    pub fn render(&self) -> String {
        let rule = format!(" {}-\n", "----".repeat(self.size));
        let mut result = rule.clone();
        for row in 0..self.size {
            result.push('|');
            for col in 0..self.size {
                let symbol = self.get(Position::new(row, col)).map_or('_', |m| m.symbol());
                result.push_str(&format!(" {} |", symbol));
            }
            result.push('\n');
            result.push_str(&rule);
        }
        result
    }
}

/// Everything one match needs between moves. Transitions return a new
/// state and leave the old one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    board: Board,
    current: Mark,
    status: GameStatus,
    move_count: usize,
    last_move: Option<Position>,
}

impl MatchState {
    /// Empty board with X to move.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(MatchState {
            board: Board::new(size)?,
            current: Mark::X,
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn current_mark(&self) -> Mark {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn validate(&self, mv: Move) -> Result<Position, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let size = self.board.size();
        let pos = mv
            .to_position(size)
            .ok_or(GameError::OutOfBounds { mv, size })?;
        if self.board.get(pos).is_some() {
            return Err(GameError::Occupied(pos));
        }
        Ok(pos)
    }

    /// Place the current mark, then settle win, draw or hand the turn over.
    pub fn apply_move(&self, mv: Move) -> Result<MatchState, GameError> {
        let pos = self.validate(mv)?;
        let mover = self.current;

        let mut next = self.clone();
        next.board.set(pos, mover);
        next.move_count += 1;
        next.last_move = Some(pos);

        // Only the mover can have completed a line
        if next.board.completes_line(pos, mover) {
            next.status = GameStatus::Won(mover);
        } else if next.board.is_full() {
            next.status = GameStatus::Drawn;
        } else {
            next.current = mover.opponent();
        }

        Ok(next)
    }

    pub fn display_board(&self) -> String {
        self.board.render()
    }
}
